//
//  apim-cli
//  api/mod.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides HTTP client implementations for the Azure Resource
//! Manager REST API, scoped to the API Management resource provider
//! (`Microsoft.ApiManagement`).
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: Core HTTP client with authentication, `api-version` handling,
//!   and `nextLink` pagination
//! - [`service`]: The API Management service instance (SKU lookup)
//! - [`products`]: Products and API-linked products
//! - [`groups`]: Groups and product-linked groups
//! - [`tags`]: Tags and product/API-linked tags
//! - [`policies`]: Global and product-scope policy documents
//! - [`common`]: Shared types (errors, pagination, resource-id parsing)
//!
//! ## Usage
//!
//! ### Creating a Client
//!
//! ```rust,no_run
//! use apim_cli::api::ApimClient;
//! use apim_cli::api::products::ProductsClient;
//! use apim_cli::auth::AccessToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ApimClient::new("subscription-id", "resource-group", "service-name")?
//!     .with_auth(AccessToken::new("aad-bearer-token"));
//!
//! let products = ProductsClient::new(&client).get_all().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! API errors are returned as [`ApiError`] variants, which map to common HTTP
//! error scenarios:
//!
//! - `AuthRequired`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `RateLimited`: 429 Too Many Requests
//! - `ServerError`: 5xx Server Errors

/// Core HTTP client wrapper for the Azure Resource Manager API.
///
/// Provides the [`ApimClient`] struct which handles:
/// - Service path construction under the subscription and resource group
/// - Bearer-token injection
/// - `api-version` query-string handling
/// - Error-body parsing and status code mapping
/// - `nextLink` pagination
pub mod client;

/// The API Management service instance resource.
pub mod service;

/// Products and API-linked products.
pub mod products;

/// Groups and product-linked groups.
pub mod groups;

/// Tags, product-linked tags, and API-linked tags.
pub mod tags;

/// Global and product-scope policy documents.
pub mod policies;

/// Common types shared by the typed clients.
///
/// Includes:
/// - [`ApiError`]: Standardized error types
/// - [`common::ListResponse`]: ARM collection pagination format
/// - Resource-id parsing helpers
pub mod common;

/// Re-export of the main management API client.
pub use client::ApimClient;

/// Re-export of the common API error type.
pub use common::ApiError;
