//
//  apim-cli
//  api/common/mod.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Common API Types for the Management Endpoint
//!
//! This module provides shared types and utilities used across the typed
//! API Management clients: error handling, the ARM collection wrapper, and
//! resource-id parsing.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for management API operations
//! - [`ListResponse`] - ARM collection pagination format (re-exported from
//!   [`pagination`])
//! - [`resource_name_from_id`] - Extracts the trailing name segment from an
//!   ARM resource id
//!
//! # Notes
//!
//! - All types implement `Debug` for easy inspection
//! - Serialization/deserialization is handled via `serde` for JSON compatibility

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for management API operations.
///
/// `ApiError` provides a set of error variants covering common failure
/// scenarios when reading configuration through the Azure Resource Manager
/// endpoint. It implements the standard `Error` trait via `thiserror` for
/// ergonomic error handling.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `AuthRequired` | No access token provided | 401 |
/// | `AuthFailed` | Invalid or expired token | 401 |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `RateLimited` | Too many requests, retry later | 429 |
/// | `Forbidden` | Insufficient RBAC permissions | 403 |
/// | `BadRequest` | Invalid request parameters | 400 |
/// | `ServerError` | Internal server error | 5xx |
/// | `Network` | Network connectivity issues | N/A |
/// | `Unknown` | Unexpected or unclassified errors | N/A |
///
/// # Notes
///
/// - The `Network` variant automatically converts from `reqwest::Error`
/// - Error messages are designed to be user-friendly and actionable
#[derive(Error, Debug)]
pub enum ApiError {
    /// An access token is required but was not provided.
    ///
    /// Run `az login` or set `APIM_ACCESS_TOKEN` before retrying.
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed due to an invalid or expired token.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    ///
    /// This typically indicates a 404 response: the subscription, resource
    /// group, service, or entity does not exist or is not visible to the
    /// caller.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The management API rate limit has been exceeded.
    ///
    /// ARM throttles reads per subscription and per tenant. When this error
    /// occurs, the client should wait before retrying; the `Retry-After`
    /// response header carries the delay.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Access to the resource is forbidden.
    ///
    /// The caller's role assignments do not allow reading the service.
    /// This maps to HTTP 403 responses.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The request was malformed or contained invalid parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error occurred behind the management endpoint.
    ///
    /// These map to HTTP 5xx responses, are typically transient, and may
    /// succeed on retry.
    #[error("Server error ({0}): {1}")]
    ServerError(u16, String),

    /// A network-level failure (DNS, TLS, connection reset).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An unexpected or unclassified error.
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Maps an HTTP status code to the matching variant.
    ///
    /// # Parameters
    ///
    /// * `status` - The HTTP status code of the failed response
    /// * `detail` - Context for the message (resource description or body)
    pub fn from_status(status: u16, detail: &str) -> Self {
        match status {
            400 => Self::BadRequest(detail.to_string()),
            401 => Self::AuthFailed(detail.to_string()),
            403 => Self::Forbidden(detail.to_string()),
            404 => Self::NotFound(detail.to_string()),
            429 => Self::RateLimited,
            500..=599 => Self::ServerError(status, detail.to_string()),
            _ => Self::Unknown(format!("status {}: {}", status, detail)),
        }
    }
}

/// Matches the trailing name segment of an ARM resource id.
///
/// Resource ids have the form
/// `/subscriptions/.../providers/Microsoft.ApiManagement/service/<svc>/<kind>/<name>`;
/// the final segment is the entity name used in template expressions.
static RESOURCE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/([^/]+)/?$").expect("resource id regex is valid"));

/// Extracts the trailing name segment from an ARM resource id.
///
/// Contracts returned by the management endpoint carry both a `name` field and
/// a full `id`; nested contracts sometimes only carry the `id`. This helper
/// recovers the entity name in that case.
///
/// # Parameters
///
/// * `id` - The ARM resource id
///
/// # Returns
///
/// The final path segment, or `None` for an empty or root path.
///
/// # Example
///
/// ```rust
/// use apim_cli::api::common::resource_name_from_id;
///
/// let id = "/subscriptions/s/resourceGroups/g/providers/Microsoft.ApiManagement/service/svc/products/starter";
/// assert_eq!(resource_name_from_id(id), Some("starter"));
/// ```
pub fn resource_name_from_id(id: &str) -> Option<&str> {
    RESOURCE_NAME_RE
        .captures(id)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_from_id() {
        let id = "/subscriptions/s/resourceGroups/g/providers/Microsoft.ApiManagement/service/svc/products/starter";
        assert_eq!(resource_name_from_id(id), Some("starter"));
    }

    #[test]
    fn test_resource_name_from_id_trailing_slash() {
        assert_eq!(resource_name_from_id("/products/unlimited/"), Some("unlimited"));
    }

    #[test]
    fn test_resource_name_from_id_empty() {
        assert_eq!(resource_name_from_id(""), None);
        assert_eq!(resource_name_from_id("/"), None);
    }

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(ApiError::from_status(404, "x"), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from_status(429, "x"), ApiError::RateLimited));
        assert!(matches!(ApiError::from_status(503, "x"), ApiError::ServerError(503, _)));
    }
}
