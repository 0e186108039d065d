//
//  apim-cli
//  lib.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! # APIM CLI Library
//!
//! A command-line interface library for extracting the configuration of an
//! Azure API Management (APIM) service into Azure Resource Manager templates.
//!
//! ## Overview
//!
//! This library provides the core functionality for the `apim` CLI tool. It reads
//! the current state of an API Management service through the Azure Resource
//! Manager REST API and emits declarative ARM templates describing that state,
//! suitable for redeployment to another service or environment.
//!
//! ## Features
//!
//! - **Product extraction**: Products with their policy, tag, and group
//!   attachments, wired together with ARM reference expressions and `dependsOn`
//!   ordering
//! - **Service-level extraction**: Groups, tags, and the global service policy
//! - **Single-API mode**: Narrow the extraction to resources linked to one API
//! - **Policy files**: Policy XML can be inlined or written to files referenced
//!   through a template parameter
//! - **Scriptable**: Plain JSON templates on disk, structured logging via
//!   `APIM_DEBUG`
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: HTTP clients for the Azure Resource Manager API
//! - [`auth`]: Access-token resolution (flag, environment, Azure CLI)
//! - [`config`]: Persisted defaults (subscription, resource group, service)
//! - [`extractor`]: Entity extractors building template resource graphs
//! - [`template`]: ARM template types, expressions, and the template builder
//! - [`output`]: Template and policy file writing
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use apim_cli::api::ApimClient;
//! use apim_cli::auth::AccessToken;
//!
//! let client = ApimClient::new(
//!     "00000000-0000-0000-0000-000000000000",
//!     "my-resource-group",
//!     "my-apim-service",
//! )
//! .expect("failed to create client")
//! .with_auth(AccessToken::new("aad-bearer-token"));
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap
/// derive API. Each command module handles parsing and execution of its
/// respective functionality.
pub mod cli;

/// API client implementations for the Azure Resource Manager API.
///
/// This module provides HTTP clients for the API Management resource provider
/// (`Microsoft.ApiManagement`). The clients handle authentication, request
/// building, `nextLink` pagination, and error handling.
pub mod api;

/// Access-token resolution for the management endpoint.
///
/// Resolves an AAD bearer token from, in order: an explicit flag, the
/// `APIM_ACCESS_TOKEN` environment variable, or the Azure CLI
/// (`az account get-access-token`).
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's persisted defaults stored in platform-specific locations:
/// - Linux: `~/.config/apim/config.toml`
/// - macOS: `~/Library/Application Support/apim/config.toml`
/// - Windows: `%APPDATA%\apim\config.toml`
pub mod config;

/// Entity extractors.
///
/// Each extractor fetches one kind of API Management resource and maps it into
/// template resources with correct cross-resource reference expressions and
/// dependency ordering. The product extractor is the core path: products plus
/// their policy, tag, and group attachments.
pub mod extractor;

/// ARM template types and helpers.
///
/// Provides the [`template::Template`] aggregate, per-kind template resource
/// records, ARM expression formatting, and the template builder that seeds
/// the shared parameters.
pub mod template;

/// Template and policy file output.
///
/// Serializes templates as pretty-printed JSON into the output directory and
/// writes policy XML files referenced by linked policy resources.
pub mod output;

/// Re-export of the main CLI struct for convenient access.
///
/// The [`Cli`] struct represents the root command and is the entry point
/// for parsing command-line arguments.
pub use cli::Cli;

/// Re-export of the configuration struct.
///
/// The [`Config`] struct provides access to the user's persisted defaults,
/// such as the default subscription and resource group.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "apim";

/// Application version constant.
///
/// The current version of the CLI, automatically derived from Cargo.toml
/// at compile time using the `CARGO_PKG_VERSION` environment variable.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments. Use `--help` to see correct usage.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// No access token could be resolved, or the token was rejected by the
    /// management endpoint. Run `az login` or set `APIM_ACCESS_TOKEN`.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The subscription, resource group, or API Management service does not
    /// exist or the caller does not have permission to read it.
    pub const NOT_FOUND: i32 = 8;

    /// Operation cancelled by the user, typically by declining a
    /// confirmation prompt.
    pub const CANCELLED: i32 = 16;

    /// Management API rate limit exceeded. Wait before retrying.
    pub const RATE_LIMIT: i32 = 32;
}
