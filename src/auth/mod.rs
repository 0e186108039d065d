//
//  apim-cli
//  auth/mod.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! # Authentication Module
//!
//! This module resolves the AAD bearer token used against the Azure Resource
//! Manager endpoint.
//!
//! ## Resolution Order
//!
//! 1. An explicit `--access-token` flag
//! 2. The `APIM_ACCESS_TOKEN` environment variable
//! 3. The Azure CLI: `az account get-access-token`
//!
//! ARM tokens are short-lived (about an hour), so nothing is persisted:
//! a fresh token is resolved on every run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use apim_cli::auth::resolve_access_token;
//!
//! # fn example() -> anyhow::Result<()> {
//! let token = resolve_access_token(None)?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use reqwest::RequestBuilder;
use serde::Deserialize;
use tracing::debug;

/// Environment variable consulted for an explicit token.
pub const TOKEN_ENV_VAR: &str = "APIM_ACCESS_TOKEN";

/// A bearer token for the management endpoint.
///
/// Wraps the raw token string so it is applied to requests in exactly one
/// place and never logged by accident (`Debug` prints a placeholder).
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Applies this token to a request as a `Bearer` authorization header.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.0)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Validates the format of a token string.
///
/// Performs basic validation to ensure the token meets minimum requirements:
/// - Token must not be empty
/// - Token must not contain whitespace characters
///
/// This function does NOT validate the token against AAD; it only checks the
/// format so an obviously broken value (a pasted command, an empty variable)
/// fails before the first network call.
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Shape of `az account get-access-token --output json`.
#[derive(Debug, Deserialize)]
struct AzTokenResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// Obtains a token from the Azure CLI.
///
/// Shells out to `az account get-access-token` for the ARM audience. Requires
/// a prior `az login`; the error message says so when the CLI is missing or
/// not logged in.
fn token_from_azure_cli() -> Result<String> {
    let output = std::process::Command::new("az")
        .args([
            "account",
            "get-access-token",
            "--resource",
            "https://management.azure.com/",
            "--output",
            "json",
        ])
        .output()
        .context("failed to run 'az' - install the Azure CLI or set APIM_ACCESS_TOKEN")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "az account get-access-token failed: {} - run 'az login' or set {}",
            stderr.trim(),
            TOKEN_ENV_VAR
        );
    }

    let response: AzTokenResponse = serde_json::from_slice(&output.stdout)
        .context("unexpected output from 'az account get-access-token'")?;

    Ok(response.access_token)
}

/// Resolves the bearer token for this run.
///
/// # Parameters
///
/// * `explicit` - A token passed on the command line, if any
///
/// # Resolution Order
///
/// 1. `explicit` (the `--access-token` flag)
/// 2. The `APIM_ACCESS_TOKEN` environment variable
/// 3. The Azure CLI
///
/// # Errors
///
/// Returns an error when a provided token is malformed, or when no token was
/// provided and the Azure CLI is unavailable or not logged in.
pub fn resolve_access_token(explicit: Option<&str>) -> Result<AccessToken> {
    if let Some(token) = explicit {
        let token = token.trim();
        if !validate_token(token) {
            anyhow::bail!("the provided access token is empty or contains whitespace");
        }
        debug!("using access token from command line");
        return Ok(AccessToken::new(token));
    }

    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        let token = token.trim().to_string();
        if !validate_token(&token) {
            anyhow::bail!("{} is set but empty or malformed", TOKEN_ENV_VAR);
        }
        debug!("using access token from {}", TOKEN_ENV_VAR);
        return Ok(AccessToken::new(token));
    }

    debug!("resolving access token via the Azure CLI");
    let token = token_from_azure_cli()?;
    if !validate_token(&token) {
        anyhow::bail!("the Azure CLI returned a malformed access token");
    }

    Ok(AccessToken::new(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_token() {
        assert!(validate_token("eyJ0eXAiOiJKV1Qi"));
        assert!(!validate_token(""));
        assert!(!validate_token("token with spaces"));
        assert!(!validate_token("token\nnewline"));
    }

    #[test]
    fn test_explicit_token_is_trimmed() {
        let token = resolve_access_token(Some("  abc123  ")).unwrap();
        // Applied as a bearer header, so only format matters here
        assert_eq!(format!("{:?}", token), "AccessToken(***)");
    }

    #[test]
    fn test_explicit_empty_token_rejected() {
        assert!(resolve_access_token(Some("   ")).is_err());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = AccessToken::new("super-secret");
        assert!(!format!("{:?}", token).contains("super-secret"));
    }
}
