//
//  apim-cli
//  api/client.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! # HTTP Client Wrapper for the Azure Resource Manager API
//!
//! This module provides the core HTTP client for reading API Management
//! configuration through the management endpoint. It handles service path
//! construction, authentication, `api-version` query parameters, and
//! request/response serialization.
//!
//! ## Features
//!
//! - Service-scoped path construction under a subscription and resource group
//! - Bearer-token header injection
//! - JSON deserialization into typed contracts
//! - ARM error-body parsing with user-friendly messages
//! - `nextLink` pagination for collection endpoints

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::AccessToken;

use super::common::ListResponse;

/// Default Azure Resource Manager endpoint (public cloud).
///
/// Sovereign clouds (Azure Government, Azure China) use a different endpoint,
/// which can be supplied through [`ApimClient::with_endpoint`].
pub const DEFAULT_MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";

/// Management API version sent with every request.
///
/// This is the `Microsoft.ApiManagement` resource provider version the emitted
/// templates are stamped with as well, so the extracted resources deploy
/// against the same contract they were read from.
pub const API_VERSION: &str = "2021-08-01";

/// Parses an ARM error response into an [`ApiError`](super::ApiError).
///
/// The management endpoint returns errors in the format:
/// ```json
/// {"error": {"code": "ResourceNotFound", "message": "Human readable message"}}
/// ```
///
/// Some older endpoints return a flat format:
/// ```json
/// {"code": "NotFound", "message": "Human readable message"}
/// ```
///
/// The message is extracted from either format; if parsing fails, the raw
/// body is used instead. The status code picks the
/// [`ApiError`](super::ApiError) variant.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw error response body
pub fn format_api_error(status: StatusCode, body: &str) -> anyhow::Error {
    let detail =
        extract_error_message(body).unwrap_or_else(|| format!("management API error: {}", body));
    super::ApiError::from_status(status.as_u16(), &detail).into()
}

/// Extracts the human-readable message from an ARM error body.
fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;

    // Standard ARM format: {"error": {"code": "...", "message": "..."}}
    if let Some(error) = json.get("error") {
        let message = error.get("message").and_then(|m| m.as_str());
        let code = error.get("code").and_then(|c| c.as_str());
        match (code, message) {
            (Some(code), Some(message)) => return Some(format!("{} ({})", message, code)),
            (None, Some(message)) => return Some(message.to_string()),
            _ => {}
        }
    }

    // Flat format: {"code": "...", "message": "..."}
    json.get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

/// The main HTTP client for reading API Management configuration.
///
/// This client handles all HTTP communication with the Azure Resource Manager
/// endpoint, including:
/// - Building request URLs scoped to one API Management service
/// - Applying the bearer token
/// - Appending the `api-version` query parameter
/// - Deserializing responses and mapping error bodies
/// - Following `nextLink` URLs for paged collections
///
/// # Creating a Client
///
/// ```rust,no_run
/// use apim_cli::api::ApimClient;
/// use apim_cli::auth::AccessToken;
///
/// let client = ApimClient::new("subscription-id", "resource-group", "service-name")?
///     .with_auth(AccessToken::new("aad-bearer-token"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct ApimClient {
    /// The underlying HTTP client
    http: Client,
    /// The management endpoint (no trailing slash)
    endpoint: String,
    /// The Azure subscription id
    subscription_id: String,
    /// The resource group containing the service
    resource_group: String,
    /// The API Management service name
    service_name: String,
    /// Optional bearer token
    auth: Option<AccessToken>,
}

impl ApimClient {
    /// Creates a new client scoped to one API Management service.
    ///
    /// The client targets the public-cloud management endpoint by default;
    /// use [`with_endpoint`](Self::with_endpoint) for sovereign clouds.
    ///
    /// # Parameters
    ///
    /// * `subscription_id` - The Azure subscription id
    /// * `resource_group` - The resource group containing the service
    /// * `service_name` - The API Management service name
    ///
    /// # Returns
    ///
    /// Returns `Ok(ApimClient)` on success, or an error if the HTTP client
    /// could not be created.
    pub fn new(subscription_id: &str, resource_group: &str, service_name: &str) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("apim/{}", crate::VERSION))
                .build()?,
            endpoint: DEFAULT_MANAGEMENT_ENDPOINT.to_string(),
            subscription_id: subscription_id.to_string(),
            resource_group: resource_group.to_string(),
            service_name: service_name.to_string(),
            auth: None,
        })
    }

    /// Overrides the management endpoint.
    ///
    /// Used for sovereign clouds (`https://management.usgovcloudapi.net`,
    /// `https://management.chinacloudapi.cn`) and by tests that point the
    /// client at a mock server. A trailing slash is stripped.
    ///
    /// # Parameters
    ///
    /// * `endpoint` - The management endpoint base URL
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Sets the bearer token for this client.
    ///
    /// This method uses the builder pattern and returns `self` for chaining.
    pub fn with_auth(mut self, auth: AccessToken) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns the name of the service this client is scoped to.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the ARM path of the service this client is scoped to.
    ///
    /// The path has the form:
    /// `/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.ApiManagement/service/{name}`
    ///
    /// All typed client paths are appended to this prefix.
    pub fn service_path(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.ApiManagement/service/{}",
            self.subscription_id, self.resource_group, self.service_name
        )
    }

    /// Returns the full URL for a path under the service, including the
    /// `api-version` query parameter.
    ///
    /// Paths may carry their own query string (policy reads pass `format=`);
    /// the separator adapts accordingly.
    fn service_url(&self, path: &str) -> String {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}{}api-version={}",
            self.endpoint,
            self.service_path(),
            path,
            separator,
            API_VERSION
        )
    }

    async fn get_url<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut request = self.http.get(url);

        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &text));
        }

        Ok(response.json().await?)
    }

    /// Makes an HTTP GET request to a path under the service.
    ///
    /// The path is appended to the service's ARM path and the `api-version`
    /// query parameter is added. The bearer token is applied if configured.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    ///
    /// # Parameters
    ///
    /// * `path` - The path under the service (e.g., `/products/starter`)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network request fails
    /// - The response status is not successful (2xx)
    /// - The response body cannot be deserialized to type `T`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_url(&self.service_url(path)).await
    }

    /// Makes an HTTP GET request, mapping 404 to `None`.
    ///
    /// Policy documents are optional resources: a service or product without a
    /// policy answers 404 rather than an empty body. Other failures are
    /// reported as errors.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type to deserialize the response JSON into
    ///
    /// # Parameters
    ///
    /// * `path` - The path under the service (e.g., `/products/starter/policies/policy`)
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.service_url(path);
        let mut request = self.http.get(&url);

        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(format_api_error(status, &text));
        }

        Ok(Some(response.json().await?))
    }

    /// Fetches every page of an ARM collection endpoint.
    ///
    /// ARM collections answer `{"value": [...], "nextLink": "..."}`; this
    /// method follows `nextLink` until it is absent, concatenating the pages
    /// in order. `nextLink` is an absolute URL and is validated before use so
    /// a malformed link fails loudly instead of producing a confusing
    /// request error.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The element type of the collection
    ///
    /// # Parameters
    ///
    /// * `path` - The collection path under the service (e.g., `/products`)
    ///
    /// # Returns
    ///
    /// Returns every element of the collection in the order the service
    /// reported them.
    pub async fn get_all_pages<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut page: ListResponse<T> = self.get(path).await?;
        let mut items = std::mem::take(&mut page.value);

        while let Some(next) = page.next_url().map(str::to_string) {
            let next = Url::parse(&next)
                .map_err(|e| anyhow::anyhow!("invalid nextLink '{}': {}", next, e))?;
            page = self.get_url(next.as_str()).await?;
            items.append(&mut page.value);
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_api_error_arm_format() {
        let body = r#"{"error": {"code": "ResourceNotFound", "message": "Service not found"}}"#;
        let err = format_api_error(StatusCode::NOT_FOUND, body);
        assert_eq!(
            err.to_string(),
            "Resource not found: Service not found (ResourceNotFound)"
        );
    }

    #[test]
    fn test_format_api_error_flat_format() {
        let body = r#"{"message": "Token expired"}"#;
        let err = format_api_error(StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.to_string(), "Authentication failed: Token expired");
    }

    #[test]
    fn test_format_api_error_fallback() {
        let err = format_api_error(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("<html>oops</html>"));
    }

    #[test]
    fn test_service_path() {
        let client = ApimClient::new("sub-1", "rg-1", "svc-1").unwrap();
        assert_eq!(
            client.service_path(),
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.ApiManagement/service/svc-1"
        );
    }

    #[test]
    fn test_with_endpoint_strips_trailing_slash() {
        let client = ApimClient::new("s", "g", "n")
            .unwrap()
            .with_endpoint("http://127.0.0.1:1234/");
        assert_eq!(client.endpoint, "http://127.0.0.1:1234");
    }
}
