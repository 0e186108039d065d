//
//  apim-cli
//  api/policies.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Policy API types and client.
//!
//! Policies are XML documents applied at service, product, API, or operation
//! scope. A scope without a policy answers 404, so the client surfaces policy
//! reads as `Option` rather than treating absence as a failure.
//!
//! # Policy formats
//!
//! The management endpoint reports one of four formats:
//!
//! | Format | Meaning |
//! |--------|---------|
//! | `xml` | Inline XML, XML-encoded |
//! | `rawxml` | Inline XML, literal |
//! | `xml-link` | XML fetched from a URL |
//! | `rawxml-link` | Literal XML fetched from a URL |
//!
//! The extractor requests `rawxml` so the body can be written to a file or
//! inlined without another decoding pass.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::client::ApimClient;

/// Policy format constant for literal inline XML.
pub const FORMAT_RAWXML: &str = "rawxml";

/// Policy format constant for literal XML referenced by URL.
pub const FORMAT_RAWXML_LINK: &str = "rawxml-link";

/// A policy document as returned by the management endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyContract {
    /// Resource name; always `policy` for scope policies.
    #[serde(default)]
    pub name: Option<String>,

    /// The policy's contract properties.
    pub properties: PolicyProperties,
}

/// Contract properties of a policy document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyProperties {
    /// Content format of `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// The policy content: XML, or a URL for `-link` formats.
    pub value: String,
}

/// Typed client for policy documents.
pub struct PoliciesClient<'a> {
    client: &'a ApimClient,
}

impl<'a> PoliciesClient<'a> {
    /// Creates a policies client over the shared management client.
    pub fn new(client: &'a ApimClient) -> Self {
        Self { client }
    }

    /// Fetches the global service policy, if one is defined.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the service has no global policy.
    pub async fn get_global(&self) -> Result<Option<PolicyContract>> {
        self.client
            .get_optional(&format!("/policies/policy?format={}", FORMAT_RAWXML))
            .await
    }

    /// Fetches a product's policy, if one is defined.
    ///
    /// # Parameters
    ///
    /// * `product_name` - The product identifier (not its display name)
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the product has no policy.
    pub async fn get_for_product(&self, product_name: &str) -> Result<Option<PolicyContract>> {
        self.client
            .get_optional(&format!(
                "/products/{}/policies/policy?format={}",
                product_name, FORMAT_RAWXML
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_policy_contract() {
        let json = r#"{
            "name": "policy",
            "properties": {
                "format": "rawxml",
                "value": "<policies><inbound><base /></inbound></policies>"
            }
        }"#;

        let policy: PolicyContract = serde_json::from_str(json).unwrap();
        assert_eq!(policy.properties.format.as_deref(), Some(FORMAT_RAWXML));
        assert!(policy.properties.value.starts_with("<policies>"));
    }
}
