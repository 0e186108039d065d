//
//  apim-cli
//  api/tags.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Tag API types and client.
//!
//! Tags are free-form labels attachable to APIs, products, and operations.
//! The extractor reads both the service-level tag list and the per-product
//! associations; the latter become nested `products/tags` resources in the
//! emitted template.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::client::ApimClient;

/// A tag as returned by the management endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TagContract {
    /// Full ARM resource id of the tag.
    #[serde(default)]
    pub id: Option<String>,

    /// Tag identifier, unique within the service.
    pub name: String,

    /// The tag's contract properties.
    pub properties: TagProperties,
}

/// Contract properties of a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagProperties {
    /// Human-readable tag name.
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Typed client for tag resources.
pub struct TagsClient<'a> {
    client: &'a ApimClient,
}

impl<'a> TagsClient<'a> {
    /// Creates a tags client over the shared management client.
    pub fn new(client: &'a ApimClient) -> Self {
        Self { client }
    }

    /// Fetches every tag of the service, following pagination.
    pub async fn get_all(&self) -> Result<Vec<TagContract>> {
        self.client.get_all_pages("/tags").await
    }

    /// Fetches the tags associated with a product.
    ///
    /// # Parameters
    ///
    /// * `product_name` - The product identifier (not its display name)
    pub async fn get_all_linked_to_product(&self, product_name: &str) -> Result<Vec<TagContract>> {
        self.client
            .get_all_pages(&format!("/products/{}/tags", product_name))
            .await
    }

    /// Fetches the tags associated with an API.
    ///
    /// Used in single-API extractions to narrow the service-level tags
    /// template to the tags that API actually uses.
    ///
    /// # Parameters
    ///
    /// * `api_name` - The API identifier (not its display name)
    pub async fn get_all_linked_to_api(&self, api_name: &str) -> Result<Vec<TagContract>> {
        self.client
            .get_all_pages(&format!("/apis/{}/tags", api_name))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tag_contract() {
        let json = r#"{
            "id": "/subscriptions/s/resourceGroups/g/providers/Microsoft.ApiManagement/service/svc/tags/billing",
            "name": "billing",
            "properties": {"displayName": "Billing"}
        }"#;

        let tag: TagContract = serde_json::from_str(json).unwrap();
        assert_eq!(tag.name, "billing");
        assert_eq!(tag.properties.display_name, "Billing");
    }
}
