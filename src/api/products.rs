//
//  apim-cli
//  api/products.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Product API types and client.
//!
//! This module provides types for reading API Management products. Products
//! bundle one or more APIs behind a subscription: they carry the visibility,
//! approval, and subscription rules a consumer signs up to.
//!
//! # Overview
//!
//! Products are the unit the extractor is organized around. Each product may
//! have a policy document, tag associations, and group associations; those
//! attachments are read through their own clients and wired to the product in
//! the emitted template via `dependsOn`.
//!
//! # Notes
//!
//! - The `name` field is the product identifier used in ARM paths and template
//!   expressions; `properties.display_name` is the human-readable title
//! - `state` is either `published` or `notPublished`

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::client::ApimClient;

/// A product as returned by the management endpoint.
///
/// # Fields
///
/// * `id` - Full ARM resource id
/// * `name` - Product identifier (used in paths and reference expressions)
/// * `properties` - The product's contract properties
#[derive(Debug, Clone, Deserialize)]
pub struct ProductContract {
    /// Full ARM resource id of the product.
    #[serde(default)]
    pub id: Option<String>,

    /// Product identifier, unique within the service.
    pub name: String,

    /// The product's contract properties.
    pub properties: ProductProperties,
}

/// Contract properties of a product.
///
/// These properties round-trip unchanged into the emitted template resource,
/// so every optional field is skipped when absent rather than serialized as
/// `null`.
///
/// # Fields
///
/// * `display_name` - Human-readable product title
/// * `description` - Optional description shown on the developer portal
/// * `terms` - Optional terms of use a subscriber must accept
/// * `subscription_required` - Whether consuming the product requires a subscription
/// * `approval_required` - Whether subscription requests require approval
/// * `subscriptions_limit` - Maximum concurrent subscriptions per user
/// * `state` - `published` or `notPublished`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductProperties {
    /// Human-readable product title.
    #[serde(rename = "displayName")]
    pub display_name: String,

    /// Optional description shown on the developer portal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional terms of use a subscriber must accept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,

    /// Whether consuming the product requires a subscription key.
    #[serde(
        default,
        rename = "subscriptionRequired",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_required: Option<bool>,

    /// Whether subscription requests require administrator approval.
    #[serde(
        default,
        rename = "approvalRequired",
        skip_serializing_if = "Option::is_none"
    )]
    pub approval_required: Option<bool>,

    /// Maximum number of concurrent subscriptions a user can hold.
    #[serde(
        default,
        rename = "subscriptionsLimit",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscriptions_limit: Option<i64>,

    /// Publication state: `published` or `notPublished`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Typed client for product resources.
///
/// Borrows the shared [`ApimClient`]; construction is free and the client
/// holds no state of its own.
///
/// # Example
///
/// ```rust,no_run
/// use apim_cli::api::ApimClient;
/// use apim_cli::api::products::ProductsClient;
///
/// # async fn example(client: &ApimClient) -> anyhow::Result<()> {
/// let products = ProductsClient::new(client).get_all().await?;
/// for product in &products {
///     println!("{}: {}", product.name, product.properties.display_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProductsClient<'a> {
    client: &'a ApimClient,
}

impl<'a> ProductsClient<'a> {
    /// Creates a products client over the shared management client.
    pub fn new(client: &'a ApimClient) -> Self {
        Self { client }
    }

    /// Fetches every product of the service, following pagination.
    ///
    /// Products are returned in the order the service reports them; the
    /// extractor preserves that order in the emitted template.
    pub async fn get_all(&self) -> Result<Vec<ProductContract>> {
        self.client.get_all_pages("/products").await
    }

    /// Fetches the products a single API is linked to.
    ///
    /// Used in single-API extractions to decide which products to include:
    /// a product is extracted only if the API is part of it.
    ///
    /// # Parameters
    ///
    /// * `api_name` - The API identifier (not its display name)
    pub async fn get_all_linked_to_api(&self, api_name: &str) -> Result<Vec<ProductContract>> {
        self.client
            .get_all_pages(&format!("/apis/{}/products", api_name))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_product_contract() {
        let json = r#"{
            "id": "/subscriptions/s/resourceGroups/g/providers/Microsoft.ApiManagement/service/svc/products/starter",
            "type": "Microsoft.ApiManagement/service/products",
            "name": "starter",
            "properties": {
                "displayName": "Starter",
                "description": "Five calls per minute",
                "subscriptionRequired": true,
                "approvalRequired": false,
                "subscriptionsLimit": 1,
                "state": "published"
            }
        }"#;

        let product: ProductContract = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "starter");
        assert_eq!(product.properties.display_name, "Starter");
        assert_eq!(product.properties.subscription_required, Some(true));
        assert_eq!(product.properties.subscriptions_limit, Some(1));
    }

    #[test]
    fn test_properties_skip_absent_fields() {
        let properties = ProductProperties {
            display_name: "Starter".to_string(),
            description: None,
            terms: None,
            subscription_required: None,
            approval_required: None,
            subscriptions_limit: None,
            state: None,
        };

        let json = serde_json::to_value(&properties).unwrap();
        assert_eq!(json, serde_json::json!({"displayName": "Starter"}));
    }
}
