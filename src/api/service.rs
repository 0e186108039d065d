//
//  apim-cli
//  api/service.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Service instance API types and client.
//!
//! The service instance resource carries the SKU the service runs on, which
//! drives extraction behavior: the Consumption tier has no group support, so
//! product-group association generation is skipped there. Fetching the
//! instance up front also validates that the subscription, resource group,
//! and service name actually resolve before any per-entity reads start.

use anyhow::Result;
use serde::Deserialize;

use super::client::ApimClient;

/// An API Management service instance as returned by the management endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceContract {
    /// Service name.
    pub name: String,

    /// Azure region the service runs in.
    #[serde(default)]
    pub location: Option<String>,

    /// The SKU the service runs on.
    pub sku: ServiceSku,
}

/// SKU block of a service instance.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSku {
    /// The pricing tier.
    pub name: SkuType,

    /// Unit count; zero for Consumption.
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// API Management pricing tiers.
///
/// Unrecognized tier names deserialize as [`SkuType::Other`] so a new tier
/// introduced by the platform does not break extraction; only Consumption
/// changes behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SkuType {
    Consumption,
    Developer,
    Basic,
    Standard,
    Premium,
    Isolated,
    /// A tier this build does not know about.
    Other(String),
}

impl From<String> for SkuType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Consumption" => Self::Consumption,
            "Developer" => Self::Developer,
            "Basic" => Self::Basic,
            "Standard" => Self::Standard,
            "Premium" => Self::Premium,
            "Isolated" => Self::Isolated,
            _ => Self::Other(value),
        }
    }
}

impl SkuType {
    /// Returns `true` for the Consumption tier.
    ///
    /// Consumption services have no group support; the product extractor
    /// skips group association generation for them.
    pub fn is_consumption(&self) -> bool {
        matches!(self, Self::Consumption)
    }
}

/// Typed client for the service instance resource.
pub struct ServiceClient<'a> {
    client: &'a ApimClient,
}

impl<'a> ServiceClient<'a> {
    /// Creates a service client over the shared management client.
    pub fn new(client: &'a ApimClient) -> Self {
        Self { client }
    }

    /// Fetches the service instance this client is scoped to.
    pub async fn get(&self) -> Result<ServiceContract> {
        self.client.get("").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_contract() {
        let json = r#"{
            "name": "contoso-apim",
            "location": "West Europe",
            "sku": {"name": "Developer", "capacity": 1}
        }"#;

        let service: ServiceContract = serde_json::from_str(json).unwrap();
        assert_eq!(service.name, "contoso-apim");
        assert_eq!(service.sku.name, SkuType::Developer);
        assert!(!service.sku.name.is_consumption());
    }

    #[test]
    fn test_consumption_sku() {
        let sku: SkuType = "Consumption".to_string().into();
        assert!(sku.is_consumption());
    }

    #[test]
    fn test_unknown_sku_is_preserved() {
        let sku: SkuType = "PremiumV2".to_string().into();
        assert_eq!(sku, SkuType::Other("PremiumV2".to_string()));
        assert!(!sku.is_consumption());
    }
}
