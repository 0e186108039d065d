//
//  apim-cli
//  api/groups.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Group API types and client.
//!
//! Groups control developer-portal visibility of products. Every service
//! carries three built-in groups (administrators, developers, guests); custom
//! and external (AAD-backed) groups are user-managed. Product-group
//! associations decide which groups can see and subscribe to a product.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::client::ApimClient;

/// A group as returned by the management endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupContract {
    /// Full ARM resource id of the group.
    #[serde(default)]
    pub id: Option<String>,

    /// Group identifier, unique within the service.
    pub name: String,

    /// The group's contract properties.
    pub properties: GroupProperties,
}

/// Contract properties of a group.
///
/// # Fields
///
/// * `display_name` - Human-readable group name
/// * `description` - Optional description
/// * `built_in` - Whether this is one of the three built-in groups
/// * `group_type` - `custom`, `system`, or `external`
/// * `external_id` - AAD object id for external groups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupProperties {
    /// Human-readable group name.
    #[serde(rename = "displayName")]
    pub display_name: String,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether this is one of the built-in groups. Built-in groups exist on
    /// every service and cannot be redeployed.
    #[serde(default, rename = "builtIn", skip_serializing_if = "Option::is_none")]
    pub built_in: Option<bool>,

    /// Group kind: `custom`, `system`, or `external`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,

    /// AAD object id backing an external group.
    #[serde(
        default,
        rename = "externalId",
        skip_serializing_if = "Option::is_none"
    )]
    pub external_id: Option<String>,
}

impl GroupContract {
    /// Returns `true` for the built-in administrators/developers/guests
    /// groups, which must not be emitted as template resources.
    pub fn is_built_in(&self) -> bool {
        self.properties.built_in.unwrap_or(false)
            || self.properties.group_type.as_deref() == Some("system")
    }
}

/// Typed client for group resources.
pub struct GroupsClient<'a> {
    client: &'a ApimClient,
}

impl<'a> GroupsClient<'a> {
    /// Creates a groups client over the shared management client.
    pub fn new(client: &'a ApimClient) -> Self {
        Self { client }
    }

    /// Fetches every group of the service, following pagination.
    pub async fn get_all(&self) -> Result<Vec<GroupContract>> {
        self.client.get_all_pages("/groups").await
    }

    /// Fetches the groups associated with a product.
    ///
    /// # Parameters
    ///
    /// * `product_name` - The product identifier (not its display name)
    pub async fn get_all_linked_to_product(
        &self,
        product_name: &str,
    ) -> Result<Vec<GroupContract>> {
        self.client
            .get_all_pages(&format!("/products/{}/groups", product_name))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(built_in: Option<bool>, group_type: Option<&str>) -> GroupContract {
        GroupContract {
            id: None,
            name: "g".to_string(),
            properties: GroupProperties {
                display_name: "G".to_string(),
                description: None,
                built_in,
                group_type: group_type.map(str::to_string),
                external_id: None,
            },
        }
    }

    #[test]
    fn test_is_built_in() {
        assert!(group(Some(true), None).is_built_in());
        assert!(group(None, Some("system")).is_built_in());
        assert!(!group(Some(false), Some("custom")).is_built_in());
        assert!(!group(None, None).is_built_in());
    }

    #[test]
    fn test_deserialize_group_contract() {
        let json = r#"{
            "name": "engineering",
            "properties": {
                "displayName": "Engineering",
                "description": "Internal developers",
                "builtIn": false,
                "type": "custom"
            }
        }"#;

        let group: GroupContract = serde_json::from_str(json).unwrap();
        assert_eq!(group.name, "engineering");
        assert!(!group.is_built_in());
    }
}
