//
//  apim-cli
//  template/groups.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Group template resources.
//!
//! Groups appear in two places in the emitted templates: as service-level
//! group definitions in the groups template, and as product-group association
//! resources inside the product template. The association form is nested
//! under the product and depends on it.

use serde::Serialize;

use crate::api::client::API_VERSION;
use crate::api::groups::{GroupContract, GroupProperties};

use super::expressions::{nested_scoped_name, product_resource_id, service_scoped_name};
use super::{resource_types, ResourceCollection};

/// A group emitted into a template, either as a service-level definition or
/// as a product association.
#[derive(Debug, Clone, Serialize)]
pub struct GroupTemplateResource {
    /// ARM name expression.
    pub name: String,

    /// ARM resource type.
    #[serde(rename = "type")]
    pub resource_type: &'static str,

    /// Management API version the resource deploys against.
    #[serde(rename = "apiVersion")]
    pub api_version: &'static str,

    /// Resources this one deploys after; the parent product for associations.
    #[serde(rename = "dependsOn", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    /// Contract properties as fetched from the service.
    pub properties: GroupProperties,
}

impl GroupTemplateResource {
    /// Maps a fetched group into a service-level template resource.
    pub fn service_group(contract: &GroupContract) -> Self {
        Self {
            name: service_scoped_name(&contract.name),
            resource_type: resource_types::GROUP,
            api_version: API_VERSION,
            depends_on: Vec::new(),
            properties: contract.properties.clone(),
        }
    }

    /// Maps a fetched group into a product-association resource.
    ///
    /// The association is named `<service>/<product>/<group>` and depends on
    /// the product so it deploys after it.
    pub fn product_association(product_name: &str, contract: &GroupContract) -> Self {
        Self {
            name: nested_scoped_name(product_name, &contract.name),
            resource_type: resource_types::PRODUCT_GROUP,
            api_version: API_VERSION,
            depends_on: vec![product_resource_id(product_name)],
            properties: contract.properties.clone(),
        }
    }
}

/// The typed resource collection of the groups template.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GroupTemplateResources {
    /// Service-level groups, in fetch order.
    pub groups: Vec<GroupTemplateResource>,
}

impl ResourceCollection for GroupTemplateResources {
    fn len(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> GroupContract {
        GroupContract {
            id: None,
            name: "engineering".to_string(),
            properties: GroupProperties {
                display_name: "Engineering".to_string(),
                description: Some("Internal developers".to_string()),
                built_in: Some(false),
                group_type: Some("custom".to_string()),
                external_id: None,
            },
        }
    }

    #[test]
    fn test_service_group_has_no_dependencies() {
        let resource = GroupTemplateResource::service_group(&contract());

        assert_eq!(
            resource.name,
            "[concat(parameters('apimServiceName'), '/engineering')]"
        );
        assert_eq!(resource.resource_type, "Microsoft.ApiManagement/service/groups");
        assert!(resource.depends_on.is_empty());

        // dependsOn is omitted entirely when empty
        let json = serde_json::to_value(&resource).unwrap();
        assert!(json.get("dependsOn").is_none());
    }

    #[test]
    fn test_product_association_depends_on_product() {
        let resource = GroupTemplateResource::product_association("starter", &contract());

        assert_eq!(
            resource.name,
            "[concat(parameters('apimServiceName'), '/starter/engineering')]"
        );
        assert_eq!(
            resource.resource_type,
            "Microsoft.ApiManagement/service/products/groups"
        );
        assert_eq!(
            resource.depends_on,
            vec![
                "[resourceId('Microsoft.ApiManagement/service/products', parameters('apimServiceName'), 'starter')]"
            ]
        );
    }
}
