//
//  apim-cli
//  template/products.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Product template resources.
//!
//! The product template is the richest one the extractor emits: alongside the
//! products themselves it carries their policy documents, tag associations,
//! and group associations. [`ProductTemplateResources`] keeps those four kinds
//! in separate lists so extraction code appends to the matching list, and
//! flattens them into one `resources` array at serialization time.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::api::client::API_VERSION;
use crate::api::products::{ProductContract, ProductProperties};

use super::expressions::service_scoped_name;
use super::groups::GroupTemplateResource;
use super::policies::PolicyTemplateResource;
use super::resource_types;
use super::tags::TagTemplateResource;
use super::ResourceCollection;

/// A product emitted into the template.
///
/// The `name` is an ARM expression referencing the `apimServiceName`
/// parameter; `properties` round-trip unchanged from the management endpoint.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProductTemplateResource {
    /// ARM name expression: `[concat(parameters('apimServiceName'), '/<product>')]`.
    pub name: String,

    /// ARM resource type.
    #[serde(rename = "type")]
    pub resource_type: &'static str,

    /// Management API version the resource deploys against.
    #[serde(rename = "apiVersion")]
    pub api_version: &'static str,

    /// Contract properties as fetched from the service.
    pub properties: ProductProperties,
}

impl ProductTemplateResource {
    /// Maps a fetched product contract into a template resource.
    pub fn from_contract(contract: &ProductContract) -> Self {
        Self {
            name: service_scoped_name(&contract.name),
            resource_type: resource_types::PRODUCT,
            api_version: API_VERSION,
            properties: contract.properties.clone(),
        }
    }
}

/// The typed resource collection of the product template.
///
/// Extraction appends to the per-kind lists in fetch order; serialization
/// flattens them into one array as products, policies, tags, groups — each
/// list preserving its append order. Deployment ordering between kinds is
/// carried by each child's `dependsOn`, not by array position.
#[derive(Debug, Clone, Default)]
pub struct ProductTemplateResources {
    /// Products, in fetch order.
    pub products: Vec<ProductTemplateResource>,

    /// Product policy documents, in product order.
    pub policies: Vec<PolicyTemplateResource>,

    /// Product-tag associations, in fetch order per product.
    pub tags: Vec<TagTemplateResource>,

    /// Product-group associations, in fetch order per product.
    pub groups: Vec<GroupTemplateResource>,
}

impl ResourceCollection for ProductTemplateResources {
    fn len(&self) -> usize {
        self.products.len() + self.policies.len() + self.tags.len() + self.groups.len()
    }
}

impl Serialize for ProductTemplateResources {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for product in &self.products {
            seq.serialize_element(product)?;
        }
        for policy in &self.policies {
            seq.serialize_element(policy)?;
        }
        for tag in &self.tags {
            seq.serialize_element(tag)?;
        }
        for group in &self.groups {
            seq.serialize_element(group)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::groups::{GroupContract, GroupProperties};
    use crate::api::tags::{TagContract, TagProperties};

    fn product(name: &str) -> ProductContract {
        ProductContract {
            id: None,
            name: name.to_string(),
            properties: ProductProperties {
                display_name: name.to_uppercase(),
                description: None,
                terms: None,
                subscription_required: Some(true),
                approval_required: None,
                subscriptions_limit: None,
                state: Some("published".to_string()),
            },
        }
    }

    #[test]
    fn test_from_contract_formats_name_and_version() {
        let resource = ProductTemplateResource::from_contract(&product("starter"));

        assert_eq!(
            resource.name,
            "[concat(parameters('apimServiceName'), '/starter')]"
        );
        assert_eq!(resource.resource_type, "Microsoft.ApiManagement/service/products");
        assert_eq!(resource.api_version, API_VERSION);
    }

    #[test]
    fn test_flatten_preserves_append_order() {
        let mut resources = ProductTemplateResources::default();
        resources
            .products
            .push(ProductTemplateResource::from_contract(&product("starter")));
        resources
            .products
            .push(ProductTemplateResource::from_contract(&product("unlimited")));

        let tag = TagContract {
            id: None,
            name: "billing".to_string(),
            properties: TagProperties {
                display_name: "Billing".to_string(),
            },
        };
        resources
            .tags
            .push(TagTemplateResource::product_association("starter", &tag));

        let group = GroupContract {
            id: None,
            name: "engineering".to_string(),
            properties: GroupProperties {
                display_name: "Engineering".to_string(),
                description: None,
                built_in: Some(false),
                group_type: Some("custom".to_string()),
                external_id: None,
            },
        };
        resources
            .groups
            .push(GroupTemplateResource::product_association("starter", &group));

        assert_eq!(resources.len(), 4);

        let json = serde_json::to_value(&resources).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 4);
        // products first in append order, then tags, then groups
        assert!(array[0]["name"].as_str().unwrap().contains("/starter"));
        assert!(array[1]["name"].as_str().unwrap().contains("/unlimited"));
        assert_eq!(array[2]["type"], "Microsoft.ApiManagement/service/products/tags");
        assert_eq!(array[3]["type"], "Microsoft.ApiManagement/service/products/groups");
    }

    #[test]
    fn test_empty_collection_serializes_to_empty_array() {
        let resources = ProductTemplateResources::default();
        assert!(resources.is_empty());
        assert_eq!(serde_json::to_value(&resources).unwrap(), serde_json::json!([]));
    }
}
