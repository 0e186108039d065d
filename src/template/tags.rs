//
//  apim-cli
//  template/tags.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Tag template resources.
//!
//! Like groups, tags appear both as service-level definitions in the tags
//! template and as product-tag association resources inside the product
//! template.

use serde::Serialize;

use crate::api::client::API_VERSION;
use crate::api::tags::{TagContract, TagProperties};

use super::expressions::{nested_scoped_name, product_resource_id, service_scoped_name};
use super::{resource_types, ResourceCollection};

/// A tag emitted into a template, either as a service-level definition or as
/// a product association.
#[derive(Debug, Clone, Serialize)]
pub struct TagTemplateResource {
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
    pub properties: TagProperties,
}

impl TagTemplateResource {
    /// Maps a fetched tag into a service-level template resource.
    pub fn service_tag(contract: &TagContract) -> Self {
        Self {
            name: service_scoped_name(&contract.name),
            resource_type: resource_types::TAG,
            api_version: API_VERSION,
            depends_on: Vec::new(),
            properties: contract.properties.clone(),
        }
    }

    /// Maps a fetched tag into a product-association resource.
    ///
    /// The association is named `<service>/<product>/<tag>` and depends on
    /// the product so it deploys after it.
    pub fn product_association(product_name: &str, contract: &TagContract) -> Self {
        Self {
            name: nested_scoped_name(product_name, &contract.name),
            resource_type: resource_types::PRODUCT_TAG,
            api_version: API_VERSION,
            depends_on: vec![product_resource_id(product_name)],
            properties: contract.properties.clone(),
        }
    }
}

/// The typed resource collection of the tags template.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TagTemplateResources {
    /// Service-level tags, in fetch order.
    pub tags: Vec<TagTemplateResource>,
}

impl ResourceCollection for TagTemplateResources {
    fn len(&self) -> usize {
        self.tags.len()
    }
}
