//
//  apim-cli
//  template/policies.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Policy template resources.
//!
//! A policy resource's `properties.value` is either the inlined XML body or,
//! when policy file emission is configured, an ARM expression pointing at the
//! published file. That decision is made by the policy extractor; this module
//! only shapes the resources.

use serde::Serialize;

use crate::api::client::API_VERSION;
use crate::api::policies::PolicyProperties;

use super::expressions::{nested_scoped_name, product_resource_id, service_scoped_name};
use super::{resource_types, ResourceCollection};

/// A policy document emitted into a template.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyTemplateResource {
    /// ARM name expression. Scope policies are always named `policy`.
    pub name: String,

    /// ARM resource type.
    #[serde(rename = "type")]
    pub resource_type: &'static str,

    /// Management API version the resource deploys against.
    #[serde(rename = "apiVersion")]
    pub api_version: &'static str,

    /// Resources this one deploys after; the parent product for product
    /// policies.
    #[serde(rename = "dependsOn", skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    /// Policy format and content (inline XML or a file-link expression).
    pub properties: PolicyProperties,
}

impl PolicyTemplateResource {
    /// Shapes a product policy resource.
    ///
    /// Named `<service>/<product>/policy`, depending on the product.
    pub fn product_policy(product_name: &str, properties: PolicyProperties) -> Self {
        Self {
            name: nested_scoped_name(product_name, "policy"),
            resource_type: resource_types::PRODUCT_POLICY,
            api_version: API_VERSION,
            depends_on: vec![product_resource_id(product_name)],
            properties,
        }
    }

    /// Shapes the global service policy resource.
    ///
    /// Named `<service>/policy`, with no dependencies.
    pub fn global_policy(properties: PolicyProperties) -> Self {
        Self {
            name: service_scoped_name("policy"),
            resource_type: resource_types::SERVICE_POLICY,
            api_version: API_VERSION,
            depends_on: Vec::new(),
            properties,
        }
    }
}

/// The typed resource collection of the global service policy template.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PolicyTemplateResources {
    /// Policy documents; at most the one global policy today.
    pub policies: Vec<PolicyTemplateResource>,
}

impl ResourceCollection for PolicyTemplateResources {
    fn len(&self) -> usize {
        self.policies.len()
    }
}
