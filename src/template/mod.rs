//
//  apim-cli
//  template/mod.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! # ARM Template Types
//!
//! This module provides the in-memory representation of the ARM templates the
//! extractor emits: the [`Template`] aggregate, the parameter map, per-kind
//! template resource records, ARM expression formatting, and the
//! [`builder::TemplateBuilder`] that seeds shared parameters.
//!
//! ## Shape
//!
//! A serialized template has the standard deployment-template envelope:
//!
//! ```json
//! {
//!     "$schema": "https://schema.management.azure.com/schemas/2019-04-01/deploymentTemplate.json#",
//!     "contentVersion": "1.0.0.0",
//!     "parameters": { "apimServiceName": { "type": "string" } },
//!     "resources": [ ... ]
//! }
//! ```
//!
//! The `resources` array is typed in memory: each template kind owns a
//! collection struct (for example [`products::ProductTemplateResources`]) whose
//! serialization flattens its per-kind lists into one array, preserving append
//! order within each list.
//!
//! ## Reference expressions
//!
//! Resource names and dependencies are ARM expressions, not literals, so the
//! emitted template can be deployed against any target service name. See
//! [`expressions`] for the formatting helpers.

use std::collections::BTreeMap;

use serde::Serialize;

/// ARM expression formatting helpers.
pub mod expressions;

/// Template builder seeding the shared parameters.
pub mod builder;

/// Product template resources and their typed collection.
pub mod products;

/// Group template resources (service-level and product associations).
pub mod groups;

/// Tag template resources (service-level and product associations).
pub mod tags;

/// Policy template resources (global and product scope).
pub mod policies;

pub use builder::TemplateBuilder;

/// Deployment template schema URL.
pub const TEMPLATE_SCHEMA: &str =
    "https://schema.management.azure.com/schemas/2019-04-01/deploymentTemplate.json#";

/// Content version stamped on every emitted template.
pub const CONTENT_VERSION: &str = "1.0.0.0";

/// Names of the parameters shared across emitted templates.
pub mod parameter_names {
    /// The target API Management service name.
    pub const APIM_SERVICE_NAME: &str = "apimServiceName";

    /// Base URL under which policy XML files are published.
    pub const POLICY_XML_BASE_URL: &str = "policyXmlBaseUrl";

    /// SAS token appended to policy file URLs.
    pub const POLICY_XML_SAS_TOKEN: &str = "policyXmlSasToken";
}

/// ARM resource types of the emitted resources.
pub mod resource_types {
    /// A product.
    pub const PRODUCT: &str = "Microsoft.ApiManagement/service/products";

    /// A product's policy document.
    pub const PRODUCT_POLICY: &str = "Microsoft.ApiManagement/service/products/policies";

    /// A product-tag association.
    pub const PRODUCT_TAG: &str = "Microsoft.ApiManagement/service/products/tags";

    /// A product-group association.
    pub const PRODUCT_GROUP: &str = "Microsoft.ApiManagement/service/products/groups";

    /// A service-level group.
    pub const GROUP: &str = "Microsoft.ApiManagement/service/groups";

    /// A service-level tag.
    pub const TAG: &str = "Microsoft.ApiManagement/service/tags";

    /// The global service policy.
    pub const SERVICE_POLICY: &str = "Microsoft.ApiManagement/service/policies";
}

/// A typed collection of template resources.
///
/// Implemented by the per-kind collection structs; `len` drives the
/// "anything to write?" decision and the end-of-run summary.
pub trait ResourceCollection {
    /// Total number of resources across the collection's lists.
    fn len(&self) -> usize;

    /// Returns `true` when the collection holds no resources.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A declaration in the template's `parameters` block.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateParameter {
    /// The ARM parameter type (`string`, `bool`, ...).
    #[serde(rename = "type")]
    pub parameter_type: String,

    /// Optional default value.
    #[serde(rename = "defaultValue", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
}

impl TemplateParameter {
    /// A `string` parameter with no default.
    pub fn string() -> Self {
        Self {
            parameter_type: "string".to_string(),
            default_value: None,
        }
    }
}

/// An ARM deployment template over a typed resource collection.
///
/// # Type Parameters
///
/// * `R` - The typed resource collection (for example
///   [`products::ProductTemplateResources`])
///
/// # Serialization
///
/// Serializes to the standard deployment-template envelope; `R`'s own
/// serialization produces the flat `resources` array.
#[derive(Debug, Clone, Serialize)]
pub struct Template<R> {
    /// Deployment template schema URL.
    #[serde(rename = "$schema")]
    pub schema: String,

    /// Template content version.
    #[serde(rename = "contentVersion")]
    pub content_version: String,

    /// Parameter declarations, keyed by parameter name.
    pub parameters: BTreeMap<String, TemplateParameter>,

    /// The typed resource collection.
    pub resources: R,
}

impl<R: ResourceCollection> Template<R> {
    /// Total number of resources in this template.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Returns `true` when the template holds no resources.
    ///
    /// Empty templates are not written to disk.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
