//
//  apim-cli
//  template/builder.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Template builder.
//!
//! Every emitted template shares the same envelope: the deployment schema,
//! the content version, and the `apimServiceName` parameter; templates that
//! may reference policy files additionally declare the policy URL parameters.
//! The builder assembles that envelope once so individual extractors only
//! fill in resources.

use std::collections::BTreeMap;

use super::{parameter_names, ResourceCollection, Template, TemplateParameter};

/// Builder for the shared template envelope.
///
/// # Example
///
/// ```rust
/// use apim_cli::template::TemplateBuilder;
/// use apim_cli::template::products::ProductTemplateResources;
///
/// let template = TemplateBuilder::new()
///     .with_service_name_parameter()
///     .with_policy_parameters(Some("https://files.example.com/policies"), None)
///     .build::<ProductTemplateResources>();
///
/// assert!(template.parameters.contains_key("apimServiceName"));
/// assert!(template.parameters.contains_key("policyXmlBaseUrl"));
/// ```
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    parameters: BTreeMap<String, TemplateParameter>,
}

impl TemplateBuilder {
    /// Creates a builder with an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the `apimServiceName` parameter.
    ///
    /// Every emitted template carries this parameter; resource names reference
    /// it so the template deploys against any target service.
    pub fn with_service_name_parameter(mut self) -> Self {
        self.parameters.insert(
            parameter_names::APIM_SERVICE_NAME.to_string(),
            TemplateParameter::string(),
        );
        self
    }

    /// Declares the policy file parameters when policy file emission is
    /// configured.
    ///
    /// `policyXmlBaseUrl` is declared when a base URL is configured;
    /// `policyXmlSasToken` additionally when a SAS token is configured. With
    /// no base URL, policies are inlined and neither parameter is declared.
    pub fn with_policy_parameters(
        mut self,
        policy_xml_base_url: Option<&str>,
        policy_xml_sas_token: Option<&str>,
    ) -> Self {
        if policy_xml_base_url.is_some() {
            self.parameters.insert(
                parameter_names::POLICY_XML_BASE_URL.to_string(),
                TemplateParameter::string(),
            );

            if policy_xml_sas_token.is_some() {
                self.parameters.insert(
                    parameter_names::POLICY_XML_SAS_TOKEN.to_string(),
                    TemplateParameter::string(),
                );
            }
        }
        self
    }

    /// Builds the template with an empty resource collection.
    pub fn build<R: ResourceCollection + Default>(self) -> Template<R> {
        Template {
            schema: super::TEMPLATE_SCHEMA.to_string(),
            content_version: super::CONTENT_VERSION.to_string(),
            parameters: self.parameters,
            resources: R::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::products::ProductTemplateResources;

    #[test]
    fn test_service_name_parameter_always_declared() {
        let template = TemplateBuilder::new()
            .with_service_name_parameter()
            .build::<ProductTemplateResources>();

        assert_eq!(template.parameters.len(), 1);
        assert!(template.parameters.contains_key("apimServiceName"));
        assert!(template.is_empty());
    }

    #[test]
    fn test_policy_parameters_follow_configuration() {
        let none = TemplateBuilder::new()
            .with_policy_parameters(None, Some("?sv=token"))
            .build::<ProductTemplateResources>();
        assert!(none.parameters.is_empty());

        let base_only = TemplateBuilder::new()
            .with_policy_parameters(Some("https://x"), None)
            .build::<ProductTemplateResources>();
        assert!(base_only.parameters.contains_key("policyXmlBaseUrl"));
        assert!(!base_only.parameters.contains_key("policyXmlSasToken"));

        let both = TemplateBuilder::new()
            .with_policy_parameters(Some("https://x"), Some("?sv=token"))
            .build::<ProductTemplateResources>();
        assert!(both.parameters.contains_key("policyXmlSasToken"));
    }

    #[test]
    fn test_envelope_serialization() {
        let template = TemplateBuilder::new()
            .with_service_name_parameter()
            .build::<ProductTemplateResources>();

        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(
            json["$schema"],
            "https://schema.management.azure.com/schemas/2019-04-01/deploymentTemplate.json#"
        );
        assert_eq!(json["contentVersion"], "1.0.0.0");
        assert_eq!(json["parameters"]["apimServiceName"]["type"], "string");
        assert_eq!(json["resources"], serde_json::json!([]));
    }
}
