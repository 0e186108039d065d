//
//  apim-cli
//  extractor/policies.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Policy extraction.
//!
//! Shapes policy documents for the product template and the global service
//! policy template. A scope without a policy yields no resource.
//!
//! # Inline vs linked policies
//!
//! With no policy XML base URL configured, the policy body is inlined into
//! the template as `rawxml`. With a base URL, the body is written to a file
//! under `policies/` in the output directory and the template carries a
//! `rawxml-link` value referencing the `policyXmlBaseUrl` parameter (plus the
//! SAS token parameter when configured), so large policies stay reviewable
//! and the template stays small.

use anyhow::Result;
use tracing::debug;

use crate::api::policies::{PoliciesClient, PolicyProperties, FORMAT_RAWXML_LINK};
use crate::api::ApimClient;
use crate::output::{self, file_names};
use crate::template::expressions::policy_file_link;
use crate::template::policies::{PolicyTemplateResource, PolicyTemplateResources};
use crate::template::{Template, TemplateBuilder};

use super::ExtractorParameters;

/// Extracts policy documents.
pub struct PolicyExtractor<'a> {
    policies_client: PoliciesClient<'a>,
}

impl<'a> PolicyExtractor<'a> {
    /// Creates a policy extractor over the shared management client.
    pub fn new(client: &'a ApimClient) -> Self {
        Self {
            policies_client: PoliciesClient::new(client),
        }
    }

    /// Generates the policy resource for a product, when the product has one.
    ///
    /// # Parameters
    ///
    /// * `parameters` - The extraction parameters (policy URL configuration)
    /// * `product_name` - The product identifier
    pub async fn generate_product_policy(
        &self,
        parameters: &ExtractorParameters,
        product_name: &str,
    ) -> Result<Option<PolicyTemplateResource>> {
        let Some(policy) = self.policies_client.get_for_product(product_name).await? else {
            debug!("product '{}' has no policy", product_name);
            return Ok(None);
        };

        debug!("policy found for product '{}'", product_name);
        let properties = shape_policy_content(
            parameters,
            policy.properties,
            &file_names::product_policy_xml(product_name),
        )?;

        Ok(Some(PolicyTemplateResource::product_policy(
            product_name,
            properties,
        )))
    }

    /// Generates the global service policy template.
    ///
    /// The template is empty when the service has no global policy.
    pub async fn generate_global_policy_template(
        &self,
        parameters: &ExtractorParameters,
    ) -> Result<Template<PolicyTemplateResources>> {
        let mut template = TemplateBuilder::new()
            .with_service_name_parameter()
            .with_policy_parameters(
                parameters.policy_xml_base_url.as_deref(),
                parameters.policy_xml_sas_token.as_deref(),
            )
            .build::<PolicyTemplateResources>();

        match self.policies_client.get_global().await? {
            Some(policy) => {
                debug!("global service policy found");
                let properties = shape_policy_content(
                    parameters,
                    policy.properties,
                    file_names::GLOBAL_SERVICE_POLICY_XML,
                )?;
                template
                    .resources
                    .policies
                    .push(PolicyTemplateResource::global_policy(properties));
            }
            None => debug!("service has no global policy"),
        }

        Ok(template)
    }
}

/// Applies the inline-vs-linked decision to a fetched policy body.
///
/// With a policy XML base URL configured, writes the body under `policies/`
/// in the output directory and replaces the value with a file-link
/// expression; otherwise returns the properties unchanged.
fn shape_policy_content(
    parameters: &ExtractorParameters,
    mut properties: PolicyProperties,
    file_name: &str,
) -> Result<PolicyProperties> {
    if parameters.policy_xml_base_url.is_none() {
        return Ok(properties);
    }

    output::save_policy_xml(&parameters.output_directory, file_name, &properties.value)?;
    properties.value = policy_file_link(file_name, parameters.policy_xml_sas_token.is_some());
    properties.format = Some(FORMAT_RAWXML_LINK.to_string());

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::service::SkuType;
    use std::path::PathBuf;

    fn parameters(output: PathBuf, base_url: Option<&str>, sas: Option<&str>) -> ExtractorParameters {
        ExtractorParameters {
            service_name: "svc".to_string(),
            single_api_name: None,
            output_directory: output,
            policy_xml_base_url: base_url.map(str::to_string),
            policy_xml_sas_token: sas.map(str::to_string),
            sku: SkuType::Developer,
        }
    }

    fn properties() -> PolicyProperties {
        PolicyProperties {
            format: Some("rawxml".to_string()),
            value: "<policies><inbound><base /></inbound></policies>".to_string(),
        }
    }

    #[test]
    fn test_policy_inlined_without_base_url() {
        let params = parameters(PathBuf::from("unused"), None, None);
        let shaped = shape_policy_content(&params, properties(), "starter-productPolicy.xml").unwrap();

        assert_eq!(shaped.format.as_deref(), Some("rawxml"));
        assert!(shaped.value.starts_with("<policies>"));
    }

    #[test]
    fn test_policy_written_to_file_with_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let params = parameters(
            dir.path().to_path_buf(),
            Some("https://files.example.com/policies"),
            None,
        );

        let shaped = shape_policy_content(&params, properties(), "starter-productPolicy.xml").unwrap();

        assert_eq!(shaped.format.as_deref(), Some("rawxml-link"));
        assert_eq!(
            shaped.value,
            "[concat(parameters('policyXmlBaseUrl'), '/starter-productPolicy.xml')]"
        );

        let written = std::fs::read_to_string(
            dir.path().join("policies").join("starter-productPolicy.xml"),
        )
        .unwrap();
        assert!(written.contains("<inbound>"));
    }

    #[test]
    fn test_policy_link_includes_sas_token_parameter() {
        let dir = tempfile::tempdir().unwrap();
        let params = parameters(
            dir.path().to_path_buf(),
            Some("https://files.example.com/policies"),
            Some("?sv=abc"),
        );

        let shaped = shape_policy_content(&params, properties(), "globalServicePolicy.xml").unwrap();

        assert_eq!(
            shaped.value,
            "[concat(parameters('policyXmlBaseUrl'), '/globalServicePolicy.xml', parameters('policyXmlSasToken'))]"
        );
    }
}
