//
//  apim-cli
//  extractor/products.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Product extraction.
//!
//! Builds the product template: every extracted product plus its policy
//! document, tag associations, and group associations, wired to the product
//! through `dependsOn`. In single-API mode a product is included only when
//! the API is part of it. On the Consumption SKU group associations are not
//! generated at all.

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::api::groups::GroupsClient;
use crate::api::products::ProductsClient;
use crate::api::tags::TagsClient;
use crate::api::ApimClient;
use crate::template::groups::GroupTemplateResource;
use crate::template::products::{ProductTemplateResource, ProductTemplateResources};
use crate::template::tags::TagTemplateResource;
use crate::template::{Template, TemplateBuilder};

use super::policies::PolicyExtractor;
use super::ExtractorParameters;

/// Extracts products and their attachments into the product template.
pub struct ProductExtractor<'a> {
    products_client: ProductsClient<'a>,
    groups_client: GroupsClient<'a>,
    tags_client: TagsClient<'a>,
    policy_extractor: PolicyExtractor<'a>,
}

impl<'a> ProductExtractor<'a> {
    /// Creates a product extractor over the shared management client.
    pub fn new(client: &'a ApimClient) -> Self {
        Self {
            products_client: ProductsClient::new(client),
            groups_client: GroupsClient::new(client),
            tags_client: TagsClient::new(client),
            policy_extractor: PolicyExtractor::new(client),
        }
    }

    /// Generates the product template.
    ///
    /// Fetches every product, filters in single-API mode, and for each
    /// included product appends — in this order — the product itself, its
    /// policy, its tag associations, and its group associations. Appends
    /// preserve the order the service reported.
    pub async fn generate_products_template(
        &self,
        parameters: &ExtractorParameters,
    ) -> Result<Template<ProductTemplateResources>> {
        let mut template = TemplateBuilder::new()
            .with_service_name_parameter()
            .with_policy_parameters(
                parameters.policy_xml_base_url.as_deref(),
                parameters.policy_xml_sas_token.as_deref(),
            )
            .build::<ProductTemplateResources>();

        let all_products = self.products_client.get_all().await?;

        let api_products = match parameters.single_api_name.as_deref() {
            Some(api_name) => self.products_client.get_all_linked_to_api(api_name).await?,
            None => Vec::new(),
        };

        for product in &all_products {
            // only extract the product if this is a full extraction, or in the
            // case of a single api, if it is found in products associated with the api
            let included = parameters.single_api_name.is_none()
                || api_products.iter().any(|p| p.name == product.name);
            if !included {
                continue;
            }

            debug!("'{}' product found", product.name);
            template
                .resources
                .products
                .push(ProductTemplateResource::from_contract(product));

            self.add_product_policy(parameters, &product.name, &mut template.resources)
                .await?;
            self.add_product_tags(&product.name, &mut template.resources)
                .await?;
            self.add_product_groups(parameters, &product.name, &mut template.resources)
                .await?;
        }

        Ok(template)
    }

    /// Attaches the product's policy, when one exists.
    async fn add_product_policy(
        &self,
        parameters: &ExtractorParameters,
        product_name: &str,
        resources: &mut ProductTemplateResources,
    ) -> Result<()> {
        let policy = self
            .policy_extractor
            .generate_product_policy(parameters, product_name)
            .await
            .inspect_err(|e| {
                error!(
                    "failed to generate the policy resource for product '{}': {:#}",
                    product_name, e
                );
            })?;

        if let Some(policy) = policy {
            resources.policies.push(policy);
        }
        Ok(())
    }

    /// Attaches the product's tag associations.
    async fn add_product_tags(
        &self,
        product_name: &str,
        resources: &mut ProductTemplateResources,
    ) -> Result<()> {
        let product_tags = self
            .tags_client
            .get_all_linked_to_product(product_name)
            .await
            .inspect_err(|e| {
                error!(
                    "failed to fetch tags linked to product '{}': {:#}",
                    product_name, e
                );
            })?;

        if product_tags.is_empty() {
            warn!("no tags found for product {}", product_name);
            return Ok(());
        }

        for product_tag in &product_tags {
            debug!(
                "'{}' tag association found for {} product",
                product_tag.name, product_name
            );
            resources
                .tags
                .push(TagTemplateResource::product_association(
                    product_name,
                    product_tag,
                ));
        }
        Ok(())
    }

    /// Attaches the product's group associations.
    ///
    /// Skipped wholesale on the Consumption SKU, which has no group support.
    async fn add_product_groups(
        &self,
        parameters: &ExtractorParameters,
        product_name: &str,
        resources: &mut ProductTemplateResources,
    ) -> Result<()> {
        if parameters.sku.is_consumption() {
            info!("skipping group associations attached to products for the consumption sku");
            return Ok(());
        }

        let product_groups = self
            .groups_client
            .get_all_linked_to_product(product_name)
            .await
            .inspect_err(|e| {
                error!(
                    "failed to fetch groups linked to product '{}': {:#}",
                    product_name, e
                );
            })?;

        for product_group in &product_groups {
            debug!(
                "'{}' group association found for {} product",
                product_group.name, product_name
            );
            resources
                .groups
                .push(GroupTemplateResource::product_association(
                    product_name,
                    product_group,
                ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::service::SkuType;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;
    use std::path::PathBuf;

    const SERVICE_PATH: &str =
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.ApiManagement/service/svc";

    fn client_for(server: &ServerGuard) -> ApimClient {
        ApimClient::new("sub", "rg", "svc")
            .unwrap()
            .with_endpoint(&server.url())
    }

    fn parameters(sku: SkuType, single_api_name: Option<&str>) -> ExtractorParameters {
        ExtractorParameters {
            service_name: "svc".to_string(),
            single_api_name: single_api_name.map(str::to_string),
            output_directory: PathBuf::from("unused"),
            policy_xml_base_url: None,
            policy_xml_sas_token: None,
            sku,
        }
    }

    fn product_json(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "properties": {"displayName": name.to_uppercase(), "state": "published"}
        })
    }

    async fn mock_list(
        server: &mut ServerGuard,
        path: &str,
        items: serde_json::Value,
    ) -> mockito::Mock {
        server
            .mock("GET", format!("{SERVICE_PATH}{path}").as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({"value": items}).to_string())
            .create_async()
            .await
    }

    async fn mock_status(server: &mut ServerGuard, path: &str, status: usize) -> mockito::Mock {
        server
            .mock("GET", format!("{SERVICE_PATH}{path}").as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(json!({"error": {"code": "x", "message": "x"}}).to_string())
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_full_extraction_collects_products_and_attachments() {
        let mut server = Server::new_async().await;
        mock_list(
            &mut server,
            "/products",
            json!([product_json("starter"), product_json("unlimited")]),
        )
        .await;

        // starter: no policy, one tag, one group
        mock_status(&mut server, "/products/starter/policies/policy", 404).await;
        mock_list(
            &mut server,
            "/products/starter/tags",
            json!([{"name": "billing", "properties": {"displayName": "Billing"}}]),
        )
        .await;
        mock_list(
            &mut server,
            "/products/starter/groups",
            json!([{"name": "engineering", "properties": {"displayName": "Engineering"}}]),
        )
        .await;

        // unlimited: a policy, no tags, no groups
        server
            .mock("GET", format!("{SERVICE_PATH}/products/unlimited/policies/policy").as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                json!({
                    "name": "policy",
                    "properties": {"format": "rawxml", "value": "<policies />"}
                })
                .to_string(),
            )
            .create_async()
            .await;
        mock_list(&mut server, "/products/unlimited/tags", json!([])).await;
        mock_list(&mut server, "/products/unlimited/groups", json!([])).await;

        let client = client_for(&server);
        let template = ProductExtractor::new(&client)
            .generate_products_template(&parameters(SkuType::Developer, None))
            .await
            .unwrap();

        let resources = &template.resources;
        assert_eq!(resources.products.len(), 2);
        assert_eq!(resources.policies.len(), 1);
        assert_eq!(resources.tags.len(), 1);
        assert_eq!(resources.groups.len(), 1);

        // fetch order preserved
        assert!(resources.products[0].name.contains("/starter"));
        assert!(resources.products[1].name.contains("/unlimited"));
        assert!(resources.policies[0].name.contains("/unlimited/policy"));
        assert!(resources.tags[0].name.contains("/starter/billing"));
        assert_eq!(
            resources.groups[0].depends_on,
            vec![
                "[resourceId('Microsoft.ApiManagement/service/products', parameters('apimServiceName'), 'starter')]"
            ]
        );
    }

    #[tokio::test]
    async fn test_single_api_mode_filters_products() {
        let mut server = Server::new_async().await;
        mock_list(
            &mut server,
            "/products",
            json!([product_json("starter"), product_json("unlimited")]),
        )
        .await;
        mock_list(&mut server, "/apis/echo/products", json!([product_json("starter")])).await;

        mock_status(&mut server, "/products/starter/policies/policy", 404).await;
        mock_list(&mut server, "/products/starter/tags", json!([])).await;
        mock_list(&mut server, "/products/starter/groups", json!([])).await;

        // no mocks for unlimited: its attachments must never be fetched

        let client = client_for(&server);
        let template = ProductExtractor::new(&client)
            .generate_products_template(&parameters(SkuType::Developer, Some("echo")))
            .await
            .unwrap();

        assert_eq!(template.resources.products.len(), 1);
        assert!(template.resources.products[0].name.contains("/starter"));
    }

    #[tokio::test]
    async fn test_consumption_sku_skips_group_associations() {
        let mut server = Server::new_async().await;
        mock_list(&mut server, "/products", json!([product_json("starter")])).await;
        mock_status(&mut server, "/products/starter/policies/policy", 404).await;
        mock_list(&mut server, "/products/starter/tags", json!([])).await;

        // the groups endpoint is intentionally not mocked: a request to it
        // would fail the extraction
        let client = client_for(&server);
        let template = ProductExtractor::new(&client)
            .generate_products_template(&parameters(SkuType::Consumption, None))
            .await
            .unwrap();

        assert_eq!(template.resources.products.len(), 1);
        assert!(template.resources.groups.is_empty());
    }

    #[tokio::test]
    async fn test_tag_fetch_failure_propagates() {
        let mut server = Server::new_async().await;
        mock_list(&mut server, "/products", json!([product_json("starter")])).await;
        mock_status(&mut server, "/products/starter/policies/policy", 404).await;
        mock_status(&mut server, "/products/starter/tags", 500).await;

        let client = client_for(&server);
        let result = ProductExtractor::new(&client)
            .generate_products_template(&parameters(SkuType::Developer, None))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_policy_parameters_declared_when_base_url_configured() {
        let mut server = Server::new_async().await;
        mock_list(&mut server, "/products", json!([])).await;

        let mut params = parameters(SkuType::Developer, None);
        params.policy_xml_base_url = Some("https://files.example.com/policies".to_string());

        let client = client_for(&server);
        let template = ProductExtractor::new(&client)
            .generate_products_template(&params)
            .await
            .unwrap();

        assert!(template.parameters.contains_key("policyXmlBaseUrl"));
        assert!(template.is_empty());
    }
}
