//
//  apim-cli
//  extractor/mod.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! # Entity Extractors
//!
//! Each extractor reads one kind of API Management resource through the typed
//! clients and maps it into template resources. Extraction is sequential by
//! design: the only ordering contract is that appends into the template
//! collections preserve the order the service reported, and there is nothing
//! to coordinate.
//!
//! ## Extractors
//!
//! - [`products::ProductExtractor`]: products plus their policy, tag, and
//!   group attachments — the core path
//! - [`groups::GroupExtractor`]: service-level groups
//! - [`tags::TagExtractor`]: service-level tags
//! - [`policies::PolicyExtractor`]: policy documents (shared by the product
//!   extractor, plus the global service policy)
//!
//! ## Error handling
//!
//! Fetch failures inside a per-product step are logged at error level with
//! their product context and propagated unchanged; nothing is swallowed and
//! nothing is retried.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::api::service::SkuType;
use crate::api::ApimClient;
use crate::output::{self, file_names};
use crate::template::ResourceCollection;

/// The product extractor (the core path).
pub mod products;

/// Service-level group extraction.
pub mod groups;

/// Service-level tag extraction.
pub mod tags;

/// Policy document extraction.
pub mod policies;

/// Everything an extraction run needs to know.
///
/// Assembled by the extract command from flags, the optional extractor
/// configuration file, persisted defaults, and the service instance lookup
/// (which provides the SKU).
#[derive(Debug, Clone)]
pub struct ExtractorParameters {
    /// Name of the source service.
    pub service_name: String,

    /// When set, narrow the extraction to resources linked to this API.
    pub single_api_name: Option<String>,

    /// Directory templates and policy files are written into.
    pub output_directory: PathBuf,

    /// Base URL under which policy XML files will be published. When set,
    /// policy bodies are written to files and referenced through a template
    /// parameter instead of being inlined.
    pub policy_xml_base_url: Option<String>,

    /// SAS token appended to policy file URLs.
    pub policy_xml_sas_token: Option<String>,

    /// The SKU the source service runs on. Consumption disables group
    /// association extraction.
    pub sku: SkuType,
}

/// One written template in the extraction summary.
#[derive(Debug, Clone)]
pub struct TemplateSummary {
    /// File name inside the output directory.
    pub file_name: &'static str,

    /// Number of resources in the template.
    pub resource_count: usize,
}

/// Result of an extraction run: which templates were written and how many
/// resources each carries. Empty templates are skipped and do not appear.
#[derive(Debug, Clone, Default)]
pub struct ExtractionSummary {
    /// Written templates, in generation order.
    pub templates: Vec<TemplateSummary>,
}

/// Runs the extractors in sequence and writes the non-empty templates.
pub struct ExtractorExecutor<'a> {
    client: &'a ApimClient,
    parameters: ExtractorParameters,
}

impl<'a> ExtractorExecutor<'a> {
    /// Creates an executor over the shared management client.
    pub fn new(client: &'a ApimClient, parameters: ExtractorParameters) -> Self {
        Self { client, parameters }
    }

    /// Runs every extractor and writes the resulting templates.
    ///
    /// Generation order is products, groups, tags, global policy. Each
    /// non-empty template is written into the output directory under its
    /// fixed file name; empty templates are skipped with an info log.
    pub async fn execute_generation(&self) -> Result<ExtractionSummary> {
        let parameters = &self.parameters;
        let mut summary = ExtractionSummary::default();

        info!(
            "extracting configuration of service '{}'",
            parameters.service_name
        );
        if let Some(api_name) = &parameters.single_api_name {
            info!("single-API extraction for '{}'", api_name);
        }

        let products_template = products::ProductExtractor::new(self.client)
            .generate_products_template(parameters)
            .await?;
        self.write_template(&mut summary, file_names::PRODUCTS, &products_template)?;

        let groups_template = groups::GroupExtractor::new(self.client)
            .generate_groups_template()
            .await?;
        self.write_template(&mut summary, file_names::GROUPS, &groups_template)?;

        let tags_template = tags::TagExtractor::new(self.client)
            .generate_tags_template(parameters)
            .await?;
        self.write_template(&mut summary, file_names::TAGS, &tags_template)?;

        let global_policy_template = policies::PolicyExtractor::new(self.client)
            .generate_global_policy_template(parameters)
            .await?;
        self.write_template(
            &mut summary,
            file_names::GLOBAL_SERVICE_POLICY,
            &global_policy_template,
        )?;

        Ok(summary)
    }

    fn write_template<R>(
        &self,
        summary: &mut ExtractionSummary,
        file_name: &'static str,
        template: &crate::template::Template<R>,
    ) -> Result<()>
    where
        R: ResourceCollection + serde::Serialize,
    {
        if template.is_empty() {
            info!("skipping {}: no resources extracted", file_name);
            return Ok(());
        }

        output::save_template(&self.parameters.output_directory, file_name, template)?;
        summary.templates.push(TemplateSummary {
            file_name,
            resource_count: template.resource_count(),
        });
        Ok(())
    }
}
