//
//  apim-cli
//  extractor/tags.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Service-level tag extraction.
//!
//! Builds the tags template. A full extraction takes every tag of the
//! service; a single-API extraction narrows to the tags linked to that API,
//! since the other tags would be orphans in the emitted configuration.

use anyhow::Result;
use tracing::debug;

use crate::api::tags::TagsClient;
use crate::api::ApimClient;
use crate::template::tags::{TagTemplateResource, TagTemplateResources};
use crate::template::{Template, TemplateBuilder};

use super::ExtractorParameters;

/// Extracts service-level tags.
pub struct TagExtractor<'a> {
    tags_client: TagsClient<'a>,
}

impl<'a> TagExtractor<'a> {
    /// Creates a tag extractor over the shared management client.
    pub fn new(client: &'a ApimClient) -> Self {
        Self {
            tags_client: TagsClient::new(client),
        }
    }

    /// Generates the tags template.
    pub async fn generate_tags_template(
        &self,
        parameters: &ExtractorParameters,
    ) -> Result<Template<TagTemplateResources>> {
        let mut template = TemplateBuilder::new()
            .with_service_name_parameter()
            .build::<TagTemplateResources>();

        let tags = match parameters.single_api_name.as_deref() {
            Some(api_name) => self.tags_client.get_all_linked_to_api(api_name).await?,
            None => self.tags_client.get_all().await?,
        };

        for tag in &tags {
            debug!("'{}' tag found", tag.name);
            template
                .resources
                .tags
                .push(TagTemplateResource::service_tag(tag));
        }

        Ok(template)
    }
}
