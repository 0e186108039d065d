//
//  apim-cli
//  extractor/groups.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Service-level group extraction.
//!
//! Builds the groups template from the service's group list. Built-in groups
//! (administrators, developers, guests) exist on every service and cannot be
//! redeployed, so they are skipped; product-group associations referencing
//! them still deploy because the target service has its own built-ins.

use anyhow::Result;
use tracing::debug;

use crate::api::groups::GroupsClient;
use crate::api::ApimClient;
use crate::template::groups::{GroupTemplateResource, GroupTemplateResources};
use crate::template::{Template, TemplateBuilder};

/// Extracts service-level groups.
pub struct GroupExtractor<'a> {
    groups_client: GroupsClient<'a>,
}

impl<'a> GroupExtractor<'a> {
    /// Creates a group extractor over the shared management client.
    pub fn new(client: &'a ApimClient) -> Self {
        Self {
            groups_client: GroupsClient::new(client),
        }
    }

    /// Generates the groups template, skipping built-in groups.
    pub async fn generate_groups_template(&self) -> Result<Template<GroupTemplateResources>> {
        let mut template = TemplateBuilder::new()
            .with_service_name_parameter()
            .build::<GroupTemplateResources>();

        let groups = self.groups_client.get_all().await?;

        for group in &groups {
            if group.is_built_in() {
                debug!("skipping built-in group '{}'", group.name);
                continue;
            }

            debug!("'{}' group found", group.name);
            template
                .resources
                .groups
                .push(GroupTemplateResource::service_group(group));
        }

        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const SERVICE_PATH: &str =
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.ApiManagement/service/svc";

    #[tokio::test]
    async fn test_built_in_groups_are_skipped() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", format!("{SERVICE_PATH}/groups").as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                json!({"value": [
                    {"name": "administrators", "properties": {"displayName": "Administrators", "builtIn": true, "type": "system"}},
                    {"name": "engineering", "properties": {"displayName": "Engineering", "builtIn": false, "type": "custom"}}
                ]})
                .to_string(),
            )
            .create_async()
            .await;

        let client = ApimClient::new("sub", "rg", "svc")
            .unwrap()
            .with_endpoint(&server.url());

        let template = GroupExtractor::new(&client)
            .generate_groups_template()
            .await
            .unwrap();

        assert_eq!(template.resource_count(), 1);
        assert!(template.resources.groups[0].name.contains("/engineering"));
    }
}
