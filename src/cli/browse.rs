//
//  apim-cli
//  cli/browse.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Browse command - open the service in the Azure portal

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::config::Config;

use super::GlobalOptions;

/// Open the service in the Azure portal
#[derive(Args, Debug)]
pub struct BrowseCommand {
    /// Print the URL instead of opening the browser
    #[arg(long, short = 'p')]
    pub print: bool,
}

impl BrowseCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let defaults = Config::load()?;

        let subscription = global
            .subscription
            .clone()
            .or(defaults.subscription)
            .context("no subscription id: pass --subscription or run 'apim config set subscription <id>'")?;
        let resource_group = global
            .resource_group
            .clone()
            .or(defaults.resource_group)
            .context("no resource group: pass --resource-group or run 'apim config set resource-group <name>'")?;
        let service_name = global
            .service_name
            .clone()
            .or(defaults.service_name)
            .context("no service name: pass --service-name or run 'apim config set service-name <name>'")?;

        let url = portal_url(&subscription, &resource_group, &service_name);

        if self.print {
            println!("{}", url);
        } else {
            println!(
                "{} Opening {} in browser...",
                style("→").cyan(),
                service_name
            );
            webbrowser::open(&url).context("failed to open the browser")?;
        }

        Ok(())
    }
}

/// Azure portal URL of an API Management service.
fn portal_url(subscription: &str, resource_group: &str, service_name: &str) -> String {
    format!(
        "https://portal.azure.com/#resource/subscriptions/{}/resourceGroups/{}/providers/Microsoft.ApiManagement/service/{}/overview",
        subscription, resource_group, service_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_url() {
        assert_eq!(
            portal_url("sub-1", "rg-1", "contoso-apim"),
            "https://portal.azure.com/#resource/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.ApiManagement/service/contoso-apim/overview"
        );
    }
}
