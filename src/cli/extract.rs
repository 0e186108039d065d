//
//  apim-cli
//  cli/extract.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Extract command.
//!
//! Resolves the extraction parameters (flags, optional extractor
//! configuration file, persisted defaults), looks up the service instance,
//! runs the extractors, and reports the written templates.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::{presets, Table};
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;

use crate::api::service::ServiceClient;
use crate::api::ApimClient;
use crate::auth::resolve_access_token;
use crate::config::Config;
use crate::extractor::{ExtractionSummary, ExtractorExecutor, ExtractorParameters};
use crate::output::directory_is_non_empty;

use super::GlobalOptions;

/// Extract service configuration into ARM templates
#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// Narrow the extraction to resources linked to one API
    #[arg(long, short = 'a')]
    pub api_name: Option<String>,

    /// Output directory for templates and policy files
    #[arg(long, short = 'o', default_value = "templates")]
    pub output: PathBuf,

    /// Base URL under which policy XML files will be published;
    /// when set, policy bodies are written to files instead of inlined
    #[arg(long)]
    pub policy_xml_base_url: Option<String>,

    /// SAS token appended to policy file URLs
    #[arg(long, requires = "policy_xml_base_url")]
    pub policy_xml_sas_token: Option<String>,

    /// AAD access token for the management endpoint
    /// (default: APIM_ACCESS_TOKEN, then the Azure CLI)
    #[arg(long)]
    pub access_token: Option<String>,

    /// Extractor configuration file (JSON or YAML)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write into a non-empty output directory without asking
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Extractor configuration file.
///
/// Command-line flags take precedence over values from this file, which in
/// turn take precedence over the persisted defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ExtractorConfigFile {
    #[serde(default)]
    subscription_id: Option<String>,
    #[serde(default)]
    resource_group: Option<String>,
    #[serde(default)]
    service_name: Option<String>,
    #[serde(default)]
    api_name: Option<String>,
    #[serde(default)]
    output: Option<PathBuf>,
    #[serde(default)]
    policy_xml_base_url: Option<String>,
    #[serde(default)]
    policy_xml_sas_token: Option<String>,
}

impl ExtractorConfigFile {
    fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        let parsed = if is_json {
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON in {}", path.display()))?
        } else {
            serde_yaml::from_str(&raw)
                .with_context(|| format!("invalid YAML in {}", path.display()))?
        };

        Ok(parsed)
    }
}

impl ExtractCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let file = match &self.config {
            Some(path) => ExtractorConfigFile::load(path)?,
            None => ExtractorConfigFile::default(),
        };
        let defaults = Config::load()?;

        let subscription = global
            .subscription
            .clone()
            .or(file.subscription_id)
            .or(defaults.subscription)
            .context("no subscription id: pass --subscription or run 'apim config set subscription <id>'")?;
        let resource_group = global
            .resource_group
            .clone()
            .or(file.resource_group)
            .or(defaults.resource_group)
            .context("no resource group: pass --resource-group or run 'apim config set resource-group <name>'")?;
        let service_name = global
            .service_name
            .clone()
            .or(file.service_name)
            .or(defaults.service_name)
            .context("no service name: pass --service-name or run 'apim config set service-name <name>'")?;
        let management_url = global.management_url.clone().or(defaults.management_url);

        let api_name = self.api_name.clone().or(file.api_name);
        let output = if self.output == Path::new("templates") {
            file.output.unwrap_or_else(|| self.output.clone())
        } else {
            self.output.clone()
        };
        let policy_xml_base_url = self.policy_xml_base_url.clone().or(file.policy_xml_base_url);
        let policy_xml_sas_token = self
            .policy_xml_sas_token
            .clone()
            .or(file.policy_xml_sas_token);

        if directory_is_non_empty(&output) && !self.force {
            if global.no_prompt {
                bail!(
                    "output directory {} is not empty (pass --force to write anyway)",
                    output.display()
                );
            }
            let proceed = Confirm::new()
                .with_prompt(format!(
                    "Output directory {} is not empty. Write into it anyway?",
                    output.display()
                ))
                .default(false)
                .interact()?;
            if !proceed {
                println!("Extraction cancelled.");
                std::process::exit(crate::exit_codes::CANCELLED);
            }
        }

        let token = resolve_access_token(self.access_token.as_deref())?;
        let mut client = ApimClient::new(&subscription, &resource_group, &service_name)?;
        if let Some(url) = &management_url {
            client = client.with_endpoint(url);
        }
        let client = client.with_auth(token);

        let spinner = progress_spinner(format!("Looking up service {service_name}..."));
        let service = ServiceClient::new(&client).get().await;
        spinner.finish_and_clear();
        let service = service
            .with_context(|| format!("failed to look up service '{}'", service_name))?;

        println!(
            "{} Extracting configuration of {} ({:?} SKU)",
            style("→").cyan(),
            style(&service.name).bold(),
            service.sku.name
        );
        if let Some(api_name) = &api_name {
            println!("{} Single-API extraction for {}", style("→").cyan(), api_name);
        }

        let parameters = ExtractorParameters {
            service_name: service_name.clone(),
            single_api_name: api_name,
            output_directory: output.clone(),
            policy_xml_base_url,
            policy_xml_sas_token,
            sku: service.sku.name,
        };

        let spinner = progress_spinner("Extracting templates...".to_string());
        let summary = ExtractorExecutor::new(&client, parameters)
            .execute_generation()
            .await;
        spinner.finish_and_clear();
        let summary = summary?;

        print_summary(&summary);

        if summary.templates.is_empty() {
            println!(
                "{} Nothing extracted; no templates were written",
                style("!").yellow()
            );
        } else {
            println!(
                "{} Templates written to {}",
                style("✓").green(),
                output.display()
            );
        }

        Ok(())
    }
}

fn progress_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}").expect("spinner template is valid"),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

fn print_summary(summary: &ExtractionSummary) {
    if summary.templates.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(["Template", "Resources"]);
    for template in &summary.templates {
        table.add_row([
            template.file_name.to_string(),
            template.resource_count.to_string(),
        ]);
    }
    println!("{table}");
}
