//
//  apim-cli
//  cli/mod.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod browse;
mod completion;
mod config;
mod extract;

pub use browse::BrowseCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use extract::ExtractCommand;

use clap::{Parser, Subcommand};

/// APIM CLI - Extract API Management configuration from the command line
#[derive(Parser, Debug)]
#[command(
    name = "apim",
    version,
    about = "Extract Azure API Management configuration into ARM templates",
    long_about = "apim reads the current configuration of an Azure API Management service\n\
                  through the management API and emits ARM templates describing it,\n\
                  ready for redeployment to another service or environment.",
    propagate_version = true,
    after_help = "Use 'apim <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Azure subscription id
    #[arg(long, short = 's', global = true, env = "APIM_SUBSCRIPTION_ID")]
    pub subscription: Option<String>,

    /// Resource group containing the service
    #[arg(long, short = 'g', global = true, env = "APIM_RESOURCE_GROUP")]
    pub resource_group: Option<String>,

    /// API Management service name
    #[arg(long, short = 'n', global = true, env = "APIM_SERVICE_NAME")]
    pub service_name: Option<String>,

    /// Management endpoint (sovereign clouds)
    #[arg(long, global = true, env = "APIM_MANAGEMENT_URL")]
    pub management_url: Option<String>,

    /// Disable interactive prompts
    #[arg(long, global = true, env = "APIM_NO_PROMPT")]
    pub no_prompt: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract service configuration into ARM templates
    #[command(visible_alias = "x")]
    Extract(ExtractCommand),

    /// Open the service in the Azure portal
    Browse(BrowseCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
