//
//  apim-cli
//  cli/config.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! CLI configuration commands
//!
//! This module provides commands for managing the CLI's persisted defaults:
//! getting, setting, unsetting, and listing values, and showing the
//! configuration file path.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, CONFIG_KEYS};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset a configuration value
    Unset(UnsetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key
    pub key: String,
}

impl ConfigCommand {
    pub async fn run(&self, _global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args),
            ConfigSubcommand::Set(args) => self.set(args),
            ConfigSubcommand::Unset(args) => self.unset(args),
            ConfigSubcommand::List => self.list(),
            ConfigSubcommand::Path => self.path(),
        }
    }

    /// Get a configuration value
    fn get(&self, args: &GetArgs) -> Result<()> {
        let config = Config::load()?;
        match config.get(&args.key)? {
            Some(value) => println!("{}", value),
            None => println!("{}", style("(not set)").dim()),
        }
        Ok(())
    }

    /// Set a configuration value
    fn set(&self, args: &SetArgs) -> Result<()> {
        let mut config = Config::load()?;
        config.set(&args.key, &args.value)?;
        config.save()?;
        println!("{} {} = {}", style("✓").green(), args.key, args.value);
        Ok(())
    }

    /// Unset a configuration value
    fn unset(&self, args: &UnsetArgs) -> Result<()> {
        let mut config = Config::load()?;
        config.unset(&args.key)?;
        config.save()?;
        println!("{} {} unset", style("✓").green(), args.key);
        Ok(())
    }

    /// List all configuration values
    fn list(&self) -> Result<()> {
        let config = Config::load()?;
        for key in CONFIG_KEYS {
            match config.get(key)? {
                Some(value) => println!("{} = {}", key, value),
                None => println!("{} = {}", key, style("(not set)").dim()),
            }
        }
        Ok(())
    }

    /// Show configuration file path
    fn path(&self) -> Result<()> {
        println!("{}", Config::path()?.display());
        Ok(())
    }
}
