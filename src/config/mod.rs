//
//  apim-cli
//  config/mod.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides persisted defaults for the CLI, loaded from and saved
//! to a TOML file in the platform configuration directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/apim/config.toml`
//! - **macOS**: `~/Library/Application Support/apim/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\apim\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! subscription = "00000000-0000-0000-0000-000000000000"
//! resource-group = "platform-rg"
//! service-name = "contoso-apim"
//! ```
//!
//! Command-line flags and environment variables always take precedence over
//! these defaults.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use apim_cli::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("service-name", "contoso-apim")?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "subscription",
    "resource-group",
    "service-name",
    "management-url",
];

/// Persisted defaults for the CLI.
///
/// Every field is optional; an absent field simply means the matching
/// command-line flag is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default Azure subscription id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,

    /// Default resource group.
    #[serde(
        default,
        rename = "resource-group",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_group: Option<String>,

    /// Default API Management service name.
    #[serde(
        default,
        rename = "service-name",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_name: Option<String>,

    /// Default management endpoint (sovereign clouds).
    #[serde(
        default,
        rename = "management-url",
        skip_serializing_if = "Option::is_none"
    )]
    pub management_url: Option<String>,
}

impl Config {
    /// Returns the path of the configuration file.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .context("could not determine the configuration directory")?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Saves the configuration to the default location, creating parent
    /// directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(self).context("failed to serialize configuration")?;
        fs::write(&path, raw).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Returns the value stored under a key.
    ///
    /// # Errors
    ///
    /// Returns an error for keys not listed in [`CONFIG_KEYS`].
    pub fn get(&self, key: &str) -> Result<Option<&str>> {
        match key {
            "subscription" => Ok(self.subscription.as_deref()),
            "resource-group" => Ok(self.resource_group.as_deref()),
            "service-name" => Ok(self.service_name.as_deref()),
            "management-url" => Ok(self.management_url.as_deref()),
            _ => anyhow::bail!(
                "unknown configuration key '{}' (expected one of: {})",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
    }

    /// Stores a value under a key.
    ///
    /// # Errors
    ///
    /// Returns an error for keys not listed in [`CONFIG_KEYS`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = Some(value.to_string());
        match key {
            "subscription" => self.subscription = value,
            "resource-group" => self.resource_group = value,
            "service-name" => self.service_name = value,
            "management-url" => self.management_url = value,
            _ => anyhow::bail!(
                "unknown configuration key '{}' (expected one of: {})",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Removes the value stored under a key.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "subscription" => self.subscription = None,
            "resource-group" => self.resource_group = None,
            "service-name" => self.service_name = None,
            "management-url" => self.management_url = None,
            _ => anyhow::bail!(
                "unknown configuration key '{}' (expected one of: {})",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut config = Config::default();
        assert_eq!(config.get("service-name").unwrap(), None);

        config.set("service-name", "contoso-apim").unwrap();
        assert_eq!(config.get("service-name").unwrap(), Some("contoso-apim"));

        config.unset("service-name").unwrap();
        assert_eq!(config.get("service-name").unwrap(), None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = Config::default();
        assert!(config.get("nope").is_err());
        assert!(config.set("nope", "x").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.set("subscription", "sub-1").unwrap();
        config.set("resource-group", "rg-1").unwrap();

        let raw = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&raw).unwrap();

        assert_eq!(parsed.subscription.as_deref(), Some("sub-1"));
        assert_eq!(parsed.resource_group.as_deref(), Some("rg-1"));
        assert_eq!(parsed.service_name, None);
    }
}
