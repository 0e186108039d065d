//
//  apim-cli
//  output/mod.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! # Output Module
//!
//! Writes extraction results to disk: templates as pretty-printed JSON in the
//! output directory, and policy XML bodies under a `policies/` subdirectory
//! when policy file emission is configured.
//!
//! ## Layout
//!
//! ```text
//! <output>/
//!     products.template.json
//!     groups.template.json
//!     tags.template.json
//!     globalServicePolicy.template.json
//!     policies/
//!         starter-productPolicy.xml
//!         globalServicePolicy.xml
//! ```
//!
//! Empty templates are not written; the extractor skips them before calling
//! into this module.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

/// File names of the emitted templates.
pub mod file_names {
    /// The product template (products, policies, tags, groups).
    pub const PRODUCTS: &str = "products.template.json";

    /// The service-level groups template.
    pub const GROUPS: &str = "groups.template.json";

    /// The service-level tags template.
    pub const TAGS: &str = "tags.template.json";

    /// The global service policy template.
    pub const GLOBAL_SERVICE_POLICY: &str = "globalServicePolicy.template.json";

    /// Subdirectory holding policy XML bodies.
    pub const POLICIES_DIR: &str = "policies";

    /// File name of the global service policy body.
    pub const GLOBAL_SERVICE_POLICY_XML: &str = "globalServicePolicy.xml";

    /// File name of a product's policy body.
    pub fn product_policy_xml(product_name: &str) -> String {
        format!("{}-productPolicy.xml", product_name)
    }
}

/// Writes a template as pretty-printed JSON into the output directory.
///
/// Parent directories are created as needed. A trailing newline is appended
/// so the files diff cleanly under version control.
///
/// # Parameters
///
/// * `directory` - The output directory
/// * `file_name` - The template file name (see [`file_names`])
/// * `template` - The template to serialize
///
/// # Returns
///
/// The path of the written file.
pub fn save_template<T: Serialize>(
    directory: &Path,
    file_name: &str,
    template: &T,
) -> Result<PathBuf> {
    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create output directory {}", directory.display()))?;

    let path = directory.join(file_name);
    let mut json = serde_json::to_string_pretty(template).context("failed to serialize template")?;
    json.push('\n');

    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote template {}", path.display());

    Ok(path)
}

/// Writes a policy XML body under the `policies/` subdirectory.
///
/// # Parameters
///
/// * `directory` - The output directory
/// * `file_name` - The policy file name (see [`file_names`])
/// * `content` - The raw policy XML
///
/// # Returns
///
/// The path of the written file.
pub fn save_policy_xml(directory: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let policies_dir = directory.join(file_names::POLICIES_DIR);
    fs::create_dir_all(&policies_dir).with_context(|| {
        format!("failed to create policy directory {}", policies_dir.display())
    })?;

    let path = policies_dir.join(file_name);
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote policy {}", path.display());

    Ok(path)
}

/// Returns `true` when the directory exists and contains any entry.
///
/// Used by the extract command to ask for confirmation before writing into a
/// directory that already has content.
pub fn directory_is_non_empty(directory: &Path) -> bool {
    fs::read_dir(directory)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
