//
//  apim-cli
//  api/common/pagination.rs
//
//  Copyright (c) 2026 apim-cli contributors. All rights reserved.
//

//! Pagination Types for ARM Collection Responses
//!
//! This module provides the pagination structure for multi-page collection
//! responses from the Azure Resource Manager endpoint.
//!
//! # Overview
//!
//! ARM collections use URL-based continuation: each page carries the items in
//! `value` and, when more pages exist, an absolute URL in `nextLink`.
//! Iteration follows `nextLink` until it is absent. Page order is significant
//! to the extractor — appends into template collections preserve the order
//! the service reported.
//!
//! # Example
//!
//! ```rust
//! use apim_cli::api::common::ListResponse;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Product { name: String }
//!
//! let json = r#"{
//!     "value": [{"name": "starter"}],
//!     "count": 5,
//!     "nextLink": "https://management.azure.com/...?$skip=1"
//! }"#;
//!
//! let page: ListResponse<Product> = serde_json::from_str(json).unwrap();
//! assert!(page.has_next());
//! ```

use serde::Deserialize;

/// A single page of an ARM collection response.
///
/// # Type Parameters
///
/// - `T` - The type of items contained in the `value` array
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `value` | `Vec<T>` | Items in the current page |
/// | `count` | `Option<u64>` | Total item count across all pages, when reported |
/// | `next_link` | `Option<String>` | Absolute URL of the next page |
///
/// # Notes
///
/// - `count` is only present on endpoints that support `$count`
/// - `value` is always present, even if empty
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    /// Items in the current page. May be empty if the query returned no
    /// results.
    #[serde(default)]
    pub value: Vec<T>,

    /// Total number of items across all pages, when the endpoint reports it.
    #[serde(default)]
    pub count: Option<u64>,

    /// Absolute URL of the next page, absent on the last page.
    #[serde(default, rename = "nextLink")]
    pub next_link: Option<String>,
}

impl<T> ListResponse<T> {
    /// Returns `true` when another page exists.
    pub fn has_next(&self) -> bool {
        self.next_link.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Returns the URL of the next page, if any.
    ///
    /// Empty strings are treated as absent; some endpoints emit
    /// `"nextLink": ""` on the final page.
    pub fn next_url(&self) -> Option<&str> {
        self.next_link.as_deref().filter(|l| !l.is_empty())
    }
}
