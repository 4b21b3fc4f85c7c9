//! Serde shapes of the `packages.json` manifest.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One wheel artifact as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelRecord {
    pub filename: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
}

impl WheelRecord {
    /// Digest hex, or `""` when absent.
    pub fn sha256(&self) -> &str {
        self.sha256.as_deref().unwrap_or("")
    }

    /// Upload date as written in the manifest, or `""` when absent.
    pub fn upload_date(&self) -> &str {
        self.upload_date.as_deref().unwrap_or("")
    }
}

/// Per-package section: `{ "wheels": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    #[serde(default)]
    pub wheels: Vec<WheelRecord>,
}

/// Whole manifest, keyed by package display name.
///
/// Keys iterate in ascending string order, which is the order of the root index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub packages: BTreeMap<String, PackageEntry>,
}
