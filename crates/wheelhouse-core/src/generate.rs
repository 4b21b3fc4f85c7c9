//! Index generation driver: manifest in, root page plus per-package pages out.
//!
//! Layout under the output root:
//! - `index.html` lists every package.
//! - `<normalized-name>/index.html` lists one package's wheels.
//!
//! Every run rewrites all of these files from scratch.

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::html::{self, RootPage};
use crate::manifest::Manifest;
use crate::name::normalize;
use crate::output;

/// File name of every generated page.
pub const INDEX_FILE: &str = "index.html";

/// One package page written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPackage {
    pub display_name: String,
    pub path: PathBuf,
    pub wheel_count: usize,
}

/// What a run wrote, in write order.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub root_index: PathBuf,
    pub packages: Vec<GeneratedPackage>,
}

impl GenerateReport {
    /// True when the manifest listed no packages (root page has no links).
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

/// Loads `manifest_path` and writes the whole index under `output_dir`.
///
/// A missing, unreadable or malformed manifest is fatal and nothing is
/// written. An empty manifest is only a warning: the root page is still
/// produced.
pub fn generate(manifest_path: &Path, output_dir: &Path, page: &RootPage) -> Result<GenerateReport> {
    let manifest = Manifest::load(manifest_path)?;
    write_index(&manifest, output_dir, page)
}

/// Writes the index for an already-loaded manifest.
pub fn write_index(manifest: &Manifest, output_dir: &Path, page: &RootPage) -> Result<GenerateReport> {
    if manifest.is_empty() {
        tracing::warn!("manifest lists no packages; the index will be empty");
    }

    output::ensure_dir(output_dir)?;

    let root_index = output_dir.join(INDEX_FILE);
    output::write_file(&root_index, &html::root_index(manifest, page))?;
    tracing::info!("generated root index {}", root_index.display());

    let mut claimed: HashMap<String, &str> = HashMap::new();
    let mut packages = Vec::with_capacity(manifest.packages.len());

    for (display_name, entry) in &manifest.packages {
        let normalized = normalize(display_name);
        if let Some(previous) = claimed.insert(normalized.clone(), display_name) {
            tracing::warn!(
                "packages {previous:?} and {display_name:?} both normalize to {normalized:?}; \
                 keeping {display_name:?}"
            );
        }

        let package_dir = output_dir.join(&normalized);
        output::ensure_dir(&package_dir)?;

        let path = package_dir.join(INDEX_FILE);
        output::write_file(&path, &html::package_index(display_name, &entry.wheels))?;
        tracing::info!(
            wheels = entry.wheels.len(),
            "generated package index {}",
            path.display()
        );

        packages.push(GeneratedPackage {
            display_name: display_name.clone(),
            path,
            wheel_count: entry.wheels.len(),
        });
    }

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        root_index,
        packages,
    })
}
