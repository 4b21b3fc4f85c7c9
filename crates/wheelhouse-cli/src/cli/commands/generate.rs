//! `wheelhouse generate` – write the simple index.

use anyhow::Result;
use std::path::Path;
use wheelhouse_core::generate;
use wheelhouse_core::html::RootPage;

/// Generate every page and report each written file plus a summary.
pub fn run_generate(manifest: &Path, output_dir: &Path, page: &RootPage) -> Result<()> {
    let report = generate::generate(manifest, output_dir, page)?;

    if report.is_empty() {
        eprintln!("Warning: No packages found in {}", manifest.display());
        eprintln!("The index will be empty.");
    }

    println!("Generated: {}", report.root_index.display());
    for pkg in &report.packages {
        println!("Generated: {} ({} wheels)", pkg.path.display(), pkg.wheel_count);
    }

    println!("\nTotal packages: {}", report.packages.len());
    println!("Index location: {}", report.output_dir.display());
    Ok(())
}
