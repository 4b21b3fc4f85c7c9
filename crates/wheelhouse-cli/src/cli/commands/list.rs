//! `wheelhouse list` – show what the manifest would generate.

use anyhow::Result;
use std::path::Path;
use wheelhouse_core::manifest::Manifest;
use wheelhouse_core::name::normalize;

pub fn run_list(manifest_path: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    if manifest.is_empty() {
        println!("No packages in {}.", manifest_path.display());
        return Ok(());
    }
    println!("{:<32} {:<32} {}", "PACKAGE", "DIRECTORY", "WHEELS");
    for (display_name, entry) in &manifest.packages {
        println!(
            "{:<32} {:<32} {}",
            display_name,
            format!("{}/", normalize(display_name)),
            entry.wheels.len()
        );
    }
    println!(
        "\n{} packages, {} wheels",
        manifest.packages.len(),
        manifest.wheel_count()
    );
    Ok(())
}
