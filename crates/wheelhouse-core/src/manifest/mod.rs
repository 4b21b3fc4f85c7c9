//! Package manifest: the single JSON input describing packages and their wheels.
//!
//! Shape: `{ "packages": { "<display-name>": { "wheels": [ {...}, ... ] } } }`.
//! `sha256` and `upload_date` are optional per wheel; `filename` and `url`
//! are required. A missing `packages` or `wheels` key reads as empty.

mod error;
mod parse;

pub use error::ManifestError;
pub use parse::{Manifest, PackageEntry, WheelRecord};

use std::io::ErrorKind;
use std::path::Path;

impl Manifest {
    /// Reads and parses the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ManifestError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ManifestError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let manifest: Manifest =
            serde_json::from_slice(&bytes).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            packages = manifest.packages.len(),
            wheels = manifest.wheel_count(),
            "loaded manifest {}",
            path.display()
        );
        Ok(manifest)
    }

    /// Parses a manifest already held in memory.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Total wheels across all packages.
    pub fn wheel_count(&self) -> usize {
        self.packages.values().map(|p| p.wheels.len()).sum()
    }
}
