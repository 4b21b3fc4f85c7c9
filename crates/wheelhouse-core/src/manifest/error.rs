//! Fatal manifest errors.

use std::path::PathBuf;

/// Manifest could not be loaded. Any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("read manifest {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse manifest JSON {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
