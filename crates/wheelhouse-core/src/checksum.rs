//! SHA-256 helpers: the `#sha256=` link fragment and a file digest for
//! filling in manifest entries.
//!
//! Index generation never reads wheel files; `sha256_path` is only used by
//! the `checksum` command.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Link fragment for a wheel's digest, or `None` when no digest is recorded.
pub fn fragment(sha256: &str) -> Option<String> {
    if sha256.is_empty() {
        None
    } else {
        Some(format!("#sha256={sha256}"))
    }
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
