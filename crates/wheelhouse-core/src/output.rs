//! Write-once output files.
//!
//! Each page is written in full to `<target>.part` and then renamed over the
//! target, so a reader never observes a half-written `index.html`.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Creates `dir` and any missing parents. Existing directories are reused.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))
}

/// Replaces `path` with `contents`. Any previous file is overwritten, never merged.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    let tp = temp_path(path);
    {
        let mut f = fs::File::create(&tp)
            .with_context(|| format!("create temp file {}", tp.display()))?;
        f.write_all(contents.as_bytes())
            .with_context(|| format!("write {}", tp.display()))?;
        f.sync_all()
            .with_context(|| format!("sync {}", tp.display()))?;
    }
    fs::rename(&tp, path)
        .with_context(|| format!("rename {} -> {}", tp.display(), path.display()))?;
    tracing::debug!(bytes = contents.len(), "wrote {}", path.display());
    Ok(())
}
