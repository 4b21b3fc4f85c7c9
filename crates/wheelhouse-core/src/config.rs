use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::html::RootPage;

/// Global configuration loaded from `~/.config/wheelhouse/config.toml`.
/// Keys missing from the file take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelhouseConfig {
    /// Manifest to read when `--manifest` is not given. Relative to the working directory.
    pub manifest: PathBuf,
    /// Output root when `--output` is not given. Relative to the working directory.
    pub output_dir: PathBuf,
    /// Title and heading of the root index page.
    pub root_title: String,
    /// Optional paragraph under the root heading.
    pub root_description: Option<String>,
}

impl Default for WheelhouseConfig {
    fn default() -> Self {
        let page = RootPage::default();
        Self {
            manifest: PathBuf::from("packages.json"),
            output_dir: PathBuf::from("index"),
            root_title: page.title,
            root_description: page.description,
        }
    }
}

impl WheelhouseConfig {
    pub fn root_page(&self) -> RootPage {
        RootPage {
            title: self.root_title.clone(),
            description: self.root_description.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wheelhouse")
        .context("locate XDG config directory")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("create XDG config directory")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WheelhouseConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], for a config file at `path`.
pub fn load_or_init_at(path: &Path) -> Result<WheelhouseConfig> {
    if !path.exists() {
        let default_cfg = WheelhouseConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        fs::write(path, toml)
            .with_context(|| format!("write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Load the user config, or fall back to built-in defaults when it cannot be
/// located, read, parsed or created. Never fails: only the manifest decides
/// whether a run aborts.
pub fn load_or_default() -> WheelhouseConfig {
    match config_path() {
        Ok(path) => load_or_default_at(&path),
        Err(err) => {
            tracing::warn!("using default config: {err:#}");
            WheelhouseConfig::default()
        }
    }
}

/// Like [`load_or_default`], for a config file at `path`.
pub fn load_or_default_at(path: &Path) -> WheelhouseConfig {
    load_or_init_at(path).unwrap_or_else(|err| {
        tracing::warn!("using default config: {err:#}");
        WheelhouseConfig::default()
    })
}

/// Load configuration from an explicit file (`--config`). The file must exist.
pub fn load_from(path: &Path) -> Result<WheelhouseConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: WheelhouseConfig = toml::from_str(&data)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
