//! CLI for the wheelhouse simple index generator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wheelhouse_core::config::{self, WheelhouseConfig};
use wheelhouse_core::html::RootPage;

use commands::{run_checksum, run_completions, run_generate, run_list, run_normalize};

/// Top-level CLI for the wheelhouse generator.
#[derive(Debug, Parser)]
#[command(name = "wheelhouse")]
#[command(about = "wheelhouse: static PEP 503 simple index from a JSON wheel manifest", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/wheelhouse/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate the root index and one page per package.
    Generate {
        /// Manifest JSON (default from config: packages.json).
        #[arg(long, short, value_name = "PATH")]
        manifest: Option<PathBuf>,
        /// Output root directory (default from config: index).
        #[arg(long, short, value_name = "DIR")]
        output: Option<PathBuf>,
        /// Title and heading of the root page.
        #[arg(long)]
        title: Option<String>,
        /// Paragraph shown under the root heading.
        #[arg(long)]
        description: Option<String>,
    },

    /// Print the PEP 503 normalized form of each name.
    Normalize {
        /// Package display names.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List packages in the manifest without writing anything.
    List {
        /// Manifest JSON (default from config: packages.json).
        #[arg(long, short, value_name = "PATH")]
        manifest: Option<PathBuf>,
    },

    /// Compute SHA-256 of a local wheel, for the manifest's sha256 field.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

/// `--config FILE` must load; the implicit user config falls back to defaults.
fn load_config(explicit: Option<&Path>) -> Result<WheelhouseConfig> {
    let cfg = match explicit {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default(),
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

/// Flags win over config values.
fn generate_args(
    cfg: WheelhouseConfig,
    manifest: Option<PathBuf>,
    output: Option<PathBuf>,
    title: Option<String>,
    description: Option<String>,
) -> (PathBuf, PathBuf, RootPage) {
    let mut page = cfg.root_page();
    if let Some(title) = title {
        page.title = title;
    }
    if description.is_some() {
        page.description = description;
    }
    (
        manifest.unwrap_or(cfg.manifest),
        output.unwrap_or(cfg.output_dir),
        page,
    )
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Generate {
                manifest,
                output,
                title,
                description,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                let (manifest, output, page) =
                    generate_args(cfg, manifest, output, title, description);
                run_generate(&manifest, &output, &page)?;
            }
            CliCommand::Normalize { names } => run_normalize(&names),
            CliCommand::List { manifest } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_list(&manifest.unwrap_or(cfg.manifest))?;
            }
            CliCommand::Checksum { path } => run_checksum(&path)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
