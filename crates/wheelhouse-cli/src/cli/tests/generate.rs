//! Tests for the generate subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_generate_defaults() {
    match parse(&["wheelhouse", "generate"]) {
        CliCommand::Generate {
            manifest,
            output,
            title,
            description,
        } => {
            assert!(manifest.is_none());
            assert!(output.is_none());
            assert!(title.is_none());
            assert!(description.is_none());
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_paths() {
    match parse(&[
        "wheelhouse",
        "generate",
        "--manifest",
        "data/packages.json",
        "-o",
        "public/simple",
    ]) {
        CliCommand::Generate {
            manifest, output, ..
        } => {
            assert_eq!(manifest.as_deref(), Some(Path::new("data/packages.json")));
            assert_eq!(output.as_deref(), Some(Path::new("public/simple")));
        }
        _ => panic!("expected Generate with paths"),
    }
}

#[test]
fn cli_parse_generate_page_text() {
    match parse(&[
        "wheelhouse",
        "generate",
        "--title",
        "DGX Spark Wheels - Simple Index",
        "--description",
        "Python wheels built for aarch64 DGX systems",
    ]) {
        CliCommand::Generate {
            title, description, ..
        } => {
            assert_eq!(title.as_deref(), Some("DGX Spark Wheels - Simple Index"));
            assert_eq!(
                description.as_deref(),
                Some("Python wheels built for aarch64 DGX systems")
            );
        }
        _ => panic!("expected Generate with title/description"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["wheelhouse", "generate", "--config", "/tmp/wh.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/wh.toml")));
}

#[test]
fn cli_generate_run_writes_index() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("packages.json");
    std::fs::write(
        &manifest,
        r#"{"packages":{"My_Pkg":{"wheels":[{"filename":"my_pkg-1.0-py3-none-any.whl","url":"https://example.com/w.whl"}]}}}"#,
    )
    .unwrap();
    let out = dir.path().join("index");

    crate::cli::commands::run_generate(
        &manifest,
        &out,
        &wheelhouse_core::html::RootPage::default(),
    )
    .unwrap();

    assert!(out.join("index.html").exists());
    assert!(out.join("my-pkg").join("index.html").exists());
}

#[test]
fn cli_generate_run_missing_manifest_err() {
    let dir = tempfile::tempdir().unwrap();
    assert!(crate::cli::commands::run_generate(
        &dir.path().join("packages.json"),
        &dir.path().join("index"),
        &wheelhouse_core::html::RootPage::default(),
    )
    .is_err());
}

#[test]
fn cli_generate_unwritable_config_home_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let config_home = dir.path().join("config-home");
    std::fs::write(&config_home, "a file, not a directory").unwrap();
    let manifest = dir.path().join("p.json");
    std::fs::write(
        &manifest,
        r#"{"packages":{"a":{"wheels":[{"filename":"a-1.0.whl","url":"u"}]}}}"#,
    )
    .unwrap();
    let out = dir.path().join("out");

    let cfg = wheelhouse_core::config::load_or_default_at(
        &config_home.join("wheelhouse").join("config.toml"),
    );
    let (manifest, output, page) = crate::cli::generate_args(
        cfg,
        Some(manifest),
        Some(out.clone()),
        None,
        None,
    );
    crate::cli::commands::run_generate(&manifest, &output, &page).unwrap();

    assert!(out.join("index.html").exists());
    assert!(out.join("a").join("index.html").exists());
}

#[test]
fn cli_generate_args_flags_override_config() {
    let cfg = wheelhouse_core::config::WheelhouseConfig {
        root_description: Some("from config".to_string()),
        ..Default::default()
    };
    let (manifest, output, page) = crate::cli::generate_args(
        cfg,
        None,
        Some("public".into()),
        Some("Flag Title".to_string()),
        None,
    );
    assert_eq!(manifest, Path::new("packages.json"));
    assert_eq!(output, Path::new("public"));
    assert_eq!(page.title, "Flag Title");
    assert_eq!(page.description.as_deref(), Some("from config"));
}

#[test]
fn cli_explicit_config_errors_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    assert!(crate::cli::load_config(Some(&dir.path().join("missing.toml"))).is_err());
}
