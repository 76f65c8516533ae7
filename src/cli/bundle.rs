//! Bundle generation.
//!
//! Phases:
//! - **Collect** - Walk the web dir and read every asset
//! - **Emit** - Plan, render and write the generated units
//! - **Report** - One summary line

use crate::{
    bundle::collect_bundle,
    codegen::{EmitReport, Emitter},
    config::{Config, EmitMode},
    debug, log,
    utils::plural_count,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Generate the bundle described by `config`.
pub fn bundle_web(config: &Config, quiet: bool) -> Result<EmitReport> {
    let settings = &config.bundle;
    debug!(
        "bundle";
        "{} -> {} ({:?}, {:?})",
        settings.web_dir.display(),
        settings.output_dir.display(),
        settings.mode,
        settings.target
    );

    let bundle = collect_bundle(&settings.web_dir, quiet)
        .with_context(|| format!("failed to collect assets from {}", settings.web_dir.display()))?;

    if bundle.is_empty() {
        log!("warning"; "no files found under {}", bundle.root().display());
    } else {
        debug!(
            "bundle";
            "collected {} ({})",
            plural_count(bundle.len(), "file"),
            plural_count(bundle.total_bytes(), "byte")
        );
    }

    let emitter = Emitter::new(&bundle, settings);
    let report = emitter
        .write()
        .with_context(|| format!("failed to write bundle to {}", settings.output_dir.display()))?;

    if settings.mode == EmitMode::Split {
        for (asset, file) in bundle.iter().zip(&report.files) {
            debug!("bundle"; "{} -> {}", asset.relative_path(), display_name(file));
        }
    }

    let index = report
        .index()
        .map(|path| relative_to(path, &config.root))
        .unwrap_or_else(|| emitter.index_file_name());

    log!(
        "bundle";
        "Generated {} with {}",
        index,
        plural_count(report.assets, "file")
    );

    Ok(report)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// `path` relative to the project root when possible.
fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BundleConfig, Target};
    use std::fs;
    use tempfile::TempDir;

    fn project(mode: EmitMode, target: Target) -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let web = root.join("web");
        fs::create_dir_all(web.join("css")).unwrap();
        fs::write(web.join("index.html"), "<html></html>").unwrap();
        fs::write(web.join("css/main.css"), "body {}").unwrap();
        fs::write(web.join(".gitkeep"), "").unwrap();

        let config = Config {
            config_path: None,
            root: root.clone(),
            bundle: BundleConfig {
                web_dir: web,
                output_dir: root.join("include/webembed/web/bundle"),
                mode,
                target,
                ..BundleConfig::default()
            },
        };
        (dir, config)
    }

    #[test]
    fn test_combined_bundle() {
        let (_dir, config) = project(EmitMode::Combined, Target::Cpp);
        let report = bundle_web(&config, true).unwrap();

        assert_eq!(report.assets, 2);
        assert_eq!(report.files.len(), 1);

        let index = report.index().unwrap();
        assert_eq!(
            relative_to(index, &config.root),
            "include/webembed/web/bundle/web_bundle.hpp"
        );

        let header = fs::read_to_string(index).unwrap();
        assert!(header.contains("index_html_path"));
        assert!(header.contains("css_main_css_mime"));
        assert!(!header.contains("gitkeep"));
    }

    #[test]
    fn test_split_bundle() {
        let (_dir, config) = project(EmitMode::Split, Target::Rust);
        let report = bundle_web(&config, true).unwrap();

        let names: Vec<_> = report.files.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, ["css_main_css.rs", "index_html.rs", "web_bundle.rs"]);
    }

    #[test]
    fn test_missing_web_dir_fails() {
        let (_dir, mut config) = project(EmitMode::Combined, Target::Cpp);
        config.bundle.web_dir = config.root.join("missing");

        let err = bundle_web(&config, true).unwrap_err();
        assert!(format!("{err:#}").contains("missing"));
        assert!(!config.bundle.output_dir.exists());
    }
}
