//! List command implementation.
//!
//! Shows what a bundle run would embed without writing anything, or answers
//! point lookups the same way the generated accessors would.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

use crate::bundle::{AssetIndex, Bundle, collect_bundle};
use crate::codegen::Emitter;
use crate::config::Config;
use crate::log;
use crate::utils::plural_count;

/// One row of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry<'a> {
    pub path: &'a str,
    /// Generated identifier, absent for paths that are not bundled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'a str>,
    pub mime: &'static str,
    /// Size in bytes, absent for paths that are not bundled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
}

/// Execute list command
pub fn run_list(config: &Config, paths: &[String], json: bool) -> Result<()> {
    write_list(config, paths, json, &mut io::stdout().lock())
}

/// List into `out`. Only the table or JSON goes there; the summary is logged.
fn write_list(config: &Config, paths: &[String], json: bool, out: &mut impl Write) -> Result<()> {
    let settings = &config.bundle;
    let bundle = collect_bundle(&settings.web_dir, true)
        .with_context(|| format!("failed to collect assets from {}", settings.web_dir.display()))?;

    // Surface the same naming errors a real run would hit.
    Emitter::new(&bundle, settings).plan()?;

    let index = AssetIndex::new(&bundle);
    let entries = if paths.is_empty() {
        all_entries(&index, &bundle)
    } else {
        lookup_entries(&index, &bundle, paths)
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    write_table(&entries, out)?;
    if paths.is_empty() {
        if index.is_empty() {
            log!("list"; "no files under {}", bundle.root().display());
        } else {
            log!(
                "list";
                "{}, {}",
                plural_count(index.len(), "file"),
                plural_count(bundle.total_bytes(), "byte")
            );
        }
    }
    Ok(())
}

/// Every bundled asset, read back through the full lookup maps.
fn all_entries<'a>(index: &AssetIndex<'a>, bundle: &'a Bundle) -> Vec<ListEntry<'a>> {
    let files = index.files();
    let stored = index.paths();
    let mime_types = index.mime_types();

    bundle
        .iter()
        .filter_map(|asset| {
            let path = *stored.get(asset.relative_path())?;
            Some(ListEntry {
                path,
                symbol: Some(asset.symbolic_name()),
                mime: *mime_types.get(path)?,
                size: files.get(path).map(|bytes| bytes.len()),
            })
        })
        .collect()
}

/// Resolve each query through the index; misses keep the accessor fallbacks.
fn lookup_entries<'a>(
    index: &AssetIndex<'a>,
    bundle: &'a Bundle,
    paths: &'a [String],
) -> Vec<ListEntry<'a>> {
    paths
        .iter()
        .map(|path| {
            let symbol = bundle
                .iter()
                .find(|asset| asset.relative_path() == path.as_str())
                .map(|asset| asset.symbolic_name());
            ListEntry {
                path: path.as_str(),
                symbol,
                mime: index.mime_type(path),
                size: index.file(path).map(<[u8]>::len),
            }
        })
        .collect()
}

fn write_table(entries: &[ListEntry<'_>], out: &mut impl Write) -> io::Result<()> {
    let path_width = entries.iter().map(|e| e.path.len()).max().unwrap_or(0);
    let symbol_width = entries
        .iter()
        .filter_map(|e| e.symbol.map(str::len))
        .max()
        .unwrap_or(0)
        .max(1);

    for entry in entries {
        let size = entry
            .size
            .map_or_else(|| "not bundled".to_string(), |n| n.to_string());
        writeln!(
            out,
            "{:<path_width$}  {:<symbol_width$}  {:<24}  {}",
            entry.path,
            entry.symbol.unwrap_or("-"),
            entry.mime,
            size,
        )?;
    }
    Ok(())
}
