//! Asset root traversal.
//!
//! ```text
//! web/
//! ├── .gitkeep            -> (hidden, skipped)
//! ├── index.html          -> index.html
//! ├── .cache/
//! │   └── tmp.js          -> (hidden directory, skipped)
//! └── css/
//!     └── main.css        -> css/main.css
//! ```

use jwalk::WalkDir;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{BundleError, Result};
use super::path::{is_hidden, relative_path};
use super::{Asset, Bundle};
use crate::logger::ProgressLine;

/// A discovered file, before its content is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSource {
    pub path: PathBuf,
    pub relative_path: String,
}

/// Walk `root` and list every visible regular file.
///
/// Traversal errors abort the scan. Symlinks are not followed.
pub fn scan_assets(root: &Path) -> Result<Vec<AssetSource>> {
    if !root.is_dir() {
        return Err(BundleError::MissingRoot(root.to_path_buf()));
    }

    let mut sources = Vec::new();
    let walk = WalkDir::new(root)
        .sort(true)
        .skip_hidden(true)
        .follow_links(false);

    for entry in walk {
        let entry = entry.map_err(|e| BundleError::Walk(root.to_path_buf(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative_path = relative_path(root, &path)?;
        if relative_path.split('/').any(is_hidden) {
            continue;
        }

        sources.push(AssetSource {
            path,
            relative_path,
        });
    }

    Ok(sources)
}

/// Read every source into an [`Asset`].
///
/// Reads run in parallel; the output keeps the input order.
pub fn read_assets(sources: &[AssetSource], progress: Option<&ProgressLine>) -> Result<Vec<Asset>> {
    sources
        .par_iter()
        .map(|source| {
            let bytes =
                fs::read(&source.path).map_err(|e| BundleError::Read(source.path.clone(), e))?;
            if let Some(p) = progress {
                p.inc("read");
            }
            Ok(Asset::new(source.relative_path.clone(), bytes))
        })
        .collect()
}

/// Scan, read and validate the assets under `root`.
pub fn collect_bundle(root: &Path, quiet: bool) -> Result<Bundle> {
    let sources = scan_assets(root)?;
    crate::debug!("scan"; "found {} files under {}", sources.len(), root.display());

    let progress =
        (!quiet && !sources.is_empty()).then(|| ProgressLine::new(&[("read", sources.len())]));
    let assets = read_assets(&sources, progress.as_ref())?;
    if let Some(p) = progress {
        p.finish();
    }

    Bundle::new(root, assets)
}
