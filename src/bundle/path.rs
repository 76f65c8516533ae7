//! Relative path and symbolic name derivation.

use std::path::{Component, Path};

use super::error::{BundleError, Result};

/// Path of `path` relative to `root`, joined with `/` on every platform.
///
/// ```text
/// root = web/, path = web/css/main.css  ->  "css/main.css"
/// ```
pub fn relative_path(root: &Path, path: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(root)
        .map_err(|_| BundleError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;

    let mut parts = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .ok_or_else(|| BundleError::NonUtf8Path(path.to_path_buf()))?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}

/// Identifier derived from a relative path.
///
/// Every char outside `[A-Za-z0-9]` becomes `_`, and a leading digit gets a
/// `_` prefix, so the result always matches `[_A-Za-z][_A-Za-z0-9]*`.
///
/// # Examples
///
/// - `css/main-v2.css` -> `css_main_v2_css`
/// - `3d/model.json` -> `_3d_model_json`
pub fn symbolic_name(relative_path: &str) -> String {
    let mut name: String = relative_path
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

/// Whether a file or directory name is hidden (dot-prefixed).
#[inline]
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
