//! Asset and Bundle types.

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use super::error::{BundleError, Result};
use super::{mime, path};

/// Suffixes appended to a symbolic name for its companion declarations.
pub const PATH_SUFFIX: &str = "_path";
pub const MIME_SUFFIX: &str = "_mime";

/// One static file discovered under the asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    relative_path: String,
    symbolic_name: String,
    bytes: Vec<u8>,
    mime: &'static str,
}

impl Asset {
    /// Build an asset from its root-relative path and content.
    pub fn new(relative_path: impl Into<String>, bytes: Vec<u8>) -> Self {
        let relative_path = relative_path.into();
        let symbolic_name = path::symbolic_name(&relative_path);
        let mime = mime::from_path(Path::new(&relative_path));
        Self {
            relative_path,
            symbolic_name,
            bytes,
            mime,
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn symbolic_name(&self) -> &str {
        &self.symbolic_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Name of the path string declaration (`{name}_path`).
    pub fn path_ident(&self) -> String {
        format!("{}{PATH_SUFFIX}", self.symbolic_name)
    }

    /// Name of the MIME string declaration (`{name}_mime`).
    pub fn mime_ident(&self) -> String {
        format!("{}{MIME_SUFFIX}", self.symbolic_name)
    }

    /// Every identifier this asset contributes to the generated output.
    pub fn idents(&self) -> [String; 3] {
        [
            self.symbolic_name.clone(),
            self.path_ident(),
            self.mime_ident(),
        ]
    }
}

/// All assets of one run, sorted by relative path.
///
/// Construction fails if two assets would emit the same identifier.
#[derive(Debug, Clone)]
pub struct Bundle {
    root: PathBuf,
    assets: Vec<Asset>,
}

impl Bundle {
    /// Build a bundle, sorting assets and rejecting identifier collisions.
    pub fn new(root: impl Into<PathBuf>, mut assets: Vec<Asset>) -> Result<Self> {
        assets.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        check_collisions(&assets)?;
        Ok(Self {
            root: root.into(),
            assets,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }

    /// Total embedded byte count.
    pub fn total_bytes(&self) -> usize {
        self.assets.iter().map(|a| a.bytes.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Bundle {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

/// Reject two assets that derive the same identifier.
///
/// `{name}`, `{name}_path` and `{name}_mime` are all checked, so `a` and
/// `a.path` collide as well as `a-b.css` and `a.b.css`.
fn check_collisions(assets: &[Asset]) -> Result<()> {
    let mut seen: FxHashMap<String, &str> = FxHashMap::default();

    for asset in assets {
        for ident in asset.idents() {
            if let Some(first) = seen.get(ident.as_str()) {
                return Err(BundleError::Collision {
                    ident,
                    first: (*first).to_string(),
                    second: asset.relative_path.clone(),
                });
            }
            seen.insert(ident, &asset.relative_path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_derived_fields() {
        let asset = Asset::new("css/main-v2.css", b"body{}".to_vec());
        assert_eq!(asset.symbolic_name(), "css_main_v2_css");
        assert_eq!(asset.path_ident(), "css_main_v2_css_path");
        assert_eq!(asset.mime_ident(), "css_main_v2_css_mime");
        assert_eq!(asset.mime(), mime::types::CSS);
        assert_eq!(asset.bytes(), b"body{}");
    }

    #[test]
    fn test_bundle_sorted_by_path() {
        let bundle = Bundle::new(
            "web",
            vec![
                Asset::new("z.js", vec![]),
                Asset::new("css/a.css", vec![]),
                Asset::new("index.html", vec![]),
            ],
        )
        .unwrap();

        let paths: Vec<_> = bundle.iter().map(Asset::relative_path).collect();
        assert_eq!(paths, ["css/a.css", "index.html", "z.js"]);
    }

    #[test]
    fn test_collision_detected() {
        let err = Bundle::new(
            "web",
            vec![
                Asset::new("a.b.css", vec![1]),
                Asset::new("a-b.css", vec![2]),
            ],
        )
        .unwrap_err();

        match err {
            BundleError::Collision {
                ident,
                first,
                second,
            } => {
                assert_eq!(ident, "a_b_css");
                assert_eq!(first, "a-b.css");
                assert_eq!(second, "a.b.css");
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn test_collision_with_companion_ident() {
        // `x` emits `x_path`, which is also the symbolic name of `x.path`
        let err = Bundle::new(
            "web",
            vec![Asset::new("x", vec![]), Asset::new("x.path", vec![])],
        )
        .unwrap_err();
        assert!(matches!(err, BundleError::Collision { ident, .. } if ident == "x_path"));
    }

    #[test]
    fn test_total_bytes() {
        let bundle = Bundle::new(
            "web",
            vec![Asset::new("a", vec![0; 3]), Asset::new("b", vec![0; 4])],
        )
        .unwrap();
        assert_eq!(bundle.total_bytes(), 7);
        assert_eq!(bundle.len(), 2);
        assert!(!bundle.is_empty());
    }
}
