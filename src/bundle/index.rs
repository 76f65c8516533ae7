//! Lookup view over a bundle.
//!
//! Mirrors the accessors that the generated code exposes, so the same
//! lookups can be checked in-process (`list` command, tests).

use rustc_hash::FxHashMap;

use super::{Asset, Bundle, mime};

/// Read-only lookup surface over a [`Bundle`].
#[derive(Debug, Clone)]
pub struct AssetIndex<'a> {
    by_path: FxHashMap<&'a str, &'a Asset>,
}

impl<'a> AssetIndex<'a> {
    pub fn new(bundle: &'a Bundle) -> Self {
        let by_path = bundle
            .iter()
            .map(|asset| (asset.relative_path(), asset))
            .collect();
        Self { by_path }
    }

    /// Stored path -> bytes.
    pub fn files(&self) -> FxHashMap<&'a str, &'a [u8]> {
        self.by_path
            .iter()
            .map(|(path, asset)| (*path, asset.bytes()))
            .collect()
    }

    /// Stored path -> stored path.
    pub fn paths(&self) -> FxHashMap<&'a str, &'a str> {
        self.by_path
            .iter()
            .map(|(path, asset)| (*path, asset.relative_path()))
            .collect()
    }

    /// Stored path -> MIME type.
    pub fn mime_types(&self) -> FxHashMap<&'a str, &'static str> {
        self.by_path
            .iter()
            .map(|(path, asset)| (*path, asset.mime()))
            .collect()
    }

    /// Bytes for `path`, or `None` if it is not bundled.
    pub fn file(&self, path: &str) -> Option<&'a [u8]> {
        self.by_path.get(path).map(|asset| asset.bytes())
    }

    /// MIME type for `path`, or `application/octet-stream` if it is not bundled.
    pub fn mime_type(&self, path: &str) -> &'static str {
        self.by_path
            .get(path)
            .map_or(mime::types::OCTET_STREAM, |asset| asset.mime())
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> Bundle {
        Bundle::new(
            "web",
            vec![
                Asset::new("index.html", b"<html></html>".to_vec()),
                Asset::new("css/a.css", b"body {}".to_vec()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_point_lookups() {
        let bundle = bundle();
        let index = AssetIndex::new(&bundle);

        assert_eq!(index.file("css/a.css"), Some(&b"body {}"[..]));
        assert_eq!(index.file("missing.txt"), None);
        assert_eq!(index.mime_type("css/a.css"), mime::types::CSS);
        assert_eq!(index.mime_type("missing.txt"), mime::types::OCTET_STREAM);
    }

    #[test]
    fn test_maps_share_keys() {
        let bundle = bundle();
        let index = AssetIndex::new(&bundle);

        let files = index.files();
        let paths = index.paths();
        let mimes = index.mime_types();

        assert_eq!(index.len(), 2);
        for key in ["index.html", "css/a.css"] {
            assert!(files.contains_key(key));
            assert_eq!(paths[key], key);
            assert!(mimes.contains_key(key));
        }
        assert_eq!(mimes["index.html"], mime::types::HTML);
    }

    #[test]
    fn test_empty_bundle() {
        let bundle = Bundle::new("web", vec![]).unwrap();
        let index = AssetIndex::new(&bundle);
        assert!(index.is_empty());
        assert_eq!(index.mime_type("index.html"), mime::types::OCTET_STREAM);
    }
}
