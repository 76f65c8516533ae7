//! Declarations that make up a generated unit.
//!
//! A unit is assembled as an ordered list of [`Decl`] values and handed to a
//! [`Syntax`](super::Syntax) to be serialized once.

use crate::bundle::Asset;

/// One entry of the accessor block: the stored path and its symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry<'a> {
    pub path: &'a str,
    pub symbol: &'a str,
}

impl<'a> From<&'a Asset> for IndexEntry<'a> {
    fn from(asset: &'a Asset) -> Self {
        Self {
            path: asset.relative_path(),
            symbol: asset.symbolic_name(),
        }
    }
}

/// A single generated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl<'a> {
    /// Line comment.
    Comment(String),
    /// Byte array named after the asset.
    Bytes { name: &'a str, bytes: &'a [u8] },
    /// String constant.
    Str { name: String, value: &'a str },
    /// Reference to another generated unit by file name.
    Include(String),
    /// The five lookup accessors over every entry.
    Accessors(Vec<IndexEntry<'a>>),
}

impl<'a> Decl<'a> {
    /// A heading comment and the three declarations of one asset.
    pub fn for_asset(asset: &'a Asset) -> [Decl<'a>; 4] {
        [
            Decl::Comment(format!("Bundled file: {}", asset.relative_path())),
            Decl::Bytes {
                name: asset.symbolic_name(),
                bytes: asset.bytes(),
            },
            Decl::Str {
                name: asset.path_ident(),
                value: asset.relative_path(),
            },
            Decl::Str {
                name: asset.mime_ident(),
                value: asset.mime(),
            },
        ]
    }
}

/// What a unit holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind<'a> {
    /// Declarations of a single asset (split mode).
    Asset { source: &'a str },
    /// Accessors, plus every asset's declarations in combined mode.
    Index,
}

/// One generated output file before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit<'a> {
    /// File stem, without extension.
    pub stem: String,
    pub kind: UnitKind<'a>,
    pub decls: Vec<Decl<'a>>,
}

impl<'a> Unit<'a> {
    pub fn new(stem: impl Into<String>, kind: UnitKind<'a>) -> Self {
        Self {
            stem: stem.into(),
            kind,
            decls: Vec::new(),
        }
    }

    pub fn push(&mut self, decl: Decl<'a>) {
        self.decls.push(decl);
    }

    pub fn extend(&mut self, decls: impl IntoIterator<Item = Decl<'a>>) {
        self.decls.extend(decls);
    }

    /// Units referenced through [`Decl::Include`].
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.decls.iter().filter_map(|d| match d {
            Decl::Include(file) => Some(file.as_str()),
            _ => None,
        })
    }

    /// The accessor block, if this unit defines one.
    pub fn accessors(&self) -> Option<&[IndexEntry<'a>]> {
        self.decls.iter().find_map(|d| match d {
            Decl::Accessors(entries) => Some(entries.as_slice()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_asset_shapes() {
        let asset = Asset::new("js/app.js", b"x".to_vec());
        let decls = Decl::for_asset(&asset);
        let idents: Vec<&str> = decls
            .iter()
            .filter_map(|d| match d {
                Decl::Bytes { name, .. } => Some(*name),
                Decl::Str { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(idents, ["js_app_js", "js_app_js_path", "js_app_js_mime"]);
        assert_eq!(
            decls[3],
            Decl::Str {
                name: "js_app_js_mime".into(),
                value: "application/javascript",
            }
        );
    }

    #[test]
    fn test_unit_includes_and_accessors() {
        let asset = Asset::new("a.css", vec![]);
        let mut unit = Unit::new("web_bundle", UnitKind::Index);
        unit.push(Decl::Include("a_css.hpp".into()));
        unit.push(Decl::Accessors(vec![IndexEntry::from(&asset)]));

        assert_eq!(unit.includes().collect::<Vec<_>>(), ["a_css.hpp"]);
        assert_eq!(unit.accessors().unwrap()[0].symbol, "a_css");
    }
}
