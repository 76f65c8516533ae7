//! Bundle emission: plan units, render them, write them.
//!
//! ```text
//! combined:  web_bundle.hpp            (every asset + accessors)
//! split:     index_html.hpp            (one asset)
//!            css_main_css.hpp          (one asset)
//!            web_bundle.hpp            (includes + accessors)
//! ```

use rustc_hash::FxHashMap;
use std::fs;
use std::path::PathBuf;

use super::target::{RenderContext, Syntax, syntax_for};
use super::{Decl, IndexEntry, Unit, UnitKind};
use crate::bundle::{Bundle, BundleError, Result};
use crate::config::{BundleConfig, EmitMode};
use crate::debug;

/// A serialized unit ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub file_name: String,
    pub content: String,
}

/// Outcome of a completed write.
#[derive(Debug, Clone)]
pub struct EmitReport {
    /// Every file written, index last.
    pub files: Vec<PathBuf>,
    /// Number of embedded assets.
    pub assets: usize,
}

impl EmitReport {
    pub fn index(&self) -> Option<&PathBuf> {
        self.files.last()
    }
}

/// Turns a [`Bundle`] into generated source for one target and mode.
pub struct Emitter<'a> {
    bundle: &'a Bundle,
    config: &'a BundleConfig,
    syntax: &'static dyn Syntax,
}

impl<'a> Emitter<'a> {
    pub fn new(bundle: &'a Bundle, config: &'a BundleConfig) -> Self {
        Self {
            bundle,
            config,
            syntax: syntax_for(config.target),
        }
    }

    /// File name of the index unit.
    pub fn index_file_name(&self) -> String {
        self.syntax.file_name(&self.config.index_name)
    }

    /// Reject names the target cannot express, and split-mode unit files
    /// that would land on the same path.
    fn validate(&self) -> Result<()> {
        for asset in self.bundle {
            for ident in asset.idents() {
                if self.syntax.is_reserved(&ident) {
                    return Err(BundleError::Reserved {
                        ident,
                        path: asset.relative_path().to_string(),
                        target: self.syntax.label(),
                    });
                }
            }
        }

        if self.config.mode == EmitMode::Split {
            self.check_unit_files()?;
        }
        Ok(())
    }

    /// Unit file names are compared case-insensitively, since macOS and
    /// Windows filesystems fold case.
    fn check_unit_files(&self) -> Result<()> {
        let index = format!("{} (index)", self.index_file_name());
        let mut seen: FxHashMap<String, String> = FxHashMap::default();
        seen.insert(self.config.index_name.to_ascii_lowercase(), index);

        for asset in self.bundle {
            let key = asset.symbolic_name().to_ascii_lowercase();
            if let Some(first) = seen.get(&key) {
                return Err(BundleError::Collision {
                    ident: self.syntax.file_name(asset.symbolic_name()),
                    first: first.clone(),
                    second: asset.relative_path().to_string(),
                });
            }
            seen.insert(key, asset.relative_path().to_string());
        }
        Ok(())
    }

    /// Assemble the declaration lists for every output unit, index last.
    pub fn plan(&self) -> Result<Vec<Unit<'a>>> {
        self.validate()?;

        let entries: Vec<_> = self.bundle.iter().map(IndexEntry::from).collect();
        let mut index = Unit::new(self.config.index_name.clone(), UnitKind::Index);
        let mut units = Vec::new();

        match self.config.mode {
            EmitMode::Combined => {
                for asset in self.bundle {
                    index.extend(Decl::for_asset(asset));
                }
            }
            EmitMode::Split => {
                for asset in self.bundle {
                    let mut unit = Unit::new(
                        asset.symbolic_name(),
                        UnitKind::Asset {
                            source: asset.relative_path(),
                        },
                    );
                    unit.extend(Decl::for_asset(asset));
                    index.push(Decl::Include(self.syntax.file_name(&unit.stem)));
                    units.push(unit);
                }
            }
        }

        index.push(Decl::Accessors(entries));
        units.push(index);
        Ok(units)
    }

    /// Plan and serialize every unit.
    pub fn render(&self) -> Result<Vec<Rendered>> {
        let ctx = RenderContext::new(&self.config.namespace, self.config.bytes_per_line);
        let units = self.plan()?;
        Ok(units
            .iter()
            .map(|unit| Rendered {
                file_name: self.syntax.file_name(&unit.stem),
                content: self.syntax.render(unit, &ctx),
            })
            .collect())
    }

    /// Render and write every unit into the output directory.
    ///
    /// The directory is created if needed; existing files are overwritten.
    pub fn write(&self) -> Result<EmitReport> {
        let rendered = self.render()?;
        let output_dir = &self.config.output_dir;

        fs::create_dir_all(output_dir)
            .map_err(|e| BundleError::CreateDir(output_dir.clone(), e))?;

        let mut files = Vec::with_capacity(rendered.len());
        for unit in rendered {
            let path = output_dir.join(&unit.file_name);
            fs::write(&path, unit.content).map_err(|e| BundleError::Write(path.clone(), e))?;
            debug!("emit"; "wrote {}", unit.file_name);
            files.push(path);
        }

        Ok(EmitReport {
            files,
            assets: self.bundle.len(),
        })
    }
}
