//! `[bundle]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [bundle]
//! web_dir = "web"                             # asset root
//! output_dir = "include/webembed/web/bundle"  # generated files go here
//! namespace = "webembed"                      # `a::b` for nested scopes
//! mode = "combined"                           # combined | split
//! target = "cpp"                              # cpp | rust
//! index_name = "web_bundle"                   # index file stem
//! bytes_per_line = 12                         # byte literals per line
//! ```

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

use super::{ConfigDiagnostics, FieldPath};
use crate::codegen::syntax_for;

static RE_NAMESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
});

static RE_FILE_STEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").unwrap());

/// How generated declarations are partitioned into files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmitMode {
    /// One file holding every asset and the accessors.
    #[default]
    Combined,
    /// One file per asset plus an index file with the accessors.
    Split,
}

/// Language of the generated source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// C++17 headers.
    #[default]
    Cpp,
    /// Rust source for `include!`.
    Rust,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Directory scanned for assets.
    pub web_dir: PathBuf,

    /// Directory receiving generated files (created if missing).
    pub output_dir: PathBuf,

    /// Enclosing namespace; `::` separates nested scopes.
    pub namespace: String,

    pub mode: EmitMode,

    pub target: Target,

    /// Stem of the index file (`web_bundle` -> `web_bundle.hpp`).
    pub index_name: String,

    /// Byte literals per line in generated arrays.
    pub bytes_per_line: usize,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            web_dir: "web".into(),
            output_dir: "include/webembed/web/bundle".into(),
            namespace: "webembed".into(),
            mode: EmitMode::default(),
            target: Target::default(),
            index_name: "web_bundle".into(),
            bytes_per_line: 12,
        }
    }
}

/// Field paths of `[bundle]`, for diagnostics.
pub struct BundleConfigFields {
    pub web_dir: FieldPath,
    pub output_dir: FieldPath,
    pub namespace: FieldPath,
    pub index_name: FieldPath,
    pub bytes_per_line: FieldPath,
}

impl BundleConfig {
    pub const FIELDS: BundleConfigFields = BundleConfigFields {
        web_dir: FieldPath::new("bundle.web_dir"),
        output_dir: FieldPath::new("bundle.output_dir"),
        namespace: FieldPath::new("bundle.namespace"),
        index_name: FieldPath::new("bundle.index_name"),
        bytes_per_line: FieldPath::new("bundle.bytes_per_line"),
    };

    /// Validate the section, collecting every problem into `diag`.
    ///
    /// Paths are expected to be normalized already.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.validate_namespace(diag);

        if !RE_FILE_STEM.is_match(&self.index_name) {
            diag.error_with_hint(
                Self::FIELDS.index_name,
                format!("`{}` is not a valid file stem", self.index_name),
                "use letters, digits, `_`, `-` or `.`, without path separators",
            );
        }

        if self.bytes_per_line == 0 {
            diag.error(Self::FIELDS.bytes_per_line, "must be at least 1");
        }

        if self.output_dir.starts_with(&self.web_dir) {
            diag.error_with_hint(
                Self::FIELDS.output_dir,
                format!(
                    "`{}` is inside {} `{}`",
                    self.output_dir.display(),
                    Self::FIELDS.web_dir,
                    self.web_dir.display()
                ),
                "generated files would be embedded on the next run",
            );
        }
    }

    fn validate_namespace(&self, diag: &mut ConfigDiagnostics) {
        if !RE_NAMESPACE.is_match(&self.namespace) {
            diag.error_with_hint(
                Self::FIELDS.namespace,
                format!("`{}` is not a valid namespace", self.namespace),
                "use identifiers separated by `::`, e.g. `app::web`",
            );
            return;
        }

        let syntax = syntax_for(self.target);
        for segment in self.namespace.split("::") {
            if syntax.is_reserved(segment) {
                diag.error(
                    Self::FIELDS.namespace,
                    format!("`{segment}` is reserved in {} output", syntax.label()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(config: &BundleConfig) -> Vec<&'static str> {
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag.errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = BundleConfig::default();
        assert_eq!(config.web_dir, PathBuf::from("web"));
        assert_eq!(config.output_dir, PathBuf::from("include/webembed/web/bundle"));
        assert_eq!(config.namespace, "webembed");
        assert_eq!(config.mode, EmitMode::Combined);
        assert_eq!(config.target, Target::Cpp);
        assert_eq!(config.index_name, "web_bundle");
        assert_eq!(config.bytes_per_line, 12);
        assert!(errors(&config).is_empty());
    }

    #[test]
    fn test_namespace_validation() {
        let mut config = BundleConfig::default();

        config.namespace = "acme::web".into();
        assert!(errors(&config).is_empty());

        for bad in ["", "1abc", "a::", "a:b", "a-b", "a::b::"] {
            config.namespace = bad.into();
            assert_eq!(errors(&config), ["bundle.namespace"], "{bad:?}");
        }

        config.namespace = "app::namespace".into();
        assert_eq!(errors(&config), ["bundle.namespace"]);

        config.target = Target::Rust;
        config.namespace = "app::mod".into();
        assert_eq!(errors(&config), ["bundle.namespace"]);
    }

    #[test]
    fn test_index_name_validation() {
        let mut config = BundleConfig::default();
        config.index_name = "assets-index".into();
        assert!(errors(&config).is_empty());

        config.index_name = "../escape".into();
        assert_eq!(errors(&config), ["bundle.index_name"]);
    }

    #[test]
    fn test_bytes_per_line_validation() {
        let config = BundleConfig {
            bytes_per_line: 0,
            ..BundleConfig::default()
        };
        assert_eq!(errors(&config), ["bundle.bytes_per_line"]);
    }

    #[test]
    fn test_output_inside_web_dir() {
        let config = BundleConfig {
            web_dir: "/site/web".into(),
            output_dir: "/site/web/generated".into(),
            ..BundleConfig::default()
        };
        assert_eq!(errors(&config), ["bundle.output_dir"]);
    }

    #[test]
    fn test_mode_and_target_parse_lowercase() {
        let config: BundleConfig = toml::from_str("mode = \"split\"\ntarget = \"rust\"").unwrap();
        assert_eq!(config.mode, EmitMode::Split);
        assert_eq!(config.target, Target::Rust);
    }
}
