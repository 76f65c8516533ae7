//! Project configuration from `webembed.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section.rs     # [bundle] section, EmitMode, Target
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # Config (this file)
//! ```
//!
//! The config file is optional. Without one, defaults apply and relative
//! paths resolve against the current directory. Command-line flags always
//! win over the file.

mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BundleConfig, EmitMode, Target};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BundleArgs, Cli, DEFAULT_CONFIG},
    debug, log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing webembed.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Bundle settings
    #[serde(default)]
    pub bundle: BundleConfig,
}

impl Config {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// [`Config::load`] with an explicit starting directory.
    ///
    /// A `-C` path must exist; only the implicit `webembed.toml` may be absent.
    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let name = cli.config.as_deref().unwrap_or(Path::new(DEFAULT_CONFIG));
        let config_path = find_config_file(name, cwd);

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None if cli.config.is_some() => {
                bail!("Config file '{}' not found", name.display());
            }
            None => Self::default(),
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(cwd)
            .to_path_buf();

        config.config_path = config_path.as_deref().map(normalize_path);
        match &config.config_path {
            Some(path) => debug!("config"; "using {}", path.display()),
            None => debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG),
        }

        config.apply_bundle_args(&cli.bundle);
        config.normalize_paths(&root);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply `[bundle]` overrides from CLI.
    fn apply_bundle_args(&mut self, args: &BundleArgs) {
        let bundle = &mut self.bundle;
        Self::update_option(&mut bundle.web_dir, args.web_dir.as_ref());
        Self::update_option(&mut bundle.output_dir, args.output_dir.as_ref());
        Self::update_option(&mut bundle.namespace, args.namespace.as_ref());
        Self::update_option(&mut bundle.mode, args.mode.as_ref());
        Self::update_option(&mut bundle.target, args.target.as_ref());
        Self::update_option(&mut bundle.index_name, args.index_name.as_ref());
        Self::update_option(&mut bundle.bytes_per_line, args.bytes_per_line.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.bundle.web_dir = normalize_path(&root.join(&self.bundle.web_dir));
        self.bundle.output_dir = normalize_path(&root.join(&self.bundle.output_dir));
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.bundle.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================
