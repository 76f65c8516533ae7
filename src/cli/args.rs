//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{EmitMode, Target};

/// Embed a directory of static web assets into generated source files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path [default: webembed.toml, searched upward, optional]
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hide the progress line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub bundle: BundleArgs,

    /// subcommands (default: bundle)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Default config file name, searched upward from the current directory.
pub const DEFAULT_CONFIG: &str = "webembed.toml";

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the bundle (the default)
    #[command(visible_alias = "b")]
    Bundle,

    /// Show the assets that would be bundled, or look up single paths
    #[command(visible_alias = "l")]
    List {
        /// Stored paths to look up (e.g. `css/main.css`). Lists everything if omitted.
        #[arg(value_name = "PATH")]
        paths: Vec<String>,

        /// Print JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },
}

/// Overrides for the `[bundle]` config section
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BundleArgs {
    /// Directory containing web files
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub web_dir: Option<PathBuf>,

    /// Output directory for generated files
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Namespace to wrap declarations in (`a::b` for nested)
    #[arg(short, long, global = true)]
    pub namespace: Option<String>,

    /// Emit one combined file or one file per asset
    #[arg(short, long, global = true, value_enum)]
    pub mode: Option<EmitMode>,

    /// Language of the generated source
    #[arg(short, long, global = true, value_enum)]
    pub target: Option<Target>,

    /// File stem of the index file
    #[arg(long, global = true)]
    pub index_name: Option<String>,

    /// Byte literals per line in generated arrays
    #[arg(long, global = true)]
    pub bytes_per_line: Option<usize>,
}

impl Cli {
    /// Subcommand to run, `bundle` when none was given.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Bundle)
    }
}
