//! Command-line interface module.

mod args;
pub mod bundle;
pub mod list;

pub use args::{BundleArgs, Cli, Commands, DEFAULT_CONFIG};
