//! webembed - Embed a directory of web assets into generated source files.

mod bundle;
mod cli;
mod codegen;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli)?;

    match cli.resolved_command() {
        Commands::Bundle => cli::bundle::bundle_web(&config, cli.quiet).map(|_| ()),
        Commands::List { paths, json } => cli::list::run_list(&config, &paths, json),
    }
}
