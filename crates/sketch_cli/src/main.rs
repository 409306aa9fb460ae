//! sketchkit - command-line front end for the sketchkit layout crates
//!
//! Every subcommand prints its result as JSON on stdout; logs go to stderr.

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::SketchConfig;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SketchConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration");

    if matches!(cli.command, Command::Config) {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let output = commands::run(&cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
