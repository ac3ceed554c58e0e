//! digest-publish - commit and push generated digest artifacts.

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, publish::publish, status::show_status};
use config::PublishConfig;
use utils::date::DateTimeUtc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = PublishConfig::load(&cli)?;

    match &cli.command {
        Commands::Publish { dry_run, .. } => publish(&config, *dry_run).map(|_| ()),
        Commands::Status { .. } => show_status(&config).map(|_| ()),
        Commands::Message => {
            println!("{}", config.commit.message(DateTimeUtc::now()));
            Ok(())
        }
    }
}
