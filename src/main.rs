//! docsite - configuration resolver for multi-locale documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod editlink;
mod logger;
mod resolve;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::DocsiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // Init runs before any config file exists
    if let Commands::Init { dir } = &cli.command {
        return cli::init::init_site(dir.as_deref());
    }

    let config = DocsiteConfig::load(&cli.config)?;
    debug!("config"; "loaded {}", config.config_path.display());

    match &cli.command {
        Commands::Check { profile } => cli::check::run_check(&config, profile.as_deref()),
        Commands::Resolve { profile, pretty } => {
            cli::resolve::run_resolve(&config, profile.as_deref(), *pretty)
        }
        Commands::EditUrl {
            profile,
            locale,
            doc_path,
            version_dir,
        } => cli::query::run_edit_url(
            &config,
            profile.as_deref(),
            locale,
            doc_path,
            version_dir,
        ),
        // Handled above
        Commands::Init { .. } => Ok(()),
    }
}
