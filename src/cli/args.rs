//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// docsite configuration resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (default: docsite.toml)
    #[arg(short = 'C', long, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the site descriptor
    #[command(visible_alias = "c")]
    Check {
        /// Profile to resolve with
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Print the resolved effective configuration as JSON
    #[command(visible_alias = "r")]
    Resolve {
        /// Profile to resolve with
        #[arg(short, long)]
        profile: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Resolve the edit link for one documentation page
    #[command(visible_alias = "e")]
    EditUrl {
        /// Profile to resolve with
        #[arg(short, long)]
        profile: Option<String>,

        /// Locale the page is rendered in
        #[arg(short, long)]
        locale: String,

        /// Slash-separated document path (e.g., "guide/intro")
        #[arg(short, long)]
        doc_path: String,

        /// Versioned-docs directory the page lives under
        #[arg(long, default_value = "docs")]
        version_dir: String,
    },

    /// Write a starter docsite.toml
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },
}
