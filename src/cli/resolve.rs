//! Effective-config output command.

use crate::config::DocsiteConfig;
use crate::resolve::resolve;
use anyhow::Result;

/// Resolve the descriptor and print the effective config as JSON.
///
/// JSON goes to stdout so it can be piped into the renderer's build
/// tooling; logs stay on stderr.
pub fn run_resolve(config: &DocsiteConfig, profile: Option<&str>, pretty: bool) -> Result<()> {
    let effective = resolve(config, profile)?;

    let json = if pretty {
        serde_json::to_string_pretty(&effective)?
    } else {
        serde_json::to_string(&effective)?
    };
    println!("{json}");

    Ok(())
}
