//! Descriptor validation command.

use crate::config::DocsiteConfig;
use crate::log;
use crate::resolve::resolve;
use anyhow::Result;

/// Validate the descriptor and report what the effective config enables.
///
/// Validation failures propagate as collected diagnostics; the process
/// exits non-zero before any consumer sees a partial configuration.
pub fn run_check(config: &DocsiteConfig, profile: Option<&str>) -> Result<()> {
    let effective = resolve(config, profile)?;

    if let Some(name) = profile {
        log!("check"; "profile \"{}\" applied", name);
    }

    let locales = effective.locales().len();
    log!(
        "check";
        "\"{}\" ok: {} locale{} (default \"{}\")",
        effective.site().title,
        locales,
        if locales == 1 { "" } else { "s" },
        effective.default_locale()
    );
    log!(
        "check";
        "search {}, versioning {}, edit links {}",
        if effective.search().is_some() { "enabled" } else { "disabled" },
        if effective.docs().versioning { "enabled" } else { "disabled" },
        if effective.docs().edit_links.is_some() { "enabled" } else { "disabled" }
    );

    Ok(())
}
