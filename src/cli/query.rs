//! Edit-link query command.

use crate::config::DocsiteConfig;
use crate::editlink::EditLinkRequest;
use crate::log;
use crate::resolve::resolve;
use anyhow::{Result, bail};

/// Resolve the edit link for a single page and print it.
///
/// The branch kind goes to stderr via the logger, the URL alone to stdout.
pub fn run_edit_url(
    config: &DocsiteConfig,
    profile: Option<&str>,
    locale: &str,
    doc_path: &str,
    version_dir: &str,
) -> Result<()> {
    let effective = resolve(config, profile)?;

    let Some(policy) = effective.edit_link_policy() else {
        bail!("edit links are disabled (docs.edit_url is not set)");
    };

    let request = EditLinkRequest {
        locale: locale.to_string(),
        version_docs_dir: version_dir.to_string(),
        doc_path: doc_path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    };

    let result = policy.resolve(&request);
    log!("edit-url"; "{}", result.kind);
    println!("{}", result.url);

    Ok(())
}
