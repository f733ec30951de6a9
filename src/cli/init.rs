//! Starter configuration generation.

use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "docsite.toml";

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# docsite configuration file (v{})

[site]
title = "My Docs"
tagline = ""
# Production URL of the site
url = "https://example.github.io"
# Pathname prefix the site is served under
base_url = "/"
organization = "my-org"
project = "my-project"
deployment_branch = "gh-pages"

[i18n]
default_locale = "en"
locales = ["en"]

[links]
# What to do on broken references: "throw", "warn" or "ignore"
on_broken_links = "warn"
on_broken_markdown_links = "warn"

# Uncomment to enable search (all three credentials are required together)
# [search]
# app_id = ""
# api_key = ""
# index_name = ""

[docs]
versioning = false
route_base_path = "docs"
# Uncomment to enable "edit this page" links
# edit_url = "https://github.com/my-org/my-project/edit/main"
# translate_url = "https://crowdin.com/project/my-project"

[navbar]
title = ""

[[navbar.items]]
label = "GitHub"
href = "https://github.com/my-org/my-project"
position = "right"

[footer]
style = "dark"
copyright = ""
"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Write a starter config file into `dir` (current directory by default).
///
/// Refuses to overwrite an existing config.
pub fn init_site(dir: Option<&Path>) -> Result<()> {
    let target = dir.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(target)
        .with_context(|| format!("failed to create directory {}", target.display()))?;

    let path = target.join(CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists, not overwriting", path.display());
    }

    fs::write(&path, generate_config_template())
        .with_context(|| format!("failed to write {}", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocsiteConfig;
    use crate::resolve::resolve;

    #[test]
    fn test_template_has_no_unknown_fields() {
        let (_, ignored) = DocsiteConfig::parse_with_ignored(&generate_config_template()).unwrap();
        assert!(
            ignored.is_empty(),
            "template has unknown fields: {:?}",
            ignored
        );
    }

    #[test]
    fn test_template_resolves() {
        let (config, _) = DocsiteConfig::parse_with_ignored(&generate_config_template()).unwrap();
        let effective = resolve(&config, None).unwrap();
        assert!(effective.search().is_none());
        assert!(effective.edit_link_policy().is_none());
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();

        init_site(Some(dir.path())).unwrap();
        assert!(dir.path().join(CONFIG_FILE).exists());

        // Second run must refuse
        assert!(init_site(Some(dir.path())).is_err());
    }
}
