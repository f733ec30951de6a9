//! `[links]` section configuration.
//!
//! Broken-link policies applied by the renderer when a page references a
//! route or Markdown target that does not exist.
//!
//! # Example
//!
//! ```toml
//! [links]
//! on_broken_links = "throw"
//! on_broken_markdown_links = "warn"
//! ```

use serde::{Deserialize, Serialize};

/// What the renderer should do when it encounters a broken reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Abort the build.
    Throw,

    /// Log and continue.
    #[default]
    Warn,

    /// Silently continue.
    Ignore,
}

impl LinkPolicy {
    /// Returns true if the policy aborts the build.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Throw)
    }
}

/// Broken-link handling for page routes and Markdown references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Policy for broken page links.
    pub on_broken_links: LinkPolicy,

    /// Policy for broken Markdown links.
    pub on_broken_markdown_links: LinkPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_links_defaults_to_warn() {
        let config = test_parse_config("");
        assert_eq!(config.links.on_broken_links, LinkPolicy::Warn);
        assert_eq!(config.links.on_broken_markdown_links, LinkPolicy::Warn);
    }

    #[test]
    fn test_links_policies() {
        let config = test_parse_config(
            "[links]\non_broken_links = \"throw\"\non_broken_markdown_links = \"ignore\"",
        );
        assert_eq!(config.links.on_broken_links, LinkPolicy::Throw);
        assert!(config.links.on_broken_links.is_fatal());
        assert_eq!(config.links.on_broken_markdown_links, LinkPolicy::Ignore);
        assert!(!config.links.on_broken_markdown_links.is_fatal());
    }
}
