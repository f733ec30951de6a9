//! `[site]` section configuration.
//!
//! Core site metadata: identity, production URL, and the source-repository
//! coordinates used for deployment.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Needle"
//! tagline = "Dinosaurs are cool"
//! url = "https://scottafk.github.io"
//! base_url = "/needle-docs/"
//! organization = "IBAX-io"
//! project = "needle"
//! deployment_branch = "gh-pages"
//! favicon = "img/favicon.ico"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, util::validate_absolute_url};
use serde::{Deserialize, Serialize};

/// Site metadata handed through to the renderer and deployment tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the browser tab and navbar fallback.
    pub title: String,

    /// Tagline shown on the landing page.
    pub tagline: String,

    /// Production URL of the site (e.g., "https://example.github.io").
    pub url: Option<String>,

    /// Pathname prefix under which the site is served (e.g., "/needle-docs/").
    pub base_url: String,

    /// Source-hosting organization or user name.
    pub organization: String,

    /// Source repository name.
    pub project: String,

    /// Branch the rendered site is deployed to.
    pub deployment_branch: String,

    /// Favicon path, relative to the static assets directory.
    pub favicon: Option<String>,
}

pub struct SiteFields {
    pub title: FieldPath,
    pub tagline: FieldPath,
    pub url: FieldPath,
    pub base_url: FieldPath,
    pub organization: FieldPath,
    pub project: FieldPath,
    pub deployment_branch: FieldPath,
    pub favicon: FieldPath,
}

impl SiteConfig {
    pub const FIELDS: SiteFields = SiteFields {
        title: FieldPath::new("site.title"),
        tagline: FieldPath::new("site.tagline"),
        url: FieldPath::new("site.url"),
        base_url: FieldPath::new("site.base_url"),
        organization: FieldPath::new("site.organization"),
        project: FieldPath::new("site.project"),
        deployment_branch: FieldPath::new("site.deployment_branch"),
        favicon: FieldPath::new("site.favicon"),
    };

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` must be set
    /// - `url` must be set and be an absolute http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }

        match &self.url {
            Some(url) => validate_absolute_url(Self::FIELDS.url, url, diag),
            None => diag.error_with_hint(
                Self::FIELDS.url,
                "production URL is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            ),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            base_url: "/".into(),
            organization: String::new(),
            project: String::new(),
            deployment_branch: "gh-pages".into(),
            favicon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.site.deployment_branch, "gh-pages");
        assert!(config.site.favicon.is_none());
    }

    #[test]
    fn test_site_config_full() {
        let config = test_parse_config(
            r#"tagline = "Dinosaurs are cool"
base_url = "/needle-docs/"
organization = "IBAX-io"
project = "needle"
deployment_branch = "pages"
favicon = "img/favicon.ico""#,
        );

        assert_eq!(config.site.tagline, "Dinosaurs are cool");
        assert_eq!(config.site.base_url, "/needle-docs/");
        assert_eq!(config.site.organization, "IBAX-io");
        assert_eq!(config.site.project, "needle");
        assert_eq!(config.site.deployment_branch, "pages");
        assert_eq!(config.site.favicon.as_deref(), Some("img/favicon.ico"));
    }

    #[test]
    fn test_site_validate_missing_title() {
        let mut config = test_parse_config("");
        config.site.title.clear();

        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_site_validate_missing_url() {
        let mut config = test_parse_config("");
        config.site.url = None;

        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.url")
        );
    }
}
