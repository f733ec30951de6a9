//! `[docs]` section configuration.
//!
//! Versioned-docs options and the edit/translate URL bases consumed by the
//! edit-link policy.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! versioning = true
//! route_base_path = "docs"
//! breadcrumbs = true
//! sidebar_path = "sidebars.toml"
//! edit_url = "https://github.com/scottafk/needle-docs/edit/main"
//! translate_url = "https://crowdin.com/project/needle"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, util::validate_absolute_url};
use serde::{Deserialize, Serialize};

/// Docs plugin options.
///
/// `edit_url` is the source-repository edit base for default-locale pages;
/// leaving it out removes the "edit this page" affordance entirely.
/// `translate_url` is the translation-platform project base that
/// non-default locales link to instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Enable the versioned-docs UI (version dropdown, per-version dirs).
    pub versioning: bool,

    /// Route prefix docs pages are served under.
    pub route_base_path: String,

    /// Show breadcrumbs above page titles.
    pub breadcrumbs: bool,

    /// Sidebar declaration file, relative to the site root.
    pub sidebar_path: Option<String>,

    /// Source-repository edit base URL (e.g., ".../edit/main").
    pub edit_url: Option<String>,

    /// Translation-platform project base URL.
    pub translate_url: Option<String>,
}

pub struct DocsFields {
    pub versioning: FieldPath,
    pub route_base_path: FieldPath,
    pub breadcrumbs: FieldPath,
    pub sidebar_path: FieldPath,
    pub edit_url: FieldPath,
    pub translate_url: FieldPath,
}

impl DocsConfig {
    pub const FIELDS: DocsFields = DocsFields {
        versioning: FieldPath::new("docs.versioning"),
        route_base_path: FieldPath::new("docs.route_base_path"),
        breadcrumbs: FieldPath::new("docs.breadcrumbs"),
        sidebar_path: FieldPath::new("docs.sidebar_path"),
        edit_url: FieldPath::new("docs.edit_url"),
        translate_url: FieldPath::new("docs.translate_url"),
    };

    /// Validate docs configuration.
    ///
    /// # Checks
    /// - `edit_url` and `translate_url`, when set, must be absolute URLs
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.edit_url {
            validate_absolute_url(Self::FIELDS.edit_url, url, diag);
        }
        if let Some(url) = &self.translate_url {
            validate_absolute_url(Self::FIELDS.translate_url, url, diag);
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            versioning: false,
            route_base_path: "docs".into(),
            breadcrumbs: true,
            sidebar_path: None,
            edit_url: None,
            translate_url: None,
        }
    }
}
