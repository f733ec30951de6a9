//! `[profile.<name>]` section configuration.
//!
//! A profile is a named set of overrides applied on top of the base
//! descriptor before validation: locale list, versioning, search wiring
//! and edit-URL bases. This replaces maintaining near-duplicate config
//! files per deployment.
//!
//! # Example
//!
//! ```toml
//! [profile.translated]
//! locales = ["en", "fr"]
//! versioning = true
//! translate_url = "https://crowdin.com/project/needle"
//!
//! [profile.staging]
//! search = false
//! ```

use crate::config::section::SearchConfig;
use serde::{Deserialize, Serialize};

/// Per-profile overrides. Every field is optional; unset fields keep the
/// base descriptor's value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Replacement locale list.
    pub locales: Option<Vec<String>>,

    /// Replacement default locale.
    pub default_locale: Option<String>,

    /// Versioned-docs toggle.
    pub versioning: Option<bool>,

    /// Search override: full credentials, or `false` to force-disable.
    pub search: Option<SearchOverride>,

    /// Replacement source-repository edit base.
    pub edit_url: Option<String>,

    /// Replacement translation-platform base.
    pub translate_url: Option<String>,
}

/// Either a replacement `[search]` table or a bare boolean toggle.
///
/// `search = false` force-disables search for the profile; `search = true`
/// keeps the base credentials as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchOverride {
    Toggle(bool),
    Credentials(SearchConfig),
}
