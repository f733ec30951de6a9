//! `[search]` section configuration.
//!
//! Algolia DocSearch credentials, passed through unmodified to the external
//! search integration. Leaving the section out (or empty) disables search
//! and the rendering layer degrades to a no-search UI.
//!
//! # Example
//!
//! ```toml
//! [search]
//! app_id = "01H350K8AP"
//! api_key = "ef4d9c757bc56cd76df15626c6fc5b97"  # search-only key, safe to publish
//! index_name = "needle"
//! contextual_search = true
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Search-provider credentials. All three of `app_id`, `api_key` and
/// `index_name` must be given together; a partial set is a config error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Algolia application identifier.
    pub app_id: Option<String>,

    /// Search-only API key.
    pub api_key: Option<String>,

    /// Name of the index to query.
    pub index_name: Option<String>,

    /// Scope results to the current locale and version.
    pub contextual_search: bool,
}

pub struct SearchFields {
    pub app_id: FieldPath,
    pub api_key: FieldPath,
    pub index_name: FieldPath,
    pub contextual_search: FieldPath,
}

impl SearchConfig {
    pub const FIELDS: SearchFields = SearchFields {
        app_id: FieldPath::new("search.app_id"),
        api_key: FieldPath::new("search.api_key"),
        index_name: FieldPath::new("search.index_name"),
        contextual_search: FieldPath::new("search.contextual_search"),
    };

    /// True if no credential field is set (search disabled).
    pub fn is_empty(&self) -> bool {
        self.app_id.is_none() && self.api_key.is_none() && self.index_name.is_none()
    }

    /// True if every credential field is set.
    pub fn is_complete(&self) -> bool {
        self.app_id.is_some() && self.api_key.is_some() && self.index_name.is_some()
    }

    /// Validate search configuration.
    ///
    /// # Checks
    /// - credentials must be all-present or all-absent
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.is_empty() || self.is_complete() {
            return;
        }

        for (field, value) in [
            (Self::FIELDS.app_id, &self.app_id),
            (Self::FIELDS.api_key, &self.api_key),
            (Self::FIELDS.index_name, &self.index_name),
        ] {
            if value.is_none() {
                diag.error_with_hint(
                    field,
                    "search credentials are partially specified",
                    format!("set {field} or remove the [search] section entirely"),
                );
            }
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            api_key: None,
            index_name: None,
            contextual_search: true,
        }
    }
}
