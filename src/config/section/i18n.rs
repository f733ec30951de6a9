//! `[i18n]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "fr"]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Locale set and the canonical source-of-truth locale.
///
/// The default locale drives the edit-link decision: only pages in the
/// default locale link back to the source repository, every other locale
/// links to the translation platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Canonical locale, must be a member of `locales`.
    pub default_locale: String,

    /// Ordered list of locale codes the site is published in.
    pub locales: Vec<String>,
}

pub struct I18nFields {
    pub default_locale: FieldPath,
    pub locales: FieldPath,
}

impl I18nConfig {
    pub const FIELDS: I18nFields = I18nFields {
        default_locale: FieldPath::new("i18n.default_locale"),
        locales: FieldPath::new("i18n.locales"),
    };

    /// Validate locale configuration.
    ///
    /// # Checks
    /// - `locales` must not be empty
    /// - locale codes must be unique
    /// - `default_locale` must be a member of `locales`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error(Self::FIELDS.locales, "locale list must not be empty");
            return;
        }

        let mut seen = FxHashSet::default();
        for code in &self.locales {
            if !seen.insert(code.as_str()) {
                diag.error(
                    Self::FIELDS.locales,
                    format!("duplicate locale code \"{code}\""),
                );
            }
        }

        if !self.locales.iter().any(|l| l == &self.default_locale) {
            diag.error_with_hint(
                Self::FIELDS.default_locale,
                format!(
                    "default locale \"{}\" is not a member of {}",
                    self.default_locale,
                    Self::FIELDS.locales
                ),
                format!("add \"{}\" to the locale list", self.default_locale),
            );
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}
