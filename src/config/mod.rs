//! Site descriptor management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── i18n       # [i18n]
//! │   ├── links      # [links]
//! │   ├── search     # [search]
//! │   ├── docs       # [docs]
//! │   ├── navbar     # [navbar]
//! │   ├── footer     # [footer]
//! │   └── profile    # [profile.<name>]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # DocsiteConfig (this file)
//! ```
//!
//! The descriptor is parsed here; validation and defaulting happen in
//! [`crate::resolve`], which turns a `DocsiteConfig` into the immutable
//! effective configuration.

pub mod section;
pub mod types;
pub mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    DocsConfig, FooterConfig, I18nConfig, LinkPolicy, LinksConfig, NavbarConfig, ProfileConfig,
    SearchConfig, SearchOverride, SiteConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use anyhow::Result;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root site descriptor representing docsite.toml.
///
/// This is the raw declaration as the user wrote it. Optional fields stay
/// optional here; [`crate::resolve::resolve`] validates the descriptor and
/// fills every default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site metadata
    pub site: SiteConfig,

    /// Locale set and default locale
    pub i18n: I18nConfig,

    /// Broken-link policies
    pub links: LinksConfig,

    /// Search-provider credentials
    pub search: SearchConfig,

    /// Versioned docs and edit-URL wiring
    pub docs: DocsConfig,

    /// Navigation bar structure
    pub navbar: NavbarConfig,

    /// Footer structure
    pub footer: FooterConfig,

    /// Named override sets
    pub profile: FxHashMap<String, ProfileConfig>,
}

impl DocsiteConfig {
    /// Load the descriptor, searching upward from cwd when `config_name`
    /// is relative.
    pub fn load(config_name: &Path) -> Result<Self> {
        let config_path = match find_config_file(config_name) {
            Some(path) => path,
            None => {
                return Err(ConfigError::Validation(format!(
                    "config file '{}' not found. Run 'docsite init' to create one.",
                    config_name.display()
                ))
                .into());
            }
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        Ok(config)
    }

    /// Parse descriptor from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load descriptor from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> DocsiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\nurl = \"https://example.github.io\"\n{extra}"
    );
    let (parsed, ignored) = DocsiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
