//! `[navbar]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [navbar]
//! title = "Needle"
//! logo = { src = "img/logo.svg", alt = "Needle Logo" }
//!
//! [[navbar.items]]
//! kind = "doc-sidebar"
//! sidebar_id = "tutorialSidebar"
//! position = "left"
//! label = "Tutorial"
//!
//! [[navbar.items]]
//! kind = "version-dropdown"
//! position = "right"
//!
//! [[navbar.items]]
//! label = "GitHub"
//! href = "https://github.com/IBAX-io/needle"
//! position = "right"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Navbar structure: brand title/logo plus an ordered item list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Brand title; falls back to `site.title` when empty.
    pub title: String,

    /// Brand logo.
    pub logo: Option<LogoConfig>,

    /// Ordered navbar entries, left group then right group.
    pub items: Vec<NavbarItemConfig>,
}

/// Navbar brand logo.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Image path, relative to the static assets directory.
    pub src: String,

    /// Alt text.
    pub alt: String,
}

/// What a navbar entry renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavbarItemKind {
    /// Plain link (internal `to` or external `href`).
    #[default]
    Link,

    /// Entry point into a docs sidebar.
    DocSidebar,

    /// Search box.
    Search,

    /// Locale switcher dropdown.
    LocaleDropdown,

    /// Docs version switcher dropdown.
    VersionDropdown,
}

/// Which side of the navbar an entry is grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

/// A single navbar entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarItemConfig {
    /// Entry kind; plain link when omitted.
    pub kind: NavbarItemKind,

    /// Display label.
    pub label: String,

    /// External target URL.
    pub href: Option<String>,

    /// Internal route target.
    pub to: Option<String>,

    /// Navbar side.
    pub position: NavPosition,

    /// Sidebar identifier, required for `doc-sidebar` entries.
    pub sidebar_id: Option<String>,
}

pub struct NavbarFields {
    pub title: FieldPath,
    pub logo: FieldPath,
    pub items: FieldPath,
}

impl NavbarConfig {
    pub const FIELDS: NavbarFields = NavbarFields {
        title: FieldPath::new("navbar.title"),
        logo: FieldPath::new("navbar.logo"),
        items: FieldPath::new("navbar.items"),
    };

    /// Validate navbar configuration.
    ///
    /// # Checks
    /// - `link` items must set exactly one of `href` / `to`
    /// - `doc-sidebar` items must set `sidebar_id`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (idx, item) in self.items.iter().enumerate() {
            match item.kind {
                NavbarItemKind::Link => match (&item.href, &item.to) {
                    (None, None) => diag.error(
                        Self::FIELDS.items,
                        format!("item {idx} is a link but sets neither `href` nor `to`"),
                    ),
                    (Some(_), Some(_)) => diag.error(
                        Self::FIELDS.items,
                        format!("item {idx} sets both `href` and `to`"),
                    ),
                    _ => {}
                },
                NavbarItemKind::DocSidebar => {
                    if item.sidebar_id.is_none() {
                        diag.error(
                            Self::FIELDS.items,
                            format!("item {idx} is a doc-sidebar but does not set `sidebar_id`"),
                        );
                    }
                }
                _ => {}
            }
        }
    }
}
