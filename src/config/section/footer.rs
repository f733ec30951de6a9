//! `[footer]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! style = "dark"
//! copyright = "Copyright © Needle Project Team."
//!
//! [[footer.columns]]
//! title = "Docs"
//! items = [{ label = "Tutorial", to = "/docs/intro" }]
//!
//! [[footer.columns]]
//! title = "More"
//! items = [{ label = "GitHub", href = "https://github.com/IBAX-io/needle" }]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Footer color style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

/// Footer structure: link columns plus a copyright line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Color style.
    pub style: FooterStyle,

    /// Copyright line shown under the columns.
    pub copyright: String,

    /// Ordered link columns.
    pub columns: Vec<FooterColumnConfig>,
}

/// One titled column of footer links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterColumnConfig {
    /// Column heading.
    pub title: String,

    /// Links in the column.
    pub items: Vec<FooterItemConfig>,
}

/// A single footer link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterItemConfig {
    /// Display label.
    pub label: String,

    /// External target URL.
    pub href: Option<String>,

    /// Internal route target.
    pub to: Option<String>,
}

pub struct FooterFields {
    pub style: FieldPath,
    pub copyright: FieldPath,
    pub columns: FieldPath,
}

impl FooterConfig {
    pub const FIELDS: FooterFields = FooterFields {
        style: FieldPath::new("footer.style"),
        copyright: FieldPath::new("footer.copyright"),
        columns: FieldPath::new("footer.columns"),
    };

    /// Validate footer configuration.
    ///
    /// # Checks
    /// - every link must set exactly one of `href` / `to`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (col_idx, column) in self.columns.iter().enumerate() {
            for (item_idx, item) in column.items.iter().enumerate() {
                match (&item.href, &item.to) {
                    (None, None) => diag.error(
                        Self::FIELDS.columns,
                        format!(
                            "column {col_idx} item {item_idx} sets neither `href` nor `to`"
                        ),
                    ),
                    (Some(_), Some(_)) => diag.error(
                        Self::FIELDS.columns,
                        format!("column {col_idx} item {item_idx} sets both `href` and `to`"),
                    ),
                    _ => {}
                }
            }
        }
    }
}
