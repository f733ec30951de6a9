//! Edit-link resolution.
//!
//! Maps a rendered page's locale and path to the URL behind its
//! "edit this page" affordance: pages in the default locale link to the
//! source repository, translated pages link to the translation platform
//! (which routes by project + locale, not by file).

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use rustc_hash::FxHashSet;
use std::fmt;

/// Characters percent-encoded inside a URL path segment.
///
/// Matches what browsers do to path segments: controls, whitespace,
/// delimiters and `%` itself. `/` is included because segment boundaries
/// are inserted by the joiner, never by segment content.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/');

/// One edit-link lookup. Created per rendered page, never persisted.
#[derive(Debug, Clone)]
pub struct EditLinkRequest {
    /// Locale the page is rendered in.
    pub locale: String,

    /// Versioned-docs directory the page lives under (e.g., "docs" or
    /// "versioned_docs/version-1.x").
    pub version_docs_dir: String,

    /// Document path segments below the versioned-docs directory.
    pub doc_path: Vec<String>,
}

/// Which policy branch produced the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditLinkKind {
    /// Translation-platform URL.
    Translate,

    /// Source-repository edit URL.
    SourceEdit,
}

impl fmt::Display for EditLinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Translate => write!(f, "translate"),
            Self::SourceEdit => write!(f, "source-edit"),
        }
    }
}

/// A resolved edit link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditLinkResult {
    pub url: String,
    pub kind: EditLinkKind,
}

/// Pure mapping from `(locale, doc location)` to an edit/translate URL.
///
/// Constructed once from the effective configuration and shared read-only
/// across the render pass; `resolve` is total and never fails.
#[derive(Debug, Clone)]
pub struct EditLinkPolicy {
    default_locale: String,
    locales: FxHashSet<String>,
    edit_base: String,
    translate_base: Option<String>,
}

impl EditLinkPolicy {
    pub fn new(
        default_locale: impl Into<String>,
        locales: impl IntoIterator<Item = String>,
        edit_base: impl Into<String>,
        translate_base: Option<String>,
    ) -> Self {
        Self {
            default_locale: default_locale.into(),
            locales: locales.into_iter().collect(),
            edit_base: edit_base.into(),
            translate_base,
        }
    }

    /// Resolve the edit link for one page.
    ///
    /// Translated locales get the translation-platform project URL with the
    /// locale code appended; no path information is used since the platform
    /// routes by locale + project. The default locale gets the source
    /// repository edit URL for the exact file.
    ///
    /// A locale code outside the configured locale set falls back to the
    /// source-edit branch: the translate branch is reserved for locales the
    /// site actually publishes, and a stable URL beats failing the render
    /// pass over a caller bug.
    pub fn resolve(&self, req: &EditLinkRequest) -> EditLinkResult {
        if req.locale != self.default_locale
            && self.locales.contains(req.locale.as_str())
            && let Some(base) = &self.translate_base
        {
            return EditLinkResult {
                url: format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    encode_segment(&req.locale)
                ),
                kind: EditLinkKind::Translate,
            };
        }

        // Empty doc_path keeps the trailing slash: the link then points at
        // the directory root, which is a valid edit target.
        let mut url = self.edit_base.trim_end_matches('/').to_string();
        for segment in req.version_docs_dir.split('/').filter(|s| !s.is_empty()) {
            url.push('/');
            url.push_str(&encode_segment(segment));
        }
        url.push('/');
        for (idx, segment) in req.doc_path.iter().enumerate() {
            if idx > 0 {
                url.push('/');
            }
            url.push_str(&encode_segment(segment));
        }

        EditLinkResult {
            url,
            kind: EditLinkKind::SourceEdit,
        }
    }
}

/// Percent-encode a single path segment.
fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> EditLinkPolicy {
        EditLinkPolicy::new(
            "en",
            ["en".to_string(), "fr".to_string()],
            "https://github.com/scottafk/needle-docs/edit/main",
            Some("https://crowdin.com/project/needle".to_string()),
        )
    }

    fn request(locale: &str, doc_path: &[&str]) -> EditLinkRequest {
        EditLinkRequest {
            locale: locale.to_string(),
            version_docs_dir: "docs".to_string(),
            doc_path: doc_path.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_default_locale_gets_source_edit() {
        let result = policy().resolve(&request("en", &["guide", "intro"]));
        assert_eq!(result.kind, EditLinkKind::SourceEdit);
        assert!(result.url.ends_with("/docs/guide/intro"));
        assert_eq!(
            result.url,
            "https://github.com/scottafk/needle-docs/edit/main/docs/guide/intro"
        );
    }

    #[test]
    fn test_translated_locale_gets_translate_url() {
        let result = policy().resolve(&request("fr", &["guide", "intro"]));
        assert_eq!(result.kind, EditLinkKind::Translate);
        assert!(result.url.ends_with("/fr"));
        // No doc-path-derived content in translate URLs
        assert!(!result.url.contains("guide"));
        assert!(!result.url.contains("intro"));
        assert_eq!(result.url, "https://crowdin.com/project/needle/fr");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_source_edit() {
        let result = policy().resolve(&request("de", &["guide", "intro"]));
        assert_eq!(result.kind, EditLinkKind::SourceEdit);
        assert!(result.url.ends_with("/docs/guide/intro"));
    }

    #[test]
    fn test_empty_doc_path_points_at_directory_root() {
        let result = policy().resolve(&request("en", &[]));
        assert_eq!(result.kind, EditLinkKind::SourceEdit);
        assert_eq!(
            result.url,
            "https://github.com/scottafk/needle-docs/edit/main/docs/"
        );
    }

    #[test]
    fn test_versioned_docs_dir() {
        let mut req = request("en", &["guide", "intro"]);
        req.version_docs_dir = "versioned_docs/version-1.x".to_string();
        let result = policy().resolve(&req);
        assert_eq!(
            result.url,
            "https://github.com/scottafk/needle-docs/edit/main/versioned_docs/version-1.x/guide/intro"
        );
    }

    #[test]
    fn test_unicode_segments_are_percent_encoded() {
        let result = policy().resolve(&request("en", &["指南", "intro"]));
        assert_eq!(
            result.url,
            "https://github.com/scottafk/needle-docs/edit/main/docs/%E6%8C%87%E5%8D%97/intro"
        );
    }

    #[test]
    fn test_space_and_slash_in_segment() {
        let result = policy().resolve(&request("en", &["getting started", "a/b"]));
        assert!(result.url.ends_with("/docs/getting%20started/a%2Fb"));
    }

    #[test]
    fn test_no_translate_base_routes_everything_to_source_edit() {
        let policy = EditLinkPolicy::new(
            "en",
            ["en".to_string()],
            "https://github.com/scottafk/needle-docs/edit/main",
            None,
        );
        let result = policy.resolve(&request("fr", &["guide"]));
        assert_eq!(result.kind, EditLinkKind::SourceEdit);
    }

    #[test]
    fn test_trailing_slash_on_bases_is_normalized() {
        let policy = EditLinkPolicy::new(
            "en",
            ["en".to_string(), "fr".to_string()],
            "https://github.com/scottafk/needle-docs/edit/main/",
            Some("https://crowdin.com/project/needle/".to_string()),
        );
        assert_eq!(
            policy.resolve(&request("fr", &[])).url,
            "https://crowdin.com/project/needle/fr"
        );
        assert_eq!(
            policy.resolve(&request("en", &["intro"])).url,
            "https://github.com/scottafk/needle-docs/edit/main/docs/intro"
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EditLinkKind::Translate.to_string(), "translate");
        assert_eq!(EditLinkKind::SourceEdit.to_string(), "source-edit");
    }
}
