//! Descriptor resolution.
//!
//! Turns a raw [`DocsiteConfig`] into the immutable [`EffectiveConfig`]
//! consumed by every downstream stage: applies the selected profile
//! overrides, runs the full validation pass, and fills each default
//! explicitly. There is no global config handle; the effective config is
//! constructed once per build and passed by reference.

use crate::config::{
    ConfigDiagnostics, ConfigError, DocsConfig, DocsiteConfig, FooterConfig, I18nConfig,
    LinksConfig, NavbarConfig, ProfileConfig, SearchConfig, SearchOverride, SiteConfig,
    util::normalize_base_url,
};
use crate::editlink::EditLinkPolicy;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::path::PathBuf;

// ============================================================================
// effective configuration
// ============================================================================

/// Resolved site metadata. `url` and `base_url` are concrete and normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveSite {
    pub title: String,
    pub tagline: String,
    pub url: String,
    pub base_url: String,
    pub organization: String,
    pub project: String,
    pub deployment_branch: String,
    pub favicon: Option<String>,
}

/// Complete search credentials, passed through unmodified to the search
/// integration. `None` at the config level means search is disabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCredentials {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    pub contextual_search: bool,
}

/// Edit-link URL bases. Present only when the descriptor wires up
/// `docs.edit_url`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditLinkBases {
    pub edit_url: String,
    pub translate_url: Option<String>,
}

/// Resolved docs options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveDocs {
    pub versioning: bool,
    pub route_base_path: String,
    pub breadcrumbs: bool,
    pub sidebar_path: Option<String>,
    pub edit_links: Option<EditLinkBases>,
}

/// The canonical site configuration, every optional field resolved.
///
/// Immutable once produced: fields are private and only readable through
/// accessors. Derived once per build and handed by reference to the
/// renderer, which reads it concurrently without coordination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveConfig {
    site: EffectiveSite,
    i18n: I18nConfig,
    links: LinksConfig,
    search: Option<SearchCredentials>,
    docs: EffectiveDocs,
    navbar: NavbarConfig,
    footer: FooterConfig,
}

impl EffectiveConfig {
    pub fn site(&self) -> &EffectiveSite {
        &self.site
    }

    pub fn i18n(&self) -> &I18nConfig {
        &self.i18n
    }

    pub fn default_locale(&self) -> &str {
        &self.i18n.default_locale
    }

    pub fn locales(&self) -> &[String] {
        &self.i18n.locales
    }

    pub fn links(&self) -> &LinksConfig {
        &self.links
    }

    pub fn search(&self) -> Option<&SearchCredentials> {
        self.search.as_ref()
    }

    pub fn docs(&self) -> &EffectiveDocs {
        &self.docs
    }

    pub fn navbar(&self) -> &NavbarConfig {
        &self.navbar
    }

    pub fn footer(&self) -> &FooterConfig {
        &self.footer
    }

    /// Build the edit-link policy for this site, or `None` when the
    /// descriptor left out `docs.edit_url` (no edit affordance).
    pub fn edit_link_policy(&self) -> Option<EditLinkPolicy> {
        self.docs.edit_links.as_ref().map(|bases| {
            EditLinkPolicy::new(
                self.i18n.default_locale.clone(),
                self.i18n.locales.iter().cloned(),
                bases.edit_url.clone(),
                bases.translate_url.clone(),
            )
        })
    }

    /// Re-express the effective config as a fully-specified descriptor.
    ///
    /// Resolving the returned descriptor yields an identical effective
    /// config; everything is already validated and normalized.
    pub fn as_descriptor(&self) -> DocsiteConfig {
        DocsiteConfig {
            config_path: PathBuf::new(),
            site: SiteConfig {
                title: self.site.title.clone(),
                tagline: self.site.tagline.clone(),
                url: Some(self.site.url.clone()),
                base_url: self.site.base_url.clone(),
                organization: self.site.organization.clone(),
                project: self.site.project.clone(),
                deployment_branch: self.site.deployment_branch.clone(),
                favicon: self.site.favicon.clone(),
            },
            i18n: self.i18n.clone(),
            links: self.links,
            search: match &self.search {
                Some(creds) => SearchConfig {
                    app_id: Some(creds.app_id.clone()),
                    api_key: Some(creds.api_key.clone()),
                    index_name: Some(creds.index_name.clone()),
                    contextual_search: creds.contextual_search,
                },
                None => SearchConfig::default(),
            },
            docs: DocsConfig {
                versioning: self.docs.versioning,
                route_base_path: self.docs.route_base_path.clone(),
                breadcrumbs: self.docs.breadcrumbs,
                sidebar_path: self.docs.sidebar_path.clone(),
                edit_url: self
                    .docs
                    .edit_links
                    .as_ref()
                    .map(|bases| bases.edit_url.clone()),
                translate_url: self
                    .docs
                    .edit_links
                    .as_ref()
                    .and_then(|bases| bases.translate_url.clone()),
            },
            navbar: self.navbar.clone(),
            footer: self.footer.clone(),
            profile: FxHashMap::default(),
        }
    }
}

// ============================================================================
// resolution
// ============================================================================

/// Resolve a descriptor into the effective site configuration.
///
/// Applies the named profile's overrides (if any), validates the merged
/// descriptor, and fills every default. All validation errors are
/// collected and returned at once as [`ConfigError::Diagnostics`].
pub fn resolve(
    descriptor: &DocsiteConfig,
    profile: Option<&str>,
) -> Result<EffectiveConfig, ConfigError> {
    let mut desc = descriptor.clone();

    if let Some(name) = profile {
        match desc.profile.get(name).cloned() {
            Some(overrides) => apply_profile(&mut desc, &overrides),
            None => return Err(unknown_profile_error(name, &desc)),
        }
    }

    validate(&desc)?;
    Ok(build(desc))
}

fn unknown_profile_error(name: &str, desc: &DocsiteConfig) -> ConfigError {
    let mut available: Vec<&str> = desc.profile.keys().map(String::as_str).collect();
    available.sort_unstable();

    let message = if available.is_empty() {
        format!("profile \"{name}\" not found (the config declares no profiles)")
    } else {
        format!(
            "profile \"{name}\" not found (available: {})",
            available.join(", ")
        )
    };
    ConfigError::Validation(message)
}

/// Overlay profile overrides onto the base descriptor, field by field.
fn apply_profile(config: &mut DocsiteConfig, profile: &ProfileConfig) {
    update_option(&mut config.i18n.locales, profile.locales.as_ref());
    update_option(&mut config.i18n.default_locale, profile.default_locale.as_ref());
    update_option(&mut config.docs.versioning, profile.versioning.as_ref());

    if let Some(url) = &profile.edit_url {
        config.docs.edit_url = Some(url.clone());
    }
    if let Some(url) = &profile.translate_url {
        config.docs.translate_url = Some(url.clone());
    }

    match &profile.search {
        Some(SearchOverride::Toggle(false)) => {
            // Force-disable: drop credentials, keep the contextual toggle
            config.search = SearchConfig {
                contextual_search: config.search.contextual_search,
                ..SearchConfig::default()
            };
        }
        // `search = true` keeps the base credentials as-is
        Some(SearchOverride::Toggle(true)) | None => {}
        Some(SearchOverride::Credentials(creds)) => {
            config.search = creds.clone();
        }
    }
}

/// Update a config field if an override value is provided.
fn update_option<T: Clone>(field: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        *field = value.clone();
    }
}

/// Validate the merged descriptor.
///
/// Collects all validation errors and returns them at once.
fn validate(desc: &DocsiteConfig) -> Result<(), ConfigError> {
    let mut diag = ConfigDiagnostics::new();

    desc.site.validate(&mut diag);
    desc.i18n.validate(&mut diag);
    desc.search.validate(&mut diag);
    desc.docs.validate(&mut diag);
    desc.navbar.validate(&mut diag);
    desc.footer.validate(&mut diag);

    // Cross-section: a multi-locale site with edit links needs a
    // translation target for its non-default locales
    if desc.docs.edit_url.is_some()
        && desc.docs.translate_url.is_none()
        && desc.i18n.locales.len() > 1
    {
        diag.error_with_hint(
            DocsConfig::FIELDS.translate_url,
            format!(
                "{} is set and the site has multiple locales, but {} is not configured",
                DocsConfig::FIELDS.edit_url,
                DocsConfig::FIELDS.translate_url
            ),
            "set docs.translate_url so translated pages link to the translation platform",
        );
    }

    diag.into_result().map_err(ConfigError::Diagnostics)
}

/// Fill defaults and assemble the effective config.
///
/// Only called on a validated descriptor. Each default is applied here
/// explicitly rather than through serde, so the rules stay visible and
/// independently testable:
/// - `site.base_url` is normalized to leading + trailing slash
/// - `navbar.title` falls back to `site.title`
/// - incomplete search credentials resolve to disabled
fn build(desc: DocsiteConfig) -> EffectiveConfig {
    let site = EffectiveSite {
        title: desc.site.title,
        tagline: desc.site.tagline,
        // Validation guarantees presence; the fallback is never taken
        url: desc.site.url.unwrap_or_default(),
        base_url: normalize_base_url(&desc.site.base_url),
        organization: desc.site.organization,
        project: desc.site.project,
        deployment_branch: desc.site.deployment_branch,
        favicon: desc.site.favicon,
    };

    let search = if desc.search.is_complete() {
        Some(SearchCredentials {
            app_id: desc.search.app_id.unwrap_or_default(),
            api_key: desc.search.api_key.unwrap_or_default(),
            index_name: desc.search.index_name.unwrap_or_default(),
            contextual_search: desc.search.contextual_search,
        })
    } else {
        None
    };

    let docs = EffectiveDocs {
        versioning: desc.docs.versioning,
        route_base_path: desc.docs.route_base_path,
        breadcrumbs: desc.docs.breadcrumbs,
        sidebar_path: desc.docs.sidebar_path,
        edit_links: desc.docs.edit_url.map(|edit_url| EditLinkBases {
            edit_url,
            translate_url: desc.docs.translate_url,
        }),
    };

    let mut navbar = desc.navbar;
    if navbar.title.is_empty() {
        navbar.title = site.title.clone();
    }

    EffectiveConfig {
        site,
        i18n: desc.i18n,
        links: desc.links,
        search,
        docs,
        navbar,
        footer: desc.footer,
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LinkPolicy, test_parse_config};
    use crate::editlink::{EditLinkKind, EditLinkRequest};

    fn full_descriptor() -> DocsiteConfig {
        test_parse_config(
            r#"tagline = "Dinosaurs are cool"
base_url = "/needle-docs/"
organization = "IBAX-io"
project = "needle"

[i18n]
default_locale = "en"
locales = ["en", "fr"]

[search]
app_id = "01H350K8AP"
api_key = "ef4d9c757bc56cd76df15626c6fc5b97"
index_name = "needle"

[docs]
versioning = true
edit_url = "https://github.com/scottafk/needle-docs/edit/main"
translate_url = "https://crowdin.com/project/needle""#,
        )
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let effective = resolve(&test_parse_config(""), None).unwrap();

        assert_eq!(effective.links().on_broken_links, LinkPolicy::Warn);
        assert_eq!(effective.links().on_broken_markdown_links, LinkPolicy::Warn);
        assert!(!effective.docs().versioning);
        assert!(effective.search().is_none());
        assert_eq!(effective.site().base_url, "/");
        assert_eq!(effective.site().deployment_branch, "gh-pages");
        assert_eq!(effective.docs().route_base_path, "docs");
        assert_eq!(effective.default_locale(), "en");
    }

    #[test]
    fn test_resolve_normalizes_base_url() {
        let effective =
            resolve(&test_parse_config("base_url = \"needle-docs\""), None).unwrap();
        assert_eq!(effective.site().base_url, "/needle-docs/");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let descriptor = full_descriptor();
        let first = resolve(&descriptor, None).unwrap();
        let second = resolve(&first.as_descriptor(), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_is_idempotent_on_minimal_descriptor() {
        let descriptor = test_parse_config("");
        let first = resolve(&descriptor, None).unwrap();
        let second = resolve(&first.as_descriptor(), None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_rejects_missing_default_locale() {
        let descriptor =
            test_parse_config("[i18n]\ndefault_locale = \"de\"\nlocales = [\"en\", \"fr\"]");
        match resolve(&descriptor, None) {
            Err(ConfigError::Diagnostics(diag)) => {
                assert!(
                    diag.errors()
                        .iter()
                        .any(|e| e.field.as_str() == "i18n.default_locale")
                );
            }
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_duplicate_locales() {
        let descriptor = test_parse_config("[i18n]\nlocales = [\"en\", \"en\"]");
        assert!(resolve(&descriptor, None).is_err());
    }

    #[test]
    fn test_resolve_rejects_empty_locales() {
        let descriptor = test_parse_config("[i18n]\nlocales = []");
        assert!(resolve(&descriptor, None).is_err());
    }

    #[test]
    fn test_resolve_rejects_bad_url() {
        let descriptor = test_parse_config("url = \"not a url\"");
        match resolve(&descriptor, None) {
            Err(ConfigError::Diagnostics(diag)) => {
                assert!(diag.errors().iter().any(|e| e.field.as_str() == "site.url"));
            }
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_partial_search_credentials() {
        let descriptor = test_parse_config("[search]\nindex_name = \"needle\"");
        assert!(resolve(&descriptor, None).is_err());
    }

    #[test]
    fn test_resolve_passes_search_credentials_through() {
        let effective = resolve(&full_descriptor(), None).unwrap();
        let creds = effective.search().unwrap();
        assert_eq!(creds.app_id, "01H350K8AP");
        assert_eq!(creds.index_name, "needle");
        assert!(creds.contextual_search);
    }

    #[test]
    fn test_resolve_requires_translate_url_for_multi_locale_edit_links() {
        let descriptor = test_parse_config(
            r#"[i18n]
locales = ["en", "fr"]

[docs]
edit_url = "https://github.com/scottafk/needle-docs/edit/main""#,
        );
        match resolve(&descriptor, None) {
            Err(ConfigError::Diagnostics(diag)) => {
                assert!(
                    diag.errors()
                        .iter()
                        .any(|e| e.field.as_str() == "docs.translate_url")
                );
            }
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_allows_edit_url_without_translate_for_single_locale() {
        let descriptor = test_parse_config(
            "[docs]\nedit_url = \"https://github.com/scottafk/needle-docs/edit/main\"",
        );
        let effective = resolve(&descriptor, None).unwrap();
        let bases = effective.docs().edit_links.as_ref().unwrap();
        assert!(bases.translate_url.is_none());
    }

    #[test]
    fn test_edit_link_policy_from_effective_config() {
        let effective = resolve(&full_descriptor(), None).unwrap();
        let policy = effective.edit_link_policy().unwrap();

        let result = policy.resolve(&EditLinkRequest {
            locale: "fr".to_string(),
            version_docs_dir: "docs".to_string(),
            doc_path: vec!["guide".to_string(), "intro".to_string()],
        });
        assert_eq!(result.kind, EditLinkKind::Translate);
        assert!(result.url.ends_with("/fr"));
    }

    #[test]
    fn test_no_edit_url_means_no_policy() {
        let effective = resolve(&test_parse_config(""), None).unwrap();
        assert!(effective.docs().edit_links.is_none());
        assert!(effective.edit_link_policy().is_none());
    }

    #[test]
    fn test_navbar_title_falls_back_to_site_title() {
        let effective = resolve(&test_parse_config(""), None).unwrap();
        assert_eq!(effective.navbar().title, "Test");

        let effective =
            resolve(&test_parse_config("[navbar]\ntitle = \"Brand\""), None).unwrap();
        assert_eq!(effective.navbar().title, "Brand");
    }

    #[test]
    fn test_profile_overlay_changes_only_overridden_fields() {
        let mut descriptor = full_descriptor();
        descriptor.profile.insert(
            "solo".to_string(),
            ProfileConfig {
                locales: Some(vec!["en".to_string()]),
                versioning: Some(false),
                ..ProfileConfig::default()
            },
        );

        let base = resolve(&descriptor, None).unwrap();
        let solo = resolve(&descriptor, Some("solo")).unwrap();

        assert_eq!(solo.locales(), &["en".to_string()]);
        assert!(!solo.docs().versioning);
        // Untouched fields keep the base values
        assert_eq!(solo.site(), base.site());
        assert_eq!(solo.search(), base.search());
        assert_eq!(solo.default_locale(), base.default_locale());
    }

    #[test]
    fn test_profile_search_force_disable() {
        let mut descriptor = full_descriptor();
        descriptor.profile.insert(
            "staging".to_string(),
            ProfileConfig {
                search: Some(SearchOverride::Toggle(false)),
                ..ProfileConfig::default()
            },
        );

        let effective = resolve(&descriptor, Some("staging")).unwrap();
        assert!(effective.search().is_none());
    }

    #[test]
    fn test_profile_overlay_is_validated() {
        // The profile swaps in a locale list that drops the default locale
        let mut descriptor = full_descriptor();
        descriptor.profile.insert(
            "broken".to_string(),
            ProfileConfig {
                locales: Some(vec!["fr".to_string()]),
                ..ProfileConfig::default()
            },
        );

        assert!(resolve(&descriptor, Some("broken")).is_err());
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        let descriptor = full_descriptor();
        match resolve(&descriptor, Some("nope")) {
            Err(ConfigError::Validation(message)) => {
                assert!(message.contains("nope"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
