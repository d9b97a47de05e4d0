//! Page-level loading: locale resolution, validation and the per-page
//! fallback policies.

use super::document::PageContent;
use super::page::{Page, ViolationPolicy};
use crate::content::ContentLoader;
use crate::error::ContentError;
use crate::i18n::{LocaleRegistry, UiStrings};
use crate::metrics::BuildMetrics;
use crate::schema::{validate, ValidationContext};
use crate::sections::SectionKind;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// A validated page and where its content came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedPage {
    pub page: String,
    pub content: PageContent,
    /// Content is shown in a locale other than the requested one
    pub is_fallback: bool,
    /// `None` when the content is a built-in placeholder
    pub used_locale: Option<String>,
    pub requested_locale: String,
}

impl LoadedPage {
    /// Text of the fallback notice, or `None` when no notice is due.
    ///
    /// The document's own `fallbackNotice` wins over the built-in string for
    /// the requested locale.
    pub fn notice(&self) -> Option<&str> {
        if !self.is_fallback {
            return None;
        }
        Some(
            self.content
                .fallback_notice()
                .unwrap_or(UiStrings::for_locale(&self.requested_locale).fallback_notice),
        )
    }

    /// Locale the content is written in.
    pub fn content_locale(&self) -> &str {
        self.used_locale.as_deref().unwrap_or(&self.requested_locale)
    }
}

pub struct PageLoader<'a> {
    content: &'a ContentLoader,
    registry: &'a LocaleRegistry,
    metrics: Option<Arc<BuildMetrics>>,
}

impl<'a> PageLoader<'a> {
    pub fn new(content: &'a ContentLoader, registry: &'a LocaleRegistry) -> Self {
        Self {
            content,
            registry,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<BuildMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Load and validate `page` for `requested`.
    ///
    /// # Arguments
    /// * `page` - Page to load
    /// * `requested` - Requested locale; `None` or blank means the default
    ///
    /// # Returns
    /// The validated page, or the first fatal error under the page's policy
    pub fn load(&self, page: &Page, requested: Option<&str>) -> Result<LoadedPage, ContentError> {
        let fallback = self.registry.default_locale();
        let chain = self.registry.chain_for(requested);
        let pattern = page.pattern();

        let resolution = self
            .content
            .load_chain(&pattern, &chain, requested, fallback)?;
        let requested_locale = resolution.requested_locale.clone();
        let is_fallback = resolution.is_fallback();

        let (Some(raw), Some(used_locale)) = (resolution.data, resolution.used_locale) else {
            return self.missing(page, requested_locale, chain);
        };

        match parse(page, &raw, &used_locale) {
            Ok(content) => {
                if is_fallback {
                    warn!(
                        "{} has no '{}' content, serving '{}'",
                        page, requested_locale, used_locale
                    );
                    self.record(BuildMetrics::record_locale_fallback);
                }
                Ok(LoadedPage {
                    page: page.name(),
                    content,
                    is_fallback,
                    used_locale: Some(used_locale),
                    requested_locale,
                })
            }
            Err(e) if self.can_retry(page, &e, &used_locale) => {
                warn!("{}; retrying with '{}' content", e, fallback);
                self.retry_fallback(page, requested_locale, e)
            }
            Err(e) => Err(e),
        }
    }

    fn can_retry(&self, page: &Page, error: &ContentError, used_locale: &str) -> bool {
        page.on_violation() == ViolationPolicy::RetryFallback
            && error.is_schema_violation()
            && used_locale != self.registry.default_locale()
    }

    /// Validate the fallback locale's document after the requested one
    /// failed. If the fallback file does not exist the original violation
    /// stands.
    fn retry_fallback(
        &self,
        page: &Page,
        requested_locale: String,
        original: ContentError,
    ) -> Result<LoadedPage, ContentError> {
        let fallback = self.registry.default_locale();
        let Some(raw) = self.content.read_locale(&page.pattern(), fallback)? else {
            debug!("No '{}' content for {} to retry with", fallback, page);
            return Err(original);
        };

        let content = parse(page, &raw, fallback)?;
        self.record(BuildMetrics::record_validation_fallback);
        Ok(LoadedPage {
            page: page.name(),
            content,
            is_fallback: true,
            used_locale: Some(fallback.to_string()),
            requested_locale,
        })
    }

    fn missing(
        &self,
        page: &Page,
        requested_locale: String,
        candidates: Vec<String>,
    ) -> Result<LoadedPage, ContentError> {
        match page.placeholder(UiStrings::for_locale(&requested_locale)) {
            Some(content) => {
                warn!(
                    "No {} content for '{}' (tried {:?}), using placeholder",
                    page, requested_locale, candidates
                );
                Ok(LoadedPage {
                    page: page.name(),
                    content,
                    is_fallback: false,
                    used_locale: None,
                    requested_locale,
                })
            }
            None => Err(ContentError::MissingContent {
                page: page.name(),
                requested: requested_locale,
                candidates,
            }),
        }
    }

    fn record(&self, f: impl FnOnce(&BuildMetrics)) {
        if let Some(metrics) = &self.metrics {
            f(metrics.as_ref());
        }
    }
}

/// Validate a raw document into the page's typed content.
///
/// Section discriminators are checked first: an unknown section type is a
/// packaging error and never falls back to another locale.
pub fn parse(page: &Page, raw: &Value, locale: &str) -> Result<PageContent, ContentError> {
    if let Some(sections) = raw.get("sections").and_then(Value::as_array) {
        for section in sections {
            SectionKind::of_value(section)?;
        }
    }

    let ctx = ValidationContext::new(page.name()).with_locale(locale);
    let shape = page.shape();
    let content = match page {
        Page::Home => PageContent::Home(validate(raw, shape, &ctx)?),
        Page::Services => PageContent::Services(validate(raw, shape, &ctx)?),
        Page::ServiceDetail { .. } => PageContent::ServiceDetail(validate(raw, shape, &ctx)?),
        Page::Resources => PageContent::Resources(validate(raw, shape, &ctx)?),
        Page::Contact => PageContent::Contact(validate(raw, shape, &ctx)?),
        Page::About => PageContent::About(validate(raw, shape, &ctx)?),
    };
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::new("en-GB", &["en-GB", "zh-TW"]).unwrap()
    }

    fn write(dir: &TempDir, rel: &str, value: &Value) {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    }

    fn home(title: &str) -> Value {
        json!({
            "seo": { "title": title, "description": "Welcome" },
            "hero": { "title": title },
            "sections": [{ "type": "topics", "title": "Focus", "topics": ["Cloud"] }]
        })
    }

    // ==================== Locale Fallback Tests ====================

    #[test]
    fn test_requested_locale_served() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/zh-TW.json", &home("你好"));
        write(&dir, "home/en-GB.json", &home("Hello"));
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let loaded = PageLoader::new(&content, &registry)
            .load(&Page::Home, Some("zh-TW"))
            .unwrap();
        assert!(!loaded.is_fallback);
        assert_eq!(loaded.content.hero().title, "你好");
        assert!(loaded.notice().is_none());
    }

    #[test]
    fn test_missing_locale_falls_back_with_notice() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", &home("Hello"));
        let content = ContentLoader::new(dir.path());
        let registry = registry();
        let metrics = Arc::new(BuildMetrics::new());

        let loaded = PageLoader::new(&content, &registry)
            .with_metrics(metrics.clone())
            .load(&Page::Home, Some("zh-TW"))
            .unwrap();
        assert!(loaded.is_fallback);
        assert_eq!(loaded.used_locale.as_deref(), Some("en-GB"));
        assert_eq!(loaded.requested_locale, "zh-TW");
        assert_eq!(
            loaded.notice(),
            Some(UiStrings::for_locale("zh-TW").fallback_notice)
        );
        assert_eq!(metrics.locale_fallbacks(), 1);
    }

    #[test]
    fn test_notice_with_non_english_default_locale() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/zh-TW.json", &home("你好"));
        let content = ContentLoader::new(dir.path());
        let registry = LocaleRegistry::new("zh-TW", &["en-GB"]).unwrap();

        let loaded = PageLoader::new(&content, &registry)
            .load(&Page::Home, Some("en-GB"))
            .unwrap();
        assert!(loaded.is_fallback);
        assert_eq!(loaded.used_locale.as_deref(), Some("zh-TW"));
        let notice = loaded.notice().unwrap();
        assert_eq!(notice, UiStrings::for_locale("en-GB").fallback_notice);
        assert!(!notice.contains("English"));
    }

    #[test]
    fn test_document_notice_overrides_default() {
        let dir = TempDir::new().unwrap();
        let mut doc = home("Hello");
        doc["fallbackNotice"] = json!("Only in English for now.");
        write(&dir, "home/en-GB.json", &doc);
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let loaded = PageLoader::new(&content, &registry)
            .load(&Page::Home, Some("zh-TW"))
            .unwrap();
        assert_eq!(loaded.notice(), Some("Only in English for now."));
    }

    // ==================== Policy Tests ====================

    #[test]
    fn test_home_retries_fallback_on_violation() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/zh-TW.json", &json!({ "seo": { "title": "x" }, "hero": {} }));
        write(&dir, "home/en-GB.json", &home("Hello"));
        let content = ContentLoader::new(dir.path());
        let registry = registry();
        let metrics = Arc::new(BuildMetrics::new());

        let loaded = PageLoader::new(&content, &registry)
            .with_metrics(metrics.clone())
            .load(&Page::Home, Some("zh-TW"))
            .unwrap();
        assert!(loaded.is_fallback);
        assert_eq!(loaded.content.hero().title, "Hello");
        assert_eq!(metrics.validation_fallbacks(), 1);
        assert_eq!(metrics.locale_fallbacks(), 0);
    }

    #[test]
    fn test_retry_without_fallback_file_keeps_violation() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/zh-TW.json", &json!({ "hero": {} }));
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let err = PageLoader::new(&content, &registry)
            .load(&Page::Home, Some("zh-TW"))
            .unwrap_err();
        match err {
            ContentError::SchemaViolation { locale, .. } => assert_eq!(locale, "zh-TW"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fallback_violation_is_fatal() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", &json!({ "hero": { "title": 1 } }));
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let err = PageLoader::new(&content, &registry)
            .load(&Page::Home, Some("zh-TW"))
            .unwrap_err();
        assert!(err.is_schema_violation());
        let paths: Vec<String> = err.violations().iter().map(|v| v.path.to_string()).collect();
        assert!(paths.contains(&"$.seo".to_string()));
        assert!(paths.contains(&"$.hero.title".to_string()));
    }

    #[test]
    fn test_contact_violation_is_fatal() {
        let dir = TempDir::new().unwrap();
        let contact = json!({
            "seo": { "title": "Contact", "description": "Reach us" },
            "hero": { "title": "Contact" },
            "form": {
                "nameLabel": "Name", "emailLabel": "Email",
                "messageLabel": "Message", "submitLabel": "Send"
            }
        });
        let mut broken = contact.clone();
        broken["form"]["subjectLabel"] = json!("Subject");
        write(&dir, "contact/zh-TW.json", &broken);
        write(&dir, "contact/en-GB.json", &contact);
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let err = PageLoader::new(&content, &registry)
            .load(&Page::Contact, Some("zh-TW"))
            .unwrap_err();
        assert_eq!(err.violations()[0].path.to_string(), "$.form.subjectLabel");
    }

    #[test]
    fn test_missing_home_is_fatal() {
        let dir = TempDir::new().unwrap();
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let err = PageLoader::new(&content, &registry)
            .load(&Page::Home, Some("zh-TW"))
            .unwrap_err();
        match err {
            ContentError::MissingContent { page, requested, candidates } => {
                assert_eq!(page, "home");
                assert_eq!(requested, "zh-TW");
                assert_eq!(candidates, vec!["zh-TW", "en-GB"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_resources_uses_placeholder() {
        let dir = TempDir::new().unwrap();
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let loaded = PageLoader::new(&content, &registry)
            .load(&Page::Resources, Some("zh-TW"))
            .unwrap();
        assert!(!loaded.is_fallback);
        assert!(loaded.used_locale.is_none());
        assert_eq!(loaded.content.hero().title, "資源");
    }

    #[test]
    fn test_unknown_section_type_never_retries() {
        let dir = TempDir::new().unwrap();
        let mut doc = home("你好");
        doc["sections"] = json!([{ "type": "carousel", "slides": [] }]);
        write(&dir, "home/zh-TW.json", &doc);
        write(&dir, "home/en-GB.json", &home("Hello"));
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let err = PageLoader::new(&content, &registry)
            .load(&Page::Home, Some("zh-TW"))
            .unwrap_err();
        assert!(matches!(err, ContentError::UnknownSectionType { .. }));
    }

    #[test]
    fn test_malformed_json_never_falls_through() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("home")).unwrap();
        fs::write(dir.path().join("home/zh-TW.json"), "{ not json").unwrap();
        write(&dir, "home/en-GB.json", &home("Hello"));
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let err = PageLoader::new(&content, &registry)
            .load(&Page::Home, Some("zh-TW"))
            .unwrap_err();
        assert!(matches!(err, ContentError::MalformedContent { .. }));
    }

    #[test]
    fn test_no_requested_locale_uses_default() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", &home("Hello"));
        let content = ContentLoader::new(dir.path());
        let registry = registry();

        let loaded = PageLoader::new(&content, &registry)
            .load(&Page::Home, None)
            .unwrap();
        assert!(!loaded.is_fallback);
        assert_eq!(loaded.requested_locale, "en-GB");
    }
}
