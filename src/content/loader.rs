//! Locale-keyed content loader.
//!
//! Patterns carry a single `{locale}` placeholder, e.g.
//! `home/{locale}.json` or `services/consulting.{locale}.json`, resolved
//! against the loader's content root.

use crate::content::resolution::ContentResolution;
use crate::error::ContentError;
use crate::i18n::candidate_chain;
use crate::metrics::BuildMetrics;
use crate::schema::{FieldPath, Violation, ViolationKind};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::{fs, io};
use tracing::debug;

pub const LOCALE_PLACEHOLDER: &str = "{locale}";

/// Memoized file outcome; `None` records a file that does not exist.
type CacheEntry = Option<Arc<Value>>;

#[derive(Debug)]
pub struct ContentLoader {
    root: PathBuf,
    cache: Option<Mutex<HashMap<(String, String), CacheEntry>>>,
    metrics: Option<Arc<BuildMetrics>>,
}

impl ContentLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: None,
            metrics: None,
        }
    }

    /// Memoize outcomes per (pattern, locale) for the lifetime of the loader.
    ///
    /// Missing files are remembered too. Malformed files are not, so every
    /// load of one fails.
    pub fn cached(mut self) -> Self {
        self.cache = Some(Mutex::new(HashMap::new()));
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<BuildMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Substitute `locale` into `pattern` and resolve it against the root.
    pub fn resolve_path(&self, pattern: &str, locale: &str) -> Result<PathBuf, ContentError> {
        if pattern.matches(LOCALE_PLACEHOLDER).count() != 1 {
            return Err(ContentError::InvalidPattern {
                pattern: pattern.to_string(),
            });
        }
        Ok(self.root.join(pattern.replace(LOCALE_PLACEHOLDER, locale)))
    }

    /// Load the first existing candidate for `requested`, ending at `fallback`.
    pub fn load_raw(
        &self,
        pattern: &str,
        requested: Option<&str>,
        fallback: &str,
    ) -> Result<ContentResolution<Value>, ContentError> {
        let chain = candidate_chain(requested, fallback);
        self.load_chain(pattern, &chain, requested, fallback)
    }

    /// Like `load_raw`, but over an explicit candidate chain (for example
    /// one widened by `LocaleRegistry::chain_for`).
    pub fn load_chain(
        &self,
        pattern: &str,
        chain: &[String],
        requested: Option<&str>,
        fallback: &str,
    ) -> Result<ContentResolution<Value>, ContentError> {
        let requested_locale = requested
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(fallback);

        for locale in chain {
            match self.read_locale(pattern, locale)? {
                Some(value) => {
                    debug!("Resolved {} with locale {}", pattern, locale);
                    return Ok(ContentResolution::found(
                        Value::clone(&value),
                        locale,
                        requested_locale,
                        fallback,
                    ));
                }
                None => debug!("No {} content for locale {}", pattern, locale),
            }
        }

        Ok(ContentResolution::missing(requested_locale, fallback))
    }

    /// Load and deserialize without a schema walk.
    ///
    /// Use `schema::validate` on `load_raw` output when full violation
    /// reports are needed; a conversion failure here reports only the first
    /// problem serde hits.
    pub fn load<T: DeserializeOwned>(
        &self,
        pattern: &str,
        requested: Option<&str>,
        fallback: &str,
    ) -> Result<ContentResolution<T>, ContentError> {
        let ContentResolution {
            data,
            used_locale,
            requested_locale,
            fallback_locale,
        } = self.load_raw(pattern, requested, fallback)?;

        let data = match data {
            Some(value) => Some(serde_json::from_value::<T>(value).map_err(|e| {
                ContentError::SchemaViolation {
                    locale: used_locale.clone().unwrap_or_else(|| fallback.to_string()),
                    document: pattern.to_string(),
                    violations: vec![Violation::new(
                        FieldPath::root(),
                        ViolationKind::Conversion(e.to_string()),
                    )],
                }
            })?),
            None => None,
        };

        Ok(ContentResolution {
            data,
            used_locale,
            requested_locale,
            fallback_locale,
        })
    }

    /// Read a single locale's file, `Ok(None)` when it does not exist.
    pub fn read_locale(
        &self,
        pattern: &str,
        locale: &str,
    ) -> Result<Option<Arc<Value>>, ContentError> {
        let path = self.resolve_path(pattern, locale)?;
        let key = (pattern.to_string(), locale.to_string());

        if let Some(cache) = &self.cache {
            if let Some(entry) = cache.lock().get(&key) {
                if let Some(metrics) = &self.metrics {
                    metrics.record_cache_hit();
                }
                return Ok(entry.clone());
            }
        }

        let entry = read_json(&path)?.map(Arc::new);
        if entry.is_some() {
            if let Some(metrics) = &self.metrics {
                metrics.record_load();
            }
        }

        if let Some(cache) = &self.cache {
            cache.lock().insert(key, entry.clone());
        }
        Ok(entry)
    }
}

fn read_json(path: &Path) -> Result<Option<Value>, ContentError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ContentError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    // Invalid UTF-8 is reported as malformed content, not as an I/O failure
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| ContentError::MalformedContent {
            path: path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, contents: &str) {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Title {
        title: String,
    }

    // ==================== Pattern Tests ====================

    #[test]
    fn test_resolve_path_substitutes_locale() {
        let loader = ContentLoader::new("/content");
        let path = loader.resolve_path("services/audit.{locale}.json", "zh-TW").unwrap();
        assert_eq!(path, PathBuf::from("/content/services/audit.zh-TW.json"));
    }

    #[test]
    fn test_pattern_without_placeholder_rejected() {
        let loader = ContentLoader::new("/content");
        let err = loader.resolve_path("home/en-GB.json", "en-GB").unwrap_err();
        assert!(matches!(err, ContentError::InvalidPattern { .. }));
    }

    #[test]
    fn test_pattern_with_two_placeholders_rejected() {
        let loader = ContentLoader::new("/content");
        assert!(loader.resolve_path("{locale}/{locale}.json", "en-GB").is_err());
    }

    // ==================== Resolution Tests ====================

    #[test]
    fn test_load_requested_locale() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/zh-TW.json", r#"{"title":"歡迎"}"#);
        write(&dir, "home/en-GB.json", r#"{"title":"Welcome"}"#);

        let loader = ContentLoader::new(dir.path());
        let res = loader.load_raw("home/{locale}.json", Some("zh-TW"), "en-GB").unwrap();

        assert_eq!(res.used_locale.as_deref(), Some("zh-TW"));
        assert_eq!(res.data, Some(json!({ "title": "歡迎" })));
        assert!(!res.is_fallback());
    }

    #[test]
    fn test_load_falls_back_when_requested_missing() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", r#"{"title":"Welcome"}"#);

        let loader = ContentLoader::new(dir.path());
        let res = loader.load_raw("home/{locale}.json", Some("zh-TW"), "en-GB").unwrap();

        assert_eq!(res.used_locale.as_deref(), Some("en-GB"));
        assert_eq!(res.requested_locale, "zh-TW");
        assert_eq!(res.data, Some(json!({ "title": "Welcome" })));
        assert!(res.is_fallback());
    }

    #[test]
    fn test_load_nothing_found() {
        let dir = TempDir::new().unwrap();
        let loader = ContentLoader::new(dir.path());
        let res = loader.load_raw("home/{locale}.json", Some("zh-TW"), "en-GB").unwrap();

        assert!(res.data.is_none());
        assert!(res.used_locale.is_none());
        assert_eq!(res.requested_locale, "zh-TW");
    }

    #[test]
    fn test_load_without_request_uses_fallback_as_requested() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", r#"{"title":"Welcome"}"#);

        let loader = ContentLoader::new(dir.path());
        let res = loader.load_raw("home/{locale}.json", None, "en-GB").unwrap();
        assert_eq!(res.requested_locale, "en-GB");
        assert!(!res.is_fallback());
    }

    #[test]
    fn test_malformed_json_is_fatal_not_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/zh-TW.json", r#"{"title": "#);
        write(&dir, "home/en-GB.json", r#"{"title":"Welcome"}"#);

        let loader = ContentLoader::new(dir.path());
        let err = loader.load_raw("home/{locale}.json", Some("zh-TW"), "en-GB").unwrap_err();

        match err {
            ContentError::MalformedContent { path, .. } => {
                assert!(path.ends_with("home/zh-TW.json"));
            }
            other => panic!("expected MalformedContent, got {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("home/zh-TW.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"{\xff\xfe}").unwrap();
        fs::write(dir.path().join("home/en-GB.json"), r#"{"title":"Welcome"}"#).unwrap();

        let loader = ContentLoader::new(dir.path());
        let err = loader.load_raw("home/{locale}.json", Some("zh-TW"), "en-GB").unwrap_err();
        assert!(matches!(err, ContentError::MalformedContent { .. }), "got {err}");

        let quoted = dir.path().join("about/en-GB.json");
        fs::create_dir_all(quoted.parent().unwrap()).unwrap();
        fs::write(&quoted, b"{\"title\": \"\xff\"}").unwrap();
        let err = loader.load_raw("about/{locale}.json", None, "en-GB").unwrap_err();
        assert!(matches!(err, ContentError::MalformedContent { .. }), "got {err}");
    }

    #[test]
    fn test_load_typed() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", r#"{"title":"Welcome"}"#);

        let loader = ContentLoader::new(dir.path());
        let res: ContentResolution<Title> =
            loader.load("home/{locale}.json", Some("zh-TW"), "en-GB").unwrap();
        assert_eq!(
            res.data,
            Some(Title {
                title: "Welcome".to_string()
            })
        );
    }

    #[test]
    fn test_load_typed_mismatch_is_schema_violation() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", r#"{"title":5}"#);

        let loader = ContentLoader::new(dir.path());
        let err = loader
            .load::<Title>("home/{locale}.json", None, "en-GB")
            .unwrap_err();
        assert!(err.is_schema_violation());
        assert!(err.to_string().contains("[en-GB]"));
    }

    #[test]
    fn test_load_chain_with_base_language() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/zh.json", r#"{"title":"歡迎"}"#);
        write(&dir, "home/en-GB.json", r#"{"title":"Welcome"}"#);

        let loader = ContentLoader::new(dir.path());
        let chain = vec!["zh-TW".to_string(), "zh".to_string(), "en-GB".to_string()];
        let res = loader
            .load_chain("home/{locale}.json", &chain, Some("zh-TW"), "en-GB")
            .unwrap();
        assert_eq!(res.used_locale.as_deref(), Some("zh"));
        assert!(res.is_fallback());
    }

    // ==================== Cache Tests ====================

    #[test]
    fn test_cache_serves_repeat_loads() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", r#"{"title":"Welcome"}"#);

        let metrics = Arc::new(BuildMetrics::new());
        let loader = ContentLoader::new(dir.path())
            .cached()
            .with_metrics(Arc::clone(&metrics));

        loader.load_raw("home/{locale}.json", None, "en-GB").unwrap();
        // Changing the file after the first read is invisible to a cached loader.
        write(&dir, "home/en-GB.json", r#"{"title":"Changed"}"#);
        let res = loader.load_raw("home/{locale}.json", None, "en-GB").unwrap();

        assert_eq!(res.data, Some(json!({ "title": "Welcome" })));
        assert_eq!(metrics.loads(), 1);
        assert_eq!(metrics.cache_hits(), 1);
    }

    #[test]
    fn test_cache_remembers_missing_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", r#"{"title":"Welcome"}"#);

        let metrics = Arc::new(BuildMetrics::new());
        let loader = ContentLoader::new(dir.path())
            .cached()
            .with_metrics(Arc::clone(&metrics));

        loader.load_raw("home/{locale}.json", Some("zh-TW"), "en-GB").unwrap();
        loader.load_raw("home/{locale}.json", Some("zh-TW"), "en-GB").unwrap();

        // Second call hits the cache for both zh-TW (absent) and en-GB.
        assert_eq!(metrics.cache_hits(), 2);
        assert_eq!(metrics.loads(), 1);
    }

    #[test]
    fn test_uncached_loader_rereads() {
        let dir = TempDir::new().unwrap();
        write(&dir, "home/en-GB.json", r#"{"title":"Welcome"}"#);

        let loader = ContentLoader::new(dir.path());
        loader.load_raw("home/{locale}.json", None, "en-GB").unwrap();
        write(&dir, "home/en-GB.json", r#"{"title":"Changed"}"#);
        let res = loader.load_raw("home/{locale}.json", None, "en-GB").unwrap();
        assert_eq!(res.data, Some(json!({ "title": "Changed" })));
    }
}
