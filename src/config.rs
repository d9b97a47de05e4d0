use crate::i18n::LocaleRegistry;
use crate::sections::DEFAULT_PROMOTE_KEYWORDS;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Paths
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,

    // Locales
    pub locales: LocaleRegistry,

    // Sections
    pub promote_keywords: Vec<String>,

    // Services (None = discover from content)
    pub service_slugs: Option<Vec<String>>,

    // Build
    pub build_timeout: Duration,
    pub cache_content: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_locale =
            std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en-GB".to_string());
        let supported = std::env::var("SUPPORTED_LOCALES")
            .map(|v| split_list(&v))
            .unwrap_or_else(|_| vec!["en-GB".to_string(), "zh-TW".to_string()]);
        let locales = LocaleRegistry::new(&default_locale, &supported)
            .context("Invalid DEFAULT_LOCALE or SUPPORTED_LOCALES")?;

        let build_timeout_secs = match std::env::var("BUILD_TIMEOUT_SECS") {
            Ok(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("BUILD_TIMEOUT_SECS must be a number, got '{}'", v))?,
            Err(_) => 30,
        };
        if build_timeout_secs == 0 {
            bail!("BUILD_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            // Paths
            content_dir: std::env::var("CONTENT_DIR")
                .unwrap_or_else(|_| "content".to_string())
                .into(),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "dist".to_string())
                .into(),

            locales,

            // Sections
            promote_keywords: std::env::var("SECTION_PROMOTE_KEYWORDS")
                .map(|v| split_list(&v))
                .ok()
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| {
                    DEFAULT_PROMOTE_KEYWORDS
                        .iter()
                        .map(|k| k.to_string())
                        .collect()
                }),

            // Services
            service_slugs: std::env::var("SERVICE_SLUGS")
                .map(|v| split_list(&v))
                .ok()
                .filter(|s| !s.is_empty()),

            // Build
            build_timeout: Duration::from_secs(build_timeout_secs),
            cache_content: std::env::var("CACHE_CONTENT")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(true),
        })
    }
}

/// Split a comma-separated env value, dropping blank entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "CONTENT_DIR",
        "OUTPUT_DIR",
        "DEFAULT_LOCALE",
        "SUPPORTED_LOCALES",
        "SECTION_PROMOTE_KEYWORDS",
        "SERVICE_SLUGS",
        "BUILD_TIMEOUT_SECS",
        "CACHE_CONTENT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== Defaults ====================

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.locales.default_locale(), "en-GB");
        assert_eq!(config.locales.codes(), vec!["en-GB", "zh-TW"]);
        assert_eq!(config.promote_keywords.len(), DEFAULT_PROMOTE_KEYWORDS.len());
        assert!(config.service_slugs.is_none());
        assert_eq!(config.build_timeout, Duration::from_secs(30));
        assert!(config.cache_content);
    }

    // ==================== Overrides ====================

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("CONTENT_DIR", "/srv/content");
        std::env::set_var("DEFAULT_LOCALE", "zh-TW");
        std::env::set_var("SUPPORTED_LOCALES", "en-GB, zh-TW, ,ja-JP");
        std::env::set_var("SECTION_PROMOTE_KEYWORDS", "case study,客戶故事");
        std::env::set_var("SERVICE_SLUGS", "audit,consulting");
        std::env::set_var("BUILD_TIMEOUT_SECS", "5");
        std::env::set_var("CACHE_CONTENT", "off");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.content_dir, PathBuf::from("/srv/content"));
        assert_eq!(config.locales.codes(), vec!["zh-TW", "en-GB", "ja-JP"]);
        assert_eq!(config.promote_keywords, vec!["case study", "客戶故事"]);
        assert_eq!(
            config.service_slugs,
            Some(vec!["audit".to_string(), "consulting".to_string()])
        );
        assert_eq!(config.build_timeout, Duration::from_secs(5));
        assert!(!config.cache_content);
    }

    #[test]
    #[serial]
    fn test_blank_keywords_use_defaults() {
        clear_env();
        std::env::set_var("SECTION_PROMOTE_KEYWORDS", " , ");
        let config = Config::from_env().unwrap();
        clear_env();
        assert_eq!(config.promote_keywords.len(), DEFAULT_PROMOTE_KEYWORDS.len());
    }

    // ==================== Validation ====================

    #[test]
    #[serial]
    fn test_invalid_default_locale() {
        clear_env();
        std::env::set_var("DEFAULT_LOCALE", "english");
        let result = Config::from_env();
        clear_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_invalid_supported_locale() {
        clear_env();
        std::env::set_var("SUPPORTED_LOCALES", "en-GB,zh_TW");
        let result = Config::from_env();
        clear_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_invalid_timeout() {
        clear_env();
        std::env::set_var("BUILD_TIMEOUT_SECS", "soon");
        assert!(Config::from_env().is_err());
        std::env::set_var("BUILD_TIMEOUT_SECS", "0");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" a, b ,,c "), vec!["a", "b", "c"]);
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
