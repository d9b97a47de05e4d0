//! Locale registry: the set of locales a build supports.
//!
//! A registry is an explicit value built from configuration and passed to
//! whoever resolves content. There is no global instance.

use crate::i18n::locale::{base_language, candidate_chain, is_well_formed};
use anyhow::{bail, Result};
use tracing::debug;

/// Configuration for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Locale tag (e.g., "en-GB", "zh-TW")
    pub code: String,

    /// English name of the locale (e.g., "English (UK)")
    pub name: &'static str,

    /// Native name of the locale (e.g., "繁體中文")
    pub native_name: &'static str,

    /// Whether this is the default/fallback locale (exactly one is)
    pub is_default: bool,
}

/// Known display names; unknown tags get empty names.
fn display_names(code: &str) -> (&'static str, &'static str) {
    match code {
        "en" => ("English", "English"),
        "en-GB" => ("English (UK)", "English (UK)"),
        "en-US" => ("English (US)", "English (US)"),
        "zh" => ("Chinese", "中文"),
        "zh-TW" => ("Traditional Chinese", "繁體中文"),
        "zh-HK" => ("Traditional Chinese (Hong Kong)", "繁體中文（香港）"),
        "zh-CN" => ("Simplified Chinese", "简体中文"),
        "ja" => ("Japanese", "日本語"),
        _ => ("", ""),
    }
}

#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

impl LocaleRegistry {
    /// Build a registry from the default locale and the supported list.
    ///
    /// The default locale is always included (first), duplicates are
    /// dropped and every tag must be well formed.
    ///
    /// # Arguments
    /// * `default_locale` - The fallback locale (e.g., "en-GB")
    /// * `supported` - Every locale the site is built for
    pub fn new<S: AsRef<str>>(default_locale: &str, supported: &[S]) -> Result<Self> {
        let default_locale = default_locale.trim();
        if !is_well_formed(default_locale) {
            bail!("Invalid default locale: '{}'", default_locale);
        }

        let mut locales = vec![Self::entry(default_locale, true)];
        for code in supported.iter().map(|s| s.as_ref().trim()) {
            if code.is_empty() {
                continue;
            }
            if !is_well_formed(code) {
                bail!("Invalid locale in supported list: '{}'", code);
            }
            if locales.iter().any(|l| l.code == code) {
                continue;
            }
            locales.push(Self::entry(code, false));
        }

        Ok(Self { locales })
    }

    fn entry(code: &str, is_default: bool) -> LocaleConfig {
        let (name, native_name) = display_names(code);
        LocaleConfig {
            code: code.to_string(),
            name,
            native_name,
            is_default,
        }
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|l| l.code == code)
    }

    /// Every supported locale, default first.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Codes of every supported locale, default first.
    pub fn codes(&self) -> Vec<&str> {
        self.locales.iter().map(|l| l.code.as_str()).collect()
    }

    /// The fallback locale.
    pub fn default_locale(&self) -> &str {
        // `new` always seeds the default at index 0.
        &self.locales[0].code
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Candidate chain for a request, widened with the supported base
    /// language of a regional tag (`zh-TW` → `zh`) before the fallback.
    ///
    /// Unsupported requests are still tried first; content may exist for a
    /// locale the build does not list.
    pub fn chain_for(&self, requested: Option<&str>) -> Vec<String> {
        let mut chain = candidate_chain(requested, self.default_locale());

        if chain.len() > 1 {
            let requested = chain[0].clone();
            if !self.is_supported(&requested) {
                debug!("Requested locale '{}' is not in the supported list", requested);
            }
            if let Some(base) = base_language(&requested) {
                if self.is_supported(base) && !chain.iter().any(|c| c == base) {
                    let at = chain.len() - 1;
                    chain.insert(at, base.to_string());
                }
            }
        }

        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::new("en-GB", &["en-GB", "zh-TW"]).unwrap()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_default_locale_first_and_unique() {
        let registry = registry();
        assert_eq!(registry.codes(), vec!["en-GB", "zh-TW"]);
        assert_eq!(registry.default_locale(), "en-GB");
        assert!(registry.list()[0].is_default);
        assert!(!registry.list()[1].is_default);
    }

    #[test]
    fn test_default_included_when_not_listed() {
        let registry = LocaleRegistry::new("en-GB", &["zh-TW"]).unwrap();
        assert_eq!(registry.codes(), vec!["en-GB", "zh-TW"]);
    }

    #[test]
    fn test_empty_entries_skipped() {
        let registry = LocaleRegistry::new("en-GB", &["", " zh-TW ", "zh-TW"]).unwrap();
        assert_eq!(registry.codes(), vec!["en-GB", "zh-TW"]);
    }

    #[test]
    fn test_invalid_default_rejected() {
        let result = LocaleRegistry::new("english", &["zh-TW"]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid default locale"));
    }

    #[test]
    fn test_invalid_supported_rejected() {
        let result = LocaleRegistry::new("en-GB", &["zh_TW"]);
        assert!(result.unwrap_err().to_string().contains("zh_TW"));
    }

    #[test]
    fn test_display_names() {
        let registry = registry();
        let zh = registry.get_by_code("zh-TW").unwrap();
        assert_eq!(zh.native_name, "繁體中文");
        assert!(registry.get_by_code("fr").is_none());
    }

    // ==================== Chain Tests ====================

    #[test]
    fn test_chain_for_supported_locale() {
        assert_eq!(registry().chain_for(Some("zh-TW")), vec!["zh-TW", "en-GB"]);
    }

    #[test]
    fn test_chain_for_default_locale() {
        assert_eq!(registry().chain_for(Some("en-GB")), vec!["en-GB"]);
        assert_eq!(registry().chain_for(None), vec!["en-GB"]);
    }

    #[test]
    fn test_chain_inserts_supported_base_language() {
        let registry = LocaleRegistry::new("en-GB", &["zh", "zh-TW"]).unwrap();
        assert_eq!(registry.chain_for(Some("zh-TW")), vec!["zh-TW", "zh", "en-GB"]);
    }

    #[test]
    fn test_chain_skips_unsupported_base_language() {
        assert_eq!(registry().chain_for(Some("zh-HK")), vec!["zh-HK", "en-GB"]);
    }

    #[test]
    fn test_chain_does_not_duplicate_fallback_base() {
        let registry = LocaleRegistry::new("en", &["en-GB"]).unwrap();
        assert_eq!(registry.chain_for(Some("en-GB")), vec!["en-GB", "en"]);
    }
}
