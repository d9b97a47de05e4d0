use serde::Serialize;

/// Outcome of resolving a locale-keyed content file.
///
/// `data` and `used_locale` are either both present or both absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResolution<T> {
    pub data: Option<T>,
    pub used_locale: Option<String>,
    pub requested_locale: String,
    pub fallback_locale: String,
}

impl<T> ContentResolution<T> {
    pub fn found(data: T, used_locale: &str, requested_locale: &str, fallback_locale: &str) -> Self {
        Self {
            data: Some(data),
            used_locale: Some(used_locale.to_string()),
            requested_locale: requested_locale.to_string(),
            fallback_locale: fallback_locale.to_string(),
        }
    }

    pub fn missing(requested_locale: &str, fallback_locale: &str) -> Self {
        Self {
            data: None,
            used_locale: None,
            requested_locale: requested_locale.to_string(),
            fallback_locale: fallback_locale.to_string(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.data.is_some()
    }

    /// True when content was found, but not in the requested locale.
    pub fn is_fallback(&self) -> bool {
        self.used_locale
            .as_deref()
            .is_some_and(|used| used != self.requested_locale)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ContentResolution<U> {
        ContentResolution {
            data: self.data.map(f),
            used_locale: self.used_locale,
            requested_locale: self.requested_locale,
            fallback_locale: self.fallback_locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_in_requested_locale() {
        let res = ContentResolution::found(1, "zh-TW", "zh-TW", "en-GB");
        assert!(res.is_found());
        assert!(!res.is_fallback());
    }

    #[test]
    fn test_found_in_fallback_locale() {
        let res = ContentResolution::found(1, "en-GB", "zh-TW", "en-GB");
        assert!(res.is_fallback());
        assert_eq!(res.used_locale.as_deref(), Some("en-GB"));
    }

    #[test]
    fn test_missing_is_not_fallback() {
        let res: ContentResolution<u8> = ContentResolution::missing("zh-TW", "en-GB");
        assert!(!res.is_found());
        assert!(!res.is_fallback());
        assert!(res.used_locale.is_none());
    }

    #[test]
    fn test_map_keeps_locales() {
        let res = ContentResolution::found(2, "en-GB", "zh-TW", "en-GB").map(|n| n * 10);
        assert_eq!(res.data, Some(20));
        assert_eq!(res.requested_locale, "zh-TW");
        assert_eq!(res.fallback_locale, "en-GB");
    }

    #[test]
    fn test_serializes_camel_case() {
        let res = ContentResolution::found("x", "en-GB", "zh-TW", "en-GB");
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["usedLocale"], "en-GB");
        assert_eq!(json["requestedLocale"], "zh-TW");
        assert_eq!(json["fallbackLocale"], "en-GB");
    }
}
