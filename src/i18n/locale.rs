//! Locale tags and the candidate chain used to resolve content.

use regex::Regex;
use std::sync::OnceLock;

static LOCALE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// Check that a tag looks like `en`, `en-GB`, `zh-Hant-TW` or `es-419`.
pub fn is_well_formed(tag: &str) -> bool {
    let regex = LOCALE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z]{2,3}(?:-[A-Z][a-z]{3})?(?:-(?:[A-Z]{2}|[0-9]{3}))?$").unwrap()
    });
    regex.is_match(tag)
}

/// Primary language subtag (`zh-TW` → `zh`), `None` for a bare language.
pub fn base_language(tag: &str) -> Option<&str> {
    tag.split_once('-').map(|(base, _)| base)
}

/// Build the ordered list of locales to try for a request.
///
/// The chain starts with `requested` (when present and different from
/// `fallback`) and always ends with `fallback`, which appears exactly once.
/// Blank input counts as no request.
///
/// # Arguments
/// * `requested` - Locale asked for by the caller, if any
/// * `fallback` - Locale guaranteed to have content
///
/// # Returns
/// A non-empty, duplicate-free list of locale codes.
pub fn candidate_chain(requested: Option<&str>, fallback: &str) -> Vec<String> {
    let fallback = fallback.trim();
    let mut chain = Vec::with_capacity(2);

    if let Some(requested) = requested.map(str::trim).filter(|r| !r.is_empty()) {
        if requested != fallback {
            chain.push(requested.to_string());
        }
    }

    chain.push(fallback.to_string());
    chain
}
