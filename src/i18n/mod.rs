//! Locale handling for content resolution.
//!
//! # Architecture
//!
//! - `locale`: tag checks and the candidate chain (requested → fallback)
//! - `registry`: the explicit set of locales a build supports
//! - `strings`: built-in chrome strings, including the default fallback notice
//!
//! # Example
//!
//! ```rust,ignore
//! use site_content::i18n::{candidate_chain, LocaleRegistry};
//!
//! assert_eq!(candidate_chain(Some("zh-TW"), "en-GB"), vec!["zh-TW", "en-GB"]);
//!
//! let registry = LocaleRegistry::new("en-GB", &["zh-TW"])?;
//! let chain = registry.chain_for(Some("zh-TW"));
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::{base_language, candidate_chain, is_well_formed};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{UiStrings, ENGLISH_STRINGS, TRADITIONAL_CHINESE_STRINGS};
