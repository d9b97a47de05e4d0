//! Locale-keyed content files and their resolution outcome.

mod loader;
mod resolution;

pub use loader::{ContentLoader, LOCALE_PLACEHOLDER};
pub use resolution::ContentResolution;
