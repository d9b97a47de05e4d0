//! Locale-aware content pipeline for a multi-locale marketing site.
//!
//! Requested locale → candidate chain → content file → validated document →
//! normalized sections → HTML, with a visible notice whenever the content
//! came from a locale other than the one requested.

pub mod build;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod metrics;
pub mod pages;
pub mod render;
pub mod schema;
pub mod sections;

pub use error::ContentError;
