//! Error taxonomy for the content pipeline.
//!
//! Duplicate sections are deliberately absent: they are resolved silently by
//! the section normalizer and never surface as errors.

use crate::schema::Violation;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    /// No candidate locale produced a file for a page that requires one.
    #[error("no content for {page} (requested '{requested}', tried {candidates:?})")]
    MissingContent {
        page: String,
        requested: String,
        candidates: Vec<String>,
    },

    /// A matched file exists but is not valid JSON.
    #[error("malformed JSON in {}: {source}", .path.display())]
    MalformedContent {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Parsed JSON does not match the declared shape.
    #[error("{document} [{locale}] failed validation:\n{}", ViolationList(.violations))]
    SchemaViolation {
        locale: String,
        document: String,
        violations: Vec<Violation>,
    },

    /// A section discriminator with no renderer.
    #[error("unknown section type '{found}' (expected one of: {})", .expected.join(", "))]
    UnknownSectionType {
        found: String,
        expected: Vec<&'static str>,
    },

    #[error("content pattern '{pattern}' must contain exactly one {{locale}} placeholder")]
    InvalidPattern { pattern: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Violations carried by a schema error, empty for every other kind.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ContentError::SchemaViolation { violations, .. } => violations,
            _ => &[],
        }
    }

    pub fn is_schema_violation(&self) -> bool {
        matches!(self, ContentError::SchemaViolation { .. })
    }
}

struct ViolationList<'a>(&'a [Violation]);

impl fmt::Display for ViolationList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {violation}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldPath, ViolationKind};

    #[test]
    fn test_schema_violation_lists_every_path() {
        let err = ContentError::SchemaViolation {
            locale: "zh-TW".to_string(),
            document: "home".to_string(),
            violations: vec![
                Violation::new(FieldPath::root().key("hero").key("title"), ViolationKind::Missing),
                Violation::new(FieldPath::root().key("heroo"), ViolationKind::UnknownKey),
            ],
        };

        let msg = err.to_string();
        assert!(msg.contains("home [zh-TW]"));
        assert!(msg.contains("$.hero.title: missing required field"));
        assert!(msg.contains("$.heroo: unknown key"));
        assert_eq!(err.violations().len(), 2);
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_unknown_section_type_lists_expected() {
        let err = ContentError::UnknownSectionType {
            found: "carousel".to_string(),
            expected: vec!["cta", "prose"],
        };
        assert_eq!(
            err.to_string(),
            "unknown section type 'carousel' (expected one of: cta, prose)"
        );
        assert!(err.violations().is_empty());
    }

    #[test]
    fn test_invalid_pattern_message() {
        let err = ContentError::InvalidPattern {
            pattern: "content/home.json".to_string(),
        };
        assert!(err.to_string().contains("{locale}"));
    }
}
