//! Content validation boundary.
//!
//! Raw authored JSON goes in, a typed document (or a `SchemaViolation`
//! listing every offending path) comes out. Nothing downstream of this module
//! ever sees an unvalidated value.
//!
//! # Example
//!
//! ```rust,ignore
//! use site_content::schema::{validate, ObjectShape, Shape, ValidationContext};
//!
//! let shape: Shape = ObjectShape::strict().required("title", Shape::Text).into();
//! let ctx = ValidationContext::new("hero").with_locale("en-GB");
//! let hero: Hero = validate(&raw, &shape, &ctx)?;
//! ```

mod shape;
mod violation;
mod walk;

pub use shape::{Field, ObjectShape, Shape, UnionShape};
pub use violation::{FieldPath, Violation, ViolationKind};

use crate::error::ContentError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// What is being validated, for error attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    pub document: String,
    pub locale: Option<String>,
}

impl ValidationContext {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            locale: None,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    fn violation_error(&self, violations: Vec<Violation>) -> ContentError {
        ContentError::SchemaViolation {
            locale: self.locale.clone().unwrap_or_else(|| "unknown".to_string()),
            document: self.document.clone(),
            violations,
        }
    }
}

/// Check `raw` against `shape`, returning the canonical value or every
/// violation found.
pub fn check_shape(raw: &Value, shape: &Shape) -> Result<Value, Vec<Violation>> {
    let mut violations = Vec::new();
    let canonical = walk::check(shape, raw, &FieldPath::root(), &mut violations);
    if violations.is_empty() {
        Ok(canonical)
    } else {
        Err(violations)
    }
}

/// Validate `raw` against `shape` and convert it into `T`.
pub fn validate<T: DeserializeOwned>(
    raw: &Value,
    shape: &Shape,
    ctx: &ValidationContext,
) -> Result<T, ContentError> {
    let canonical = check_shape(raw, shape).map_err(|v| ctx.violation_error(v))?;

    serde_json::from_value(canonical).map_err(|e| {
        ctx.violation_error(vec![Violation::new(
            FieldPath::root(),
            ViolationKind::Conversion(e.to_string()),
        )])
    })
}
