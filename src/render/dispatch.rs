//! Dispatch from raw authored JSON to a section renderer.

use super::html::Markup;
use super::sections::{render_anchored, render_section};
use crate::error::ContentError;
use crate::schema::{validate, ValidationContext};
use crate::sections::{section_shape, AnchorSet, Section, SectionKey, SectionKind};
use serde_json::Value;
use tracing::error;

/// Validate one raw section and render it.
///
/// An unknown discriminator is rejected as `UnknownSectionType` before any
/// field-level validation, so misconfigured content never renders as blank
/// space.
///
/// # Arguments
/// * `value` - Raw section JSON, discriminated by `type` (or `style`)
/// * `index` - Position in the authored list, used when no identity key exists
/// * `ctx` - Document and locale the section came from
pub fn dispatch_value(
    value: &Value,
    index: usize,
    ctx: &ValidationContext,
) -> Result<Markup, ContentError> {
    let section = check_section(value, ctx)?;
    Ok(render_section(&section, &SectionKey::derive(&section, index)))
}

/// Render a list of raw sections, failing on the first bad one. Anchors are
/// unique across the list.
pub fn dispatch_all(values: &[Value], ctx: &ValidationContext) -> Result<Vec<Markup>, ContentError> {
    let mut anchors = AnchorSet::new();
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let section = check_section(value, ctx)?;
            let anchor = anchors.claim(&SectionKey::derive(&section, index));
            Ok(render_anchored(&section, &anchor, ""))
        })
        .collect()
}

fn check_section(value: &Value, ctx: &ValidationContext) -> Result<Section, ContentError> {
    if let Err(e) = SectionKind::of_value(value) {
        error!("{} [{}]: {}", ctx.document, ctx.locale.as_deref().unwrap_or("unknown"), e);
        return Err(e);
    }
    validate(value, section_shape(), ctx)
}
