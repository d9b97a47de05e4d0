//! Section discriminators and their validation shapes.
//!
//! `SectionKind`, the `Section` enum and the renderer table must stay in
//! lockstep. Every mapping here is an exhaustive `match`, so a new kind
//! cannot be added without a shape, and `Section::kind` cannot compile
//! without covering every variant.

use crate::error::ContentError;
use crate::schema::{ObjectShape, Shape, UnionShape};
use crate::sections::model::Section;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Discriminator key on every section.
pub const SECTION_TAG: &str = "type";

/// Older authored content names the discriminator `style`.
pub const SECTION_TAG_ALIAS: &str = "style";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Personas,
    Promo,
    Comparison,
    Steps,
    Topics,
    Services,
    Split,
    Accordion,
    FaqCta,
    Cta,
    Cards,
    Prose,
    Tools,
}

impl SectionKind {
    pub const ALL: [SectionKind; 13] = [
        SectionKind::Personas,
        SectionKind::Promo,
        SectionKind::Comparison,
        SectionKind::Steps,
        SectionKind::Topics,
        SectionKind::Services,
        SectionKind::Split,
        SectionKind::Accordion,
        SectionKind::FaqCta,
        SectionKind::Cta,
        SectionKind::Cards,
        SectionKind::Prose,
        SectionKind::Tools,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Personas => "personas",
            SectionKind::Promo => "promo",
            SectionKind::Comparison => "comparison",
            SectionKind::Steps => "steps",
            SectionKind::Topics => "topics",
            SectionKind::Services => "services",
            SectionKind::Split => "split",
            SectionKind::Accordion => "accordion",
            SectionKind::FaqCta => "faq-cta",
            SectionKind::Cta => "cta",
            SectionKind::Cards => "cards",
            SectionKind::Prose => "prose",
            SectionKind::Tools => "tools",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.as_str()).collect()
    }

    /// Strict object shape of this variant, excluding the discriminator.
    pub fn shape(self) -> ObjectShape {
        let base = ObjectShape::strict().optional("id", Shape::Text);
        match self {
            SectionKind::Personas => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .required(
                    "personas",
                    Shape::list(
                        ObjectShape::strict()
                            .required("name", Shape::Text)
                            .required("description", Shape::Text)
                            .optional("icon", Shape::Text),
                    ),
                ),
            SectionKind::Promo => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .optional("badge", Shape::Text)
                .required("cta", link()),
            SectionKind::Comparison => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .required("columns", Shape::list(Shape::Text))
                .required(
                    "rows",
                    Shape::list(
                        ObjectShape::strict()
                            .required("label", Shape::Text)
                            .required("values", Shape::list(Shape::Text)),
                    ),
                ),
            SectionKind::Steps => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .required(
                    "steps",
                    Shape::list(
                        ObjectShape::strict()
                            .required("title", Shape::Text)
                            .required("body", Shape::Text),
                    ),
                ),
            SectionKind::Topics => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .required("topics", Shape::list(Shape::Text)),
            SectionKind::Services => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .required(
                    "services",
                    Shape::list(
                        ObjectShape::strict()
                            .required("slug", Shape::Text)
                            .required("name", Shape::Text)
                            .required("summary", Shape::Text),
                    ),
                ),
            SectionKind::Split => base
                .required("title", Shape::Text)
                .required("body", Shape::Text)
                .required(
                    "image",
                    ObjectShape::strict()
                        .required("src", Shape::Text)
                        .required("alt", Shape::Text),
                )
                .optional("reverse", Shape::Bool),
            SectionKind::Accordion => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .required("items", Shape::list(question_answer())),
            SectionKind::FaqCta => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .required("faqs", Shape::list(question_answer()))
                .required("cta", link()),
            SectionKind::Cta => base
                .required("title", Shape::Text)
                .optional("body", Shape::Text)
                .required("primary", link())
                .optional("secondary", link()),
            SectionKind::Cards => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .required(
                    "cards",
                    Shape::list(
                        ObjectShape::strict()
                            .required("title", Shape::Text)
                            .required("body", Shape::Text)
                            .optional("href", Shape::Text),
                    ),
                ),
            SectionKind::Prose => base
                .optional("title", Shape::Text)
                .required("paragraphs", Shape::list(Shape::Text)),
            SectionKind::Tools => base
                .required("title", Shape::Text)
                .optional("lead", Shape::Text)
                .required(
                    "tools",
                    Shape::list(
                        ObjectShape::strict()
                            .required("name", Shape::Text)
                            .required("description", Shape::Text)
                            .optional("href", Shape::Text),
                    ),
                ),
        }
    }
}

impl SectionKind {
    /// Discriminator of a raw section value (`type`, else `style`).
    ///
    /// `Ok(None)` when there is no string discriminator at all; the schema
    /// walk reports that case with its path. A string naming no known kind
    /// is `UnknownSectionType`.
    pub fn of_value(value: &Value) -> Result<Option<SectionKind>, ContentError> {
        let tag = value
            .get(SECTION_TAG)
            .or_else(|| value.get(SECTION_TAG_ALIAS))
            .and_then(Value::as_str);
        tag.map(str::parse::<SectionKind>).transpose()
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ContentError::UnknownSectionType {
                found: s.to_string(),
                expected: SectionKind::names(),
            })
    }
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Personas(_) => SectionKind::Personas,
            Section::Promo(_) => SectionKind::Promo,
            Section::Comparison(_) => SectionKind::Comparison,
            Section::Steps(_) => SectionKind::Steps,
            Section::Topics(_) => SectionKind::Topics,
            Section::Services(_) => SectionKind::Services,
            Section::Split(_) => SectionKind::Split,
            Section::Accordion(_) => SectionKind::Accordion,
            Section::FaqCta(_) => SectionKind::FaqCta,
            Section::Cta(_) => SectionKind::Cta,
            Section::Cards(_) => SectionKind::Cards,
            Section::Prose(_) => SectionKind::Prose,
            Section::Tools(_) => SectionKind::Tools,
        }
    }
}

pub fn link() -> ObjectShape {
    ObjectShape::strict()
        .required("label", Shape::Text)
        .required("href", Shape::Text)
}

fn question_answer() -> ObjectShape {
    ObjectShape::strict()
        .required("question", Shape::Text)
        .required("answer", Shape::Text)
}

static SECTION_SHAPE: OnceLock<Shape> = OnceLock::new();

/// Discriminated union over every section kind.
pub fn section_shape() -> &'static Shape {
    SECTION_SHAPE.get_or_init(|| {
        SectionKind::ALL
            .into_iter()
            .fold(
                UnionShape::new(SECTION_TAG).alias(SECTION_TAG_ALIAS),
                |union, kind| union.variant(kind.as_str(), kind.shape()),
            )
            .into()
    })
}
