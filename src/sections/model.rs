//! Typed section records.
//!
//! Every struct mirrors one variant shape in `kind.rs`. JSON keys are
//! camelCase; `None` optionals are omitted on serialization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Persona {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonasSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub personas: Vec<Persona>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromoSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub cta: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSummary {
    pub slug: String,
    pub name: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicesSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub services: Vec<ServiceSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub body: String,
    pub image: Image,
    /// Image on the left instead of the right
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccordionSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub items: Vec<QuestionAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqCtaSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub faqs: Vec<QuestionAnswer>,
    pub cta: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CtaSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub primary: Link,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProseSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    pub tools: Vec<Tool>,
}

/// One block of page content, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Section {
    Personas(PersonasSection),
    Promo(PromoSection),
    Comparison(ComparisonSection),
    Steps(StepsSection),
    Topics(TopicsSection),
    Services(ServicesSection),
    Split(SplitSection),
    Accordion(AccordionSection),
    FaqCta(FaqCtaSection),
    Cta(CtaSection),
    Cards(CardsSection),
    Prose(ProseSection),
    Tools(ToolsSection),
}

impl Section {
    pub fn id(&self) -> Option<&str> {
        match self {
            Section::Personas(s) => s.id.as_deref(),
            Section::Promo(s) => s.id.as_deref(),
            Section::Comparison(s) => s.id.as_deref(),
            Section::Steps(s) => s.id.as_deref(),
            Section::Topics(s) => s.id.as_deref(),
            Section::Services(s) => s.id.as_deref(),
            Section::Split(s) => s.id.as_deref(),
            Section::Accordion(s) => s.id.as_deref(),
            Section::FaqCta(s) => s.id.as_deref(),
            Section::Cta(s) => s.id.as_deref(),
            Section::Cards(s) => s.id.as_deref(),
            Section::Prose(s) => s.id.as_deref(),
            Section::Tools(s) => s.id.as_deref(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Section::Personas(s) => Some(&s.title),
            Section::Promo(s) => Some(&s.title),
            Section::Comparison(s) => Some(&s.title),
            Section::Steps(s) => Some(&s.title),
            Section::Topics(s) => Some(&s.title),
            Section::Services(s) => Some(&s.title),
            Section::Split(s) => Some(&s.title),
            Section::Accordion(s) => Some(&s.title),
            Section::FaqCta(s) => Some(&s.title),
            Section::Cta(s) => Some(&s.title),
            Section::Cards(s) => Some(&s.title),
            Section::Prose(s) => s.title.as_deref(),
            Section::Tools(s) => Some(&s.title),
        }
    }

    /// Introductory text under the title, where the variant has one.
    pub fn lead(&self) -> Option<&str> {
        match self {
            Section::Personas(s) => s.lead.as_deref(),
            Section::Promo(s) => s.lead.as_deref(),
            Section::Comparison(s) => s.lead.as_deref(),
            Section::Steps(s) => s.lead.as_deref(),
            Section::Topics(s) => s.lead.as_deref(),
            Section::Services(s) => s.lead.as_deref(),
            Section::Split(s) => Some(&s.body),
            Section::Accordion(s) => s.lead.as_deref(),
            Section::FaqCta(s) => s.lead.as_deref(),
            Section::Cta(s) => s.body.as_deref(),
            Section::Cards(s) => s.lead.as_deref(),
            Section::Prose(_) => None,
            Section::Tools(s) => s.lead.as_deref(),
        }
    }

    /// First entry of the variant's main list, used as an identity of last
    /// resort before position.
    pub fn primary_item(&self) -> Option<&str> {
        match self {
            Section::Personas(s) => s.personas.first().map(|p| p.name.as_str()),
            Section::Promo(s) => Some(&s.cta.href),
            Section::Comparison(s) => s.columns.first().map(String::as_str),
            Section::Steps(s) => s.steps.first().map(|step| step.title.as_str()),
            Section::Topics(s) => s.topics.first().map(String::as_str),
            Section::Services(s) => s.services.first().map(|svc| svc.slug.as_str()),
            Section::Split(s) => Some(&s.image.src),
            Section::Accordion(s) => s.items.first().map(|qa| qa.question.as_str()),
            Section::FaqCta(s) => s.faqs.first().map(|qa| qa.question.as_str()),
            Section::Cta(s) => Some(&s.primary.href),
            Section::Cards(s) => s.cards.first().map(|c| c.title.as_str()),
            Section::Prose(s) => s.paragraphs.first().map(String::as_str),
            Section::Tools(s) => s.tools.first().map(|t| t.name.as_str()),
        }
    }
}
