//! Typed page documents.
//!
//! Every page shares `seo`, `hero`, `sections`, an optional closing `cta` and
//! an optional `fallbackNotice` override; page kinds add their own fields.

use crate::schema::{ObjectShape, Shape};
use crate::sections::{link, section_shape, Link, Section};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Seo {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Link>,
}

/// Closing call to action below the sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallToAction {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub primary: Link,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HomePage {
    pub seo: Seo,
    pub hero: Hero,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServicesPage {
    pub seo: Seo,
    pub hero: Hero,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceDetailPage {
    pub slug: String,
    pub summary: String,
    pub seo: Seo,
    pub hero: Hero,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourcesPage {
    pub seo: Seo,
    pub hero: Hero,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_notice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_posts_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactForm {
    pub name_label: String,
    pub email_label: String,
    pub message_label: String,
    pub submit_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactPage {
    pub seo: Seo,
    pub hero: Hero,
    pub form: ContactForm,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompanyValue {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutPage {
    pub seo: Seo,
    pub hero: Hero,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<CompanyValue>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_notice: Option<String>,
}

/// Any validated page document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageContent {
    Home(HomePage),
    Services(ServicesPage),
    ServiceDetail(ServiceDetailPage),
    Resources(ResourcesPage),
    Contact(ContactPage),
    About(AboutPage),
}

impl PageContent {
    pub fn seo(&self) -> &Seo {
        match self {
            PageContent::Home(p) => &p.seo,
            PageContent::Services(p) => &p.seo,
            PageContent::ServiceDetail(p) => &p.seo,
            PageContent::Resources(p) => &p.seo,
            PageContent::Contact(p) => &p.seo,
            PageContent::About(p) => &p.seo,
        }
    }

    pub fn hero(&self) -> &Hero {
        match self {
            PageContent::Home(p) => &p.hero,
            PageContent::Services(p) => &p.hero,
            PageContent::ServiceDetail(p) => &p.hero,
            PageContent::Resources(p) => &p.hero,
            PageContent::Contact(p) => &p.hero,
            PageContent::About(p) => &p.hero,
        }
    }

    pub fn sections(&self) -> &[Section] {
        match self {
            PageContent::Home(p) => &p.sections,
            PageContent::Services(p) => &p.sections,
            PageContent::ServiceDetail(p) => &p.sections,
            PageContent::Resources(p) => &p.sections,
            PageContent::Contact(p) => &p.sections,
            PageContent::About(p) => &p.sections,
        }
    }

    pub fn cta(&self) -> Option<&CallToAction> {
        match self {
            PageContent::Home(p) => p.cta.as_ref(),
            PageContent::Services(p) => p.cta.as_ref(),
            PageContent::ServiceDetail(p) => p.cta.as_ref(),
            PageContent::Resources(p) => p.cta.as_ref(),
            PageContent::Contact(p) => p.cta.as_ref(),
            PageContent::About(p) => p.cta.as_ref(),
        }
    }

    pub fn fallback_notice(&self) -> Option<&str> {
        match self {
            PageContent::Home(p) => p.fallback_notice.as_deref(),
            PageContent::Services(p) => p.fallback_notice.as_deref(),
            PageContent::ServiceDetail(p) => p.fallback_notice.as_deref(),
            PageContent::Resources(p) => p.fallback_notice.as_deref(),
            PageContent::Contact(p) => p.fallback_notice.as_deref(),
            PageContent::About(p) => p.fallback_notice.as_deref(),
        }
    }
}

// ==================== Shapes ====================

fn seo() -> ObjectShape {
    ObjectShape::strict()
        .required("title", Shape::Text)
        .required("description", Shape::Text)
}

fn hero() -> ObjectShape {
    ObjectShape::strict()
        .optional("eyebrow", Shape::Text)
        .required("title", Shape::Text)
        .optional("lead", Shape::Text)
        .optional("cta", link())
}

fn call_to_action() -> ObjectShape {
    ObjectShape::strict()
        .required("title", Shape::Text)
        .optional("body", Shape::Text)
        .required("primary", link())
        .optional("secondary", link())
}

/// Fields every page document carries.
pub(crate) fn common_shape() -> ObjectShape {
    ObjectShape::strict()
        .required("seo", seo())
        .required("hero", hero())
        .optional("sections", Shape::list(section_shape().clone()))
        .optional("cta", call_to_action())
        .optional("fallbackNotice", Shape::Text)
}

pub(crate) fn service_detail_shape() -> ObjectShape {
    common_shape()
        .required("slug", Shape::Text)
        .required("summary", Shape::Text)
}

pub(crate) fn resources_shape() -> ObjectShape {
    common_shape()
        .optional("postsHeading", Shape::Text)
        .optional("emptyPostsMessage", Shape::Text)
}

pub(crate) fn contact_shape() -> ObjectShape {
    common_shape().required(
        "form",
        ObjectShape::strict()
            .required("nameLabel", Shape::Text)
            .required("emailLabel", Shape::Text)
            .required("messageLabel", Shape::Text)
            .required("submitLabel", Shape::Text)
            .optional("successMessage", Shape::Text)
            .optional("privacyNote", Shape::Text),
    )
}

pub(crate) fn about_shape() -> ObjectShape {
    common_shape().optional(
        "values",
        Shape::list(
            ObjectShape::strict()
                .required("title", Shape::Text)
                .required("body", Shape::Text),
        ),
    )
}
