use crate::i18n::UiStrings;
use crate::pages::document::*;
use crate::schema::Shape;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

/// What a page does when the requested locale's document fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationPolicy {
    Fatal,
    /// Validate the fallback locale's document instead and show the notice.
    RetryFallback,
}

/// What a page does when no candidate locale has a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    Fatal,
    Placeholder,
}

/// A buildable page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Home,
    Services,
    ServiceDetail { slug: String },
    Resources,
    Contact,
    About,
}

static COMMON_SHAPE: OnceLock<Shape> = OnceLock::new();
static SERVICE_DETAIL_SHAPE: OnceLock<Shape> = OnceLock::new();
static RESOURCES_SHAPE: OnceLock<Shape> = OnceLock::new();
static CONTACT_SHAPE: OnceLock<Shape> = OnceLock::new();
static ABOUT_SHAPE: OnceLock<Shape> = OnceLock::new();

impl Page {
    /// Every page without a slug, in build order.
    pub const FIXED: [Page; 5] = [
        Page::Home,
        Page::Services,
        Page::Resources,
        Page::Contact,
        Page::About,
    ];

    pub fn service(slug: impl Into<String>) -> Self {
        Page::ServiceDetail { slug: slug.into() }
    }

    /// Name used in logs, errors and the build manifest.
    pub fn name(&self) -> String {
        match self {
            Page::Home => "home".to_string(),
            Page::Services => "services".to_string(),
            Page::ServiceDetail { slug } => format!("services/{slug}"),
            Page::Resources => "resources".to_string(),
            Page::Contact => "contact".to_string(),
            Page::About => "about".to_string(),
        }
    }

    /// Content pattern relative to the content root.
    pub fn pattern(&self) -> String {
        match self {
            Page::ServiceDetail { slug } => format!("services/{slug}.{{locale}}.json"),
            _ => format!("{}/{{locale}}.json", self.name()),
        }
    }

    /// Output file relative to the build output root.
    pub fn output_path(&self, locale: &str) -> PathBuf {
        PathBuf::from(locale).join(format!("{}.html", self.name()))
    }

    pub fn on_violation(&self) -> ViolationPolicy {
        match self {
            Page::Home | Page::Resources | Page::Services => ViolationPolicy::RetryFallback,
            Page::ServiceDetail { .. } | Page::Contact | Page::About => ViolationPolicy::Fatal,
        }
    }

    pub fn on_missing(&self) -> MissingPolicy {
        match self {
            Page::Resources => MissingPolicy::Placeholder,
            Page::Home
            | Page::Services
            | Page::ServiceDetail { .. }
            | Page::Contact
            | Page::About => MissingPolicy::Fatal,
        }
    }

    pub fn shape(&self) -> &'static Shape {
        match self {
            Page::Home | Page::Services => COMMON_SHAPE.get_or_init(|| common_shape().into()),
            Page::ServiceDetail { .. } => {
                SERVICE_DETAIL_SHAPE.get_or_init(|| service_detail_shape().into())
            }
            Page::Resources => RESOURCES_SHAPE.get_or_init(|| resources_shape().into()),
            Page::Contact => CONTACT_SHAPE.get_or_init(|| contact_shape().into()),
            Page::About => ABOUT_SHAPE.get_or_init(|| about_shape().into()),
        }
    }

    /// Stand-in document for pages whose policy allows missing content.
    pub fn placeholder(&self, strings: &UiStrings) -> Option<PageContent> {
        match self.on_missing() {
            MissingPolicy::Fatal => None,
            MissingPolicy::Placeholder => Some(PageContent::Resources(ResourcesPage {
                seo: Seo {
                    title: strings.resources_title.to_string(),
                    description: String::new(),
                },
                hero: Hero {
                    eyebrow: None,
                    title: strings.resources_title.to_string(),
                    lead: None,
                    cta: None,
                },
                sections: Vec::new(),
                cta: None,
                fallback_notice: None,
                posts_heading: None,
                empty_posts_message: None,
            })),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
