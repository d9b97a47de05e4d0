//! One renderer per section variant.
//!
//! Renderers are pure: same section in, same markup out. No I/O, no locale
//! lookups, no validation.

use super::html::{HtmlWriter, Markup};
use crate::sections::*;

/// Render a section inside its `<section>` wrapper, keyed by `key`, for a
/// page at the locale root.
pub fn render_section(section: &Section, key: &SectionKey) -> Markup {
    render_anchored(section, &key.anchor(), "")
}

/// Render normalizer output. `root` is the relative path from the page back
/// to its locale root (`""` or `"../"`).
pub fn render_keyed(keyed: &KeyedSection, root: &str) -> Markup {
    render_anchored(&keyed.section, &keyed.anchor, root)
}

pub(crate) fn render_anchored(section: &Section, anchor: &str, root: &str) -> Markup {
    let class = format!("section section--{}", section.kind());

    let mut w = HtmlWriter::new();
    w.open(
        "section",
        &[
            ("id", anchor),
            ("class", class.as_str()),
            ("data-section-key", anchor),
        ],
    );
    match section {
        Section::Personas(s) => personas(&mut w, s),
        Section::Promo(s) => promo(&mut w, s),
        Section::Comparison(s) => comparison(&mut w, s),
        Section::Steps(s) => steps(&mut w, s),
        Section::Topics(s) => topics(&mut w, s),
        Section::Services(s) => services(&mut w, s, root),
        Section::Split(s) => split(&mut w, s),
        Section::Accordion(s) => accordion(&mut w, s),
        Section::FaqCta(s) => faq_cta(&mut w, s),
        Section::Cta(s) => cta(&mut w, s),
        Section::Cards(s) => cards(&mut w, s),
        Section::Prose(s) => prose(&mut w, s),
        Section::Tools(s) => tools(&mut w, s),
    }
    w.close("section");
    w.finish()
}

fn heading(w: &mut HtmlWriter, title: &str, lead: Option<&str>) {
    w.element("h2", "section__title", title);
    w.optional("p", "section__lead", lead);
}

fn personas(w: &mut HtmlWriter, s: &PersonasSection) {
    heading(w, &s.title, s.lead.as_deref());
    w.open("ul", &[("class", "personas")]);
    for persona in &s.personas {
        w.open("li", &[("class", "persona")]);
        if let Some(icon) = &persona.icon {
            w.open("span", &[("class", "persona__icon"), ("data-icon", icon.as_str())])
                .close("span");
        }
        w.element("h3", "persona__name", &persona.name)
            .element("p", "persona__description", &persona.description)
            .close("li");
    }
    w.close("ul");
}

fn promo(w: &mut HtmlWriter, s: &PromoSection) {
    w.optional("span", "promo__badge", s.badge.as_deref());
    heading(w, &s.title, s.lead.as_deref());
    w.link("button button--primary", &s.cta);
}

fn comparison(w: &mut HtmlWriter, s: &ComparisonSection) {
    heading(w, &s.title, s.lead.as_deref());
    w.open("table", &[("class", "comparison")]).open("thead", &[]).open("tr", &[]);
    w.open("th", &[("scope", "col")]).close("th");
    for column in &s.columns {
        w.open("th", &[("scope", "col")]).text(column).close("th");
    }
    w.close("tr").close("thead").open("tbody", &[]);
    for row in &s.rows {
        w.open("tr", &[]);
        w.open("th", &[("scope", "row")]).text(&row.label).close("th");
        for value in &row.values {
            w.open("td", &[]).text(value).close("td");
        }
        w.close("tr");
    }
    w.close("tbody").close("table");
}

fn steps(w: &mut HtmlWriter, s: &StepsSection) {
    heading(w, &s.title, s.lead.as_deref());
    w.open("ol", &[("class", "steps")]);
    for step in &s.steps {
        w.open("li", &[("class", "step")])
            .element("h3", "step__title", &step.title)
            .element("p", "step__body", &step.body)
            .close("li");
    }
    w.close("ol");
}

fn topics(w: &mut HtmlWriter, s: &TopicsSection) {
    heading(w, &s.title, s.lead.as_deref());
    w.open("ul", &[("class", "topics")]);
    for topic in &s.topics {
        w.element("li", "topic", topic);
    }
    w.close("ul");
}

fn services(w: &mut HtmlWriter, s: &ServicesSection, root: &str) {
    heading(w, &s.title, s.lead.as_deref());
    w.open("ul", &[("class", "services")]);
    for service in &s.services {
        let href = format!("{}services/{}.html", root, service.slug);
        w.open("li", &[("class", "service")])
            .open("a", &[("class", "service__link"), ("href", href.as_str())])
            .element("h3", "service__name", &service.name)
            .close("a")
            .element("p", "service__summary", &service.summary)
            .close("li");
    }
    w.close("ul");
}

fn split(w: &mut HtmlWriter, s: &SplitSection) {
    let class = if s.reverse { "split split--reverse" } else { "split" };
    w.open("div", &[("class", class)]);
    w.open("div", &[("class", "split__text")]);
    heading(w, &s.title, None);
    w.element("p", "split__body", &s.body).close("div");
    w.open("figure", &[("class", "split__media")])
        .void("img", &[("src", s.image.src.as_str()), ("alt", s.image.alt.as_str())])
        .close("figure")
        .close("div");
}

fn questions(w: &mut HtmlWriter, items: &[QuestionAnswer]) {
    w.open("div", &[("class", "accordion")]);
    for item in items {
        w.open("details", &[("class", "accordion__item")])
            .element("summary", "accordion__question", &item.question)
            .element("p", "accordion__answer", &item.answer)
            .close("details");
    }
    w.close("div");
}

fn accordion(w: &mut HtmlWriter, s: &AccordionSection) {
    heading(w, &s.title, s.lead.as_deref());
    questions(w, &s.items);
}

fn faq_cta(w: &mut HtmlWriter, s: &FaqCtaSection) {
    heading(w, &s.title, s.lead.as_deref());
    questions(w, &s.faqs);
    w.link("button button--primary", &s.cta);
}

fn cta(w: &mut HtmlWriter, s: &CtaSection) {
    heading(w, &s.title, s.body.as_deref());
    w.open("div", &[("class", "cta__actions")])
        .link("button button--primary", &s.primary);
    if let Some(secondary) = &s.secondary {
        w.link("button button--secondary", secondary);
    }
    w.close("div");
}

fn cards(w: &mut HtmlWriter, s: &CardsSection) {
    heading(w, &s.title, s.lead.as_deref());
    w.open("div", &[("class", "cards")]);
    for card in &s.cards {
        w.open("article", &[("class", "card")]);
        match &card.href {
            Some(href) => {
                w.open("h3", &[("class", "card__title")])
                    .open("a", &[("href", href.as_str())])
                    .text(&card.title)
                    .close("a")
                    .close("h3");
            }
            None => {
                w.element("h3", "card__title", &card.title);
            }
        }
        w.element("p", "card__body", &card.body).close("article");
    }
    w.close("div");
}

fn prose(w: &mut HtmlWriter, s: &ProseSection) {
    if let Some(title) = &s.title {
        w.element("h2", "section__title", title);
    }
    for paragraph in &s.paragraphs {
        w.element("p", "prose__paragraph", paragraph);
    }
}

fn tools(w: &mut HtmlWriter, s: &ToolsSection) {
    heading(w, &s.title, s.lead.as_deref());
    w.open("ul", &[("class", "tools")]);
    for tool in &s.tools {
        w.open("li", &[("class", "tool")]);
        match &tool.href {
            Some(href) => {
                w.open("a", &[("class", "tool__name"), ("href", href.as_str())])
                    .text(&tool.name)
                    .close("a");
            }
            None => {
                w.element("span", "tool__name", &tool.name);
            }
        }
        w.element("p", "tool__description", &tool.description)
            .close("li");
    }
    w.close("ul");
}
