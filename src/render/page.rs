//! Whole-page rendering.

use super::html::{HtmlWriter, Markup};
use super::sections::render_keyed;
use crate::i18n::UiStrings;
use crate::pages::{CallToAction, Hero, LoadedPage, PageContent};
use crate::sections::SectionNormalizer;

/// Render a loaded page to a complete HTML document.
///
/// Sections are normalized here, once per document. The fallback notice is
/// written in the requested locale; the rest of the page carries the
/// language of the content that was actually served.
pub fn render_page(page: &LoadedPage, normalizer: &SectionNormalizer) -> Markup {
    let strings = UiStrings::for_locale(&page.requested_locale);
    let seo = page.content.seo();

    let mut w = HtmlWriter::new();
    w.doctype().line();
    w.open("html", &[("lang", page.content_locale())]).line();
    w.open("head", &[])
        .void("meta", &[("charset", "utf-8")])
        .open("title", &[])
        .text(&seo.title)
        .close("title")
        .void("meta", &[("name", "description"), ("content", seo.description.as_str())])
        .close("head")
        .line();

    w.open("body", &[("data-page", page.page.as_str())]).line();
    w.open("a", &[("class", "skip-link"), ("href", "#main")])
        .text(strings.skip_to_content)
        .close("a")
        .line();
    w.open("main", &[("id", "main")]).line();

    if let Some(notice) = page.notice() {
        w.open(
            "div",
            &[
                ("class", "fallback-notice"),
                ("role", "status"),
                ("lang", page.requested_locale.as_str()),
            ],
        )
        .text(notice)
        .close("div")
        .line();
    }

    hero(&mut w, page.content.hero());
    body(&mut w, &page.content, strings);

    let root = locale_root(&page.page);
    for keyed in normalizer.normalize_keyed(page.content.sections()) {
        w.raw(&render_keyed(&keyed, &root)).line();
    }

    if let Some(cta) = page.content.cta() {
        closing_cta(&mut w, cta);
    }

    w.close("main").line().close("body").line().close("html").line();
    w.finish()
}

/// Relative path from a page's output file back to its locale directory.
fn locale_root(page: &str) -> String {
    "../".repeat(page.matches('/').count())
}

fn hero(w: &mut HtmlWriter, hero: &Hero) {
    w.open("header", &[("class", "hero")]);
    w.optional("p", "hero__eyebrow", hero.eyebrow.as_deref())
        .element("h1", "hero__title", &hero.title)
        .optional("p", "hero__lead", hero.lead.as_deref());
    if let Some(cta) = &hero.cta {
        w.link("button button--primary", cta);
    }
    w.close("header").line();
}

/// Page-specific content between the hero and the sections.
fn body(w: &mut HtmlWriter, content: &PageContent, strings: &UiStrings) {
    match content {
        PageContent::Home(_) | PageContent::Services(_) => {}
        PageContent::ServiceDetail(p) => {
            w.element("p", "service-detail__summary", &p.summary).line();
        }
        PageContent::Resources(p) => {
            w.open("section", &[("id", "posts"), ("class", "posts")])
                .element(
                    "h2",
                    "posts__heading",
                    p.posts_heading.as_deref().unwrap_or(strings.posts_heading),
                )
                .element(
                    "p",
                    "posts__empty",
                    p.empty_posts_message.as_deref().unwrap_or(strings.empty_posts),
                )
                .close("section")
                .line();
        }
        PageContent::Contact(p) => {
            let form = &p.form;
            w.open("form", &[("class", "contact-form"), ("method", "post")]);
            for (name, label, kind) in [
                ("name", &form.name_label, "text"),
                ("email", &form.email_label, "email"),
            ] {
                w.open("label", &[("class", "contact-form__field")])
                    .text(label)
                    .void("input", &[("type", kind), ("name", name), ("required", "")])
                    .close("label");
            }
            w.open("label", &[("class", "contact-form__field")])
                .text(&form.message_label)
                .open("textarea", &[("name", "message"), ("required", "")])
                .close("textarea")
                .close("label");
            w.optional("p", "contact-form__privacy", form.privacy_note.as_deref());
            w.open("button", &[("type", "submit"), ("class", "button button--primary")])
                .text(&form.submit_label)
                .close("button");
            if let Some(success) = &form.success_message {
                w.open(
                    "p",
                    &[("class", "contact-form__success"), ("hidden", ""), ("role", "status")],
                )
                .text(success)
                .close("p");
            }
            w.close("form").line();
        }
        PageContent::About(p) => {
            if !p.values.is_empty() {
                w.open("ul", &[("class", "values")]);
                for value in &p.values {
                    w.open("li", &[("class", "value")])
                        .element("h3", "value__title", &value.title)
                        .element("p", "value__body", &value.body)
                        .close("li");
                }
                w.close("ul").line();
            }
        }
    }
}

fn closing_cta(w: &mut HtmlWriter, cta: &CallToAction) {
    w.open("aside", &[("class", "page-cta")])
        .element("h2", "page-cta__title", &cta.title)
        .optional("p", "page-cta__body", cta.body.as_deref())
        .link("button button--primary", &cta.primary);
    if let Some(secondary) = &cta.secondary {
        w.link("button button--secondary", secondary);
    }
    w.close("aside").line();
}
