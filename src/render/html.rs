//! Minimal HTML writer.
//!
//! All text and attribute values pass through `html-escape`; the only way to
//! insert unescaped markup is appending another `Markup`.

use crate::sections::Link;
use std::fmt;

/// Rendered, already-escaped HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
pub(crate) struct HtmlWriter {
    buf: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf
                .push_str(&html_escape::encode_double_quoted_attribute(value));
            self.buf.push('"');
        }
        self.buf.push('>');
        self
    }

    pub fn doctype(&mut self) -> &mut Self {
        self.buf.push_str("<!DOCTYPE html>");
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&html_escape::encode_text(text));
        self
    }

    /// `<tag class="..">text</tag>`
    pub fn element(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.open(tag, &[("class", class)]).text(text).close(tag)
    }

    pub fn optional(&mut self, tag: &str, class: &str, text: Option<&str>) -> &mut Self {
        if let Some(text) = text {
            self.element(tag, class, text);
        }
        self
    }

    pub fn link(&mut self, class: &str, link: &Link) -> &mut Self {
        self.open("a", &[("class", class), ("href", link.href.as_str())])
            .text(&link.label)
            .close("a")
    }

    /// Void element such as `<img>` or `<meta>`.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open(tag, attrs)
    }

    pub fn raw(&mut self, markup: &Markup) -> &mut Self {
        self.buf.push_str(markup.as_str());
        self
    }

    pub fn line(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn finish(self) -> Markup {
        Markup(self.buf)
    }
}
