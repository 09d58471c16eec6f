// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Minimal element model for rendered rows.
//!
//! An [`Element`] is a root container: a tag, one class, a fixed list of
//! attributes and the markup placed inside it. Rows never build a full node
//! tree. Anchors are discovered from the inner markup when a click needs to
//! be matched against them.

use std::{fmt::Write, sync::LazyLock};

use regex::{Captures, Regex};

use crate::template::compile::escape_html;

/// Attribute list of an opening tag. Quoted values may contain `>`.
pub(crate) const TAG_ATTRIBUTES: &str =
    r#"((?:\s+[^\s=>]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+))?)*)\s*/?"#;

static ANCHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?i)<a{TAG_ATTRIBUTES}>")).unwrap());

static CHARACTER_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]{1,7})|#[xX]([0-9A-Fa-f]{1,6})|([A-Za-z]+));").unwrap()
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .unwrap()
});

/// An anchor nested inside an element's markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Zero-based position of the anchor among the element's anchors.
    pub ordinal: usize,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    class: Option<String>,
    attributes: Vec<(String, String)>,
    inner_html: String,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            attributes: vec![],
            inner_html: String::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replaces the element's content, leaving tag and attributes alone.
    pub fn set_inner_html(&mut self, markup: impl Into<String>) {
        self.inner_html = markup.into();
    }

    /// Serializes the element, content included.
    pub fn outer_html(&self) -> String {
        let mut out = format!("<{}", self.tag);
        if let Some(class) = &self.class {
            let _ = write!(out, " class=\"{}\"", escape_html(class));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        let _ = write!(out, ">{}</{}>", self.inner_html, self.tag);
        out
    }

    /// Anchors found in the element's content, in document order.
    pub fn anchors(&self) -> Vec<Anchor> {
        ANCHOR_TAG
            .captures_iter(&self.inner_html)
            .enumerate()
            .map(|(ordinal, tag)| {
                let href = tag
                    .get(1)
                    .map(|attrs| parse_attributes(attrs.as_str()))
                    .and_then(|attrs| {
                        attrs
                            .into_iter()
                            .find(|(k, _)| k.eq_ignore_ascii_case("href"))
                            .map(|(_, v)| v)
                    });
                Anchor { ordinal, href }
            })
            .collect()
    }

    pub fn anchor(&self, ordinal: usize) -> Option<Anchor> {
        self.anchors().into_iter().nth(ordinal)
    }

    /// Whether `anchor` is one of this element's anchors.
    pub fn contains_anchor(&self, anchor: &Anchor) -> bool {
        self.anchor(anchor.ordinal).as_ref() == Some(anchor)
    }
}

/// Parses the attribute list of an opening tag into name/value pairs.
///
/// Character references in values are decoded. Attributes without a value
/// map to an empty string.
pub(crate) fn parse_attributes(source: &str) -> Vec<(String, String)> {
    ATTRIBUTE
        .captures_iter(source)
        .map(|c| {
            let value = c
                .get(2)
                .or_else(|| c.get(3))
                .or_else(|| c.get(4))
                .map(|v| unescape_html(v.as_str()))
                .unwrap_or_default();
            (c[1].to_string(), value)
        })
        .collect()
}

/// Decodes numeric character references and the common named entities in
/// one pass. Anything unrecognised is left as written.
fn unescape_html(text: &str) -> String {
    CHARACTER_REFERENCE
        .replace_all(text, |c: &Captures| {
            let decoded = if let Some(dec) = c.get(1) {
                dec.as_str().parse().ok().and_then(char::from_u32).filter(|c| *c != '\0')
            } else if let Some(hex) = c.get(2) {
                u32::from_str_radix(hex.as_str(), 16)
                    .ok()
                    .and_then(char::from_u32)
                    .filter(|c| *c != '\0')
            } else {
                match &c[3] {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    _ => None,
                }
            };

            decoded.map_or_else(|| c[0].to_string(), String::from)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(markup: &str) -> Element {
        let mut element = Element::new("li").with_class("search-results-item");
        element.set_inner_html(markup);
        element
    }

    #[test]
    fn outer_html_includes_class_and_attributes() {
        let mut element = Element::new("li")
            .with_class("search-results-item")
            .with_attribute("role", "region")
            .with_attribute("aria-label", "search result");
        element.set_inner_html("<p>x</p>");

        assert_eq!(
            element.outer_html(),
            r#"<li class="search-results-item" role="region" aria-label="search result"><p>x</p></li>"#
        );
    }

    #[test]
    fn finds_anchors_in_document_order() {
        let element = row(r#"<a class="title" href="/course/r1">Title</a> <a href='/about'>About</a>"#);

        assert_eq!(
            element.anchors(),
            vec![
                Anchor { ordinal: 0, href: Some("/course/r1".into()) },
                Anchor { ordinal: 1, href: Some("/about".into()) },
            ]
        );
    }

    #[test]
    fn anchor_without_href() {
        let element = row("<a>plain</a><abbr>not an anchor</abbr><A HREF=/x>x</A>");

        assert_eq!(
            element.anchors(),
            vec![
                Anchor { ordinal: 0, href: None },
                Anchor { ordinal: 1, href: Some("/x".into()) },
            ]
        );
    }

    #[test]
    fn href_entities_are_decoded() {
        let element = row(r#"<a href="/view/doc-42?utm=1&amp;ref=search">x</a>"#);

        assert_eq!(
            element.anchor(0).and_then(|a| a.href),
            Some("/view/doc-42?utm=1&ref=search".into())
        );
    }

    #[test]
    fn quoted_gt_does_not_end_the_tag() {
        let element = row(r#"<a data-note="a>b" href="/course/r1">x</a><a title='1 > 0' href=/y>y</a>"#);

        assert_eq!(
            element.anchors(),
            vec![
                Anchor { ordinal: 0, href: Some("/course/r1".into()) },
                Anchor { ordinal: 1, href: Some("/y".into()) },
            ]
        );
    }

    #[test]
    fn numeric_references_in_href_are_decoded() {
        let element = row(r#"<a href="&#x2F;view?a=1&#38;b=2&#X3d;3">x</a>"#);

        assert_eq!(element.anchor(0).and_then(|a| a.href), Some("/view?a=1&b=2=3".into()));
    }

    #[test]
    fn decoding_is_single_pass() {
        assert_eq!(unescape_html("&amp;lt; &#0; &bogus; &#x110000;"), "&lt; &#0; &bogus; &#x110000;");
    }

    #[test]
    fn contains_anchor_checks_ordinal_and_href() {
        let element = row(r#"<a href="/a">a</a>"#);

        assert!(element.contains_anchor(&Anchor { ordinal: 0, href: Some("/a".into()) }));
        assert!(!element.contains_anchor(&Anchor { ordinal: 0, href: Some("/b".into()) }));
        assert!(!element.contains_anchor(&Anchor { ordinal: 1, href: Some("/a".into()) }));
    }
}
