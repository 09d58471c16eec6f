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

//! Interpolation template engine.
//!
//! Supports the two interpolation forms used by result templates:
//!
//! * `<%= name %>` inserts the attribute value as-is.
//! * `<%- name %>` inserts the attribute value with HTML escaping.
//!
//! Everything else is literal text. Values are looked up by attribute name in
//! the mapping passed to [`Template::render`]. A dotted name such as
//! `content.display_name` walks into nested objects one segment at a time.
//! Missing names and `null` render as nothing.

use serde_json::{Map, Value};
use thiserror::Error;

const OPEN_TAG: &str = "<%";
const CLOSE_TAG: &str = "%>";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{reason} (at byte {offset})")]
pub struct TemplateError {
    pub offset: usize,
    pub reason: String,
}

impl TemplateError {
    fn new(offset: usize, reason: impl Into<String>) -> Self {
        Self {
            offset,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Raw(Vec<String>),
    Escaped(Vec<String>),
}

/// A compiled template, ready to be applied to attribute mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Compiles template source into a reusable template.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] when a tag is left open, uses an
    /// unsupported form, or names no attribute.
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut segments = vec![];
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN_TAG) {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }

            let tag_offset = offset + start;
            let body_start = start + OPEN_TAG.len();
            let Some(len) = rest[body_start..].find(CLOSE_TAG) else {
                return Err(TemplateError::new(tag_offset, "unterminated tag"));
            };
            let body = &rest[body_start..body_start + len];

            segments.push(parse_tag(body, tag_offset)?);

            let consumed = body_start + len + CLOSE_TAG.len();
            rest = &rest[consumed..];
            offset += consumed;
        }

        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Applies the template to an attribute mapping and returns the markup.
    pub fn render(&self, attributes: &Map<String, Value>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Raw(path) => out.push_str(&display_value(lookup(attributes, path))),
                Segment::Escaped(path) => {
                    out.push_str(&escape_html(&display_value(lookup(attributes, path))))
                }
            }
        }
        out
    }
}

fn parse_tag(body: &str, offset: usize) -> Result<Segment, TemplateError> {
    let mut chars = body.chars();
    let marker = chars.next();
    let name = chars.as_str().trim();

    if name.is_empty() {
        return Err(TemplateError::new(offset, "tag names no attribute"));
    }

    let path: Vec<String> = name.split('.').map(str::to_string).collect();
    let valid = path.iter().all(|segment| {
        !segment.is_empty() && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
    });
    if !valid {
        return Err(TemplateError::new(
            offset,
            format!("'{name}' is not an attribute name"),
        ));
    }

    match marker {
        Some('=') => Ok(Segment::Raw(path)),
        Some('-') => Ok(Segment::Escaped(path)),
        _ => Err(TemplateError::new(offset, "only <%= %> and <%- %> tags are supported")),
    }
}

fn lookup<'a>(attributes: &'a Map<String, Value>, path: &[String]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(attributes.get(first)?, |value, segment| value.get(segment.as_str()))
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Escapes the characters that are significant in HTML text and attributes.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            _ => out.push(c),
        }
    }
    out
}
