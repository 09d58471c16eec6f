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

//! Templates held in memory, optionally extracted from an HTML document.
//!
//! Result pages ship their row markup inside the page itself, as
//! `<script type="text/template" id="...">` blocks. [`DocumentTemplates`]
//! pulls those blocks out by id so the row view can be handed them
//! explicitly instead of querying a global document.

use std::{collections::HashMap, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use crate::{
    element::{TAG_ATTRIBUTES, parse_attributes},
    template::TemplateSource,
};

const TEMPLATE_SCRIPT_TYPE: &str = "text/template";

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)<script{TAG_ATTRIBUTES}>(.*?)</script\s*>")).unwrap()
});

#[derive(Debug, Clone, Default)]
pub struct DocumentTemplates {
    templates: HashMap<String, String>,
}

impl DocumentTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the template source for `key`.
    pub fn insert(&mut self, key: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(key.into(), source.into());
    }

    pub fn with_template(mut self, key: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(key, source);
        self
    }

    /// Collects every `text/template` script block that carries an `id`.
    ///
    /// Script blocks of any other type, or without an id, are skipped. When
    /// two blocks share an id the later one wins, as a document lookup by id
    /// would only ever see one of them.
    pub fn from_html(document: &str) -> Self {
        let mut templates = Self::new();

        for block in SCRIPT_BLOCK.captures_iter(document) {
            let attributes = parse_attributes(&block[1]);
            let attr = |name: &str| {
                attributes
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v.as_str())
            };

            let is_template = attr("type")
                .is_some_and(|t| t.eq_ignore_ascii_case(TEMPLATE_SCRIPT_TYPE));

            if let (true, Some(id)) = (is_template, attr("id")) {
                templates.insert(id, block[2].trim());
            }
        }

        templates
    }

    /// Reads an HTML document from disk and extracts its templates.
    pub fn load(path: &Path) -> Result<Self> {
        let document = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template document {}", path.display()))?;

        Ok(Self::from_html(&document))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateSource for DocumentTemplates {
    fn template(&self, key: &str) -> Option<String> {
        self.templates.get(key).cloned()
    }
}
