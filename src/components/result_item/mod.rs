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

//! A single row in the search results list.
//!
//! The row renders its result record through the `search_item-tpl` template
//! into an `li` element, and intercepts clicks on the anchors inside it. A
//! click is reported to analytics (query, absolute rank and result id) before
//! the page is navigated to the clicked link, so the event is always handed
//! off before the page goes away.

mod event;
mod render;

pub use event::ClickOutcome;

use std::rc::Rc;

use crate::{
    analytics::AnalyticsSink,
    element::Element,
    error::ViewError,
    model::ResultRecord,
    navigation::Navigator,
    template::{Template, TemplateSource},
};

/// Key of the row template in the template source.
pub const TEMPLATE_KEY: &str = "search_item-tpl";

pub const ROW_TAG: &str = "li";
pub const ROW_CLASS: &str = "search-results-item";

const ROW_ATTRIBUTES: [(&str, &str); 2] = [("role", "region"), ("aria-label", "search result")];

/// Collaborators a row reports to. Cheap to clone; every row of a list
/// shares the same set.
#[derive(Clone)]
pub struct ViewBindings {
    pub analytics: Rc<dyn AnalyticsSink>,
    pub navigator: Rc<dyn Navigator>,
    /// Optional prefix for the emitted event name, e.g. `edx.course`.
    pub event_namespace: Option<String>,
}

impl ViewBindings {
    pub fn new(analytics: Rc<dyn AnalyticsSink>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            analytics,
            navigator,
            event_namespace: None,
        }
    }

    pub fn with_event_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.event_namespace = Some(namespace.into());
        self
    }
}

pub struct ResultItemView {
    record: Rc<ResultRecord>,
    template: Template,
    element: Element,
    bindings: ViewBindings,
}

impl ResultItemView {
    /// Creates the row for `record`, compiling its template from `templates`.
    ///
    /// The element is created empty; call [`ResultItemView::render`] to fill
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::TemplateNotFound`] if `templates` has nothing under
    /// [`TEMPLATE_KEY`], and [`ViewError::TemplateSyntax`] if what it has does
    /// not compile. Both mean the page is misconfigured; no row can be built.
    pub fn new(
        record: Rc<ResultRecord>,
        templates: &dyn TemplateSource,
        bindings: ViewBindings,
    ) -> Result<Self, ViewError> {
        let source = templates
            .template(TEMPLATE_KEY)
            .ok_or_else(|| ViewError::TemplateNotFound {
                key: TEMPLATE_KEY.to_string(),
            })?;

        let template = Template::compile(&source).map_err(|e| ViewError::TemplateSyntax {
            key: TEMPLATE_KEY.to_string(),
            offset: e.offset,
            reason: e.reason,
        })?;

        let element = ROW_ATTRIBUTES.iter().fold(
            Element::new(ROW_TAG).with_class(ROW_CLASS),
            |element, (name, value)| element.with_attribute(*name, *value),
        );

        Ok(Self {
            record,
            template,
            element,
            bindings,
        })
    }

    pub fn record(&self) -> &Rc<ResultRecord> {
        &self.record
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}
