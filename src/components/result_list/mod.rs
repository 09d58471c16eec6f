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

//! Results list management.
//!
//! The list is the owner the rows read their paging context from. Hosts
//! mutate paging state and ordering through [`ResultList::collection_mut`];
//! rows are not rebuilt by that, so a click always sees the collection as it
//! is at click time.
//!
//! Rows are addressed by result id, so ids must be unique within the
//! collection the list is built from.

mod event;
mod render;

use std::collections::HashSet;

use tracing::debug;

use crate::{
    components::{ResultItemView, ViewBindings},
    element::Element,
    error::ViewError,
    model::ResultCollection,
    template::TemplateSource,
};

pub const LIST_TAG: &str = "ul";
pub const LIST_CLASS: &str = "search-results";

pub struct ResultList {
    collection: ResultCollection,
    rows: Vec<ResultItemView>,
    element: Element,
}

impl ResultList {
    /// Builds a row for every record currently in `collection`.
    ///
    /// # Errors
    ///
    /// Fails with [`ViewError::DuplicateResultId`] when two records share an
    /// id, and otherwise as soon as a row cannot be built, which only happens
    /// when the row template is missing or malformed.
    pub fn new(
        collection: ResultCollection,
        templates: &dyn TemplateSource,
        bindings: ViewBindings,
    ) -> Result<Self, ViewError> {
        let mut seen = HashSet::new();
        for record in collection.records() {
            if !seen.insert(record.id()) {
                return Err(ViewError::DuplicateResultId {
                    id: record.id().to_string(),
                });
            }
        }

        let rows = collection
            .records()
            .iter()
            .map(|record| ResultItemView::new(record.clone(), templates, bindings.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = rows.len(), search_term = collection.search_term(), "Built result list");

        Ok(Self {
            collection,
            rows,
            element: Element::new(LIST_TAG).with_class(LIST_CLASS),
        })
    }

    pub fn collection(&self) -> &ResultCollection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut ResultCollection {
        &mut self.collection
    }

    pub fn rows(&self) -> &[ResultItemView] {
        &self.rows
    }

    pub fn row(&self, id: &str) -> Option<&ResultItemView> {
        self.rows.iter().find(|row| row.record().id() == id)
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}
