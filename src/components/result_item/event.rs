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

//! Click interception for a result row.
//!
//! Ordering within a click is fixed: the default action is suppressed first,
//! then the collection is read, then the analytics event is emitted, and only
//! then is the navigator invoked. Emission is not awaited, so the navigation
//! may still cut off a transport that has not dispatched the event yet.

use tracing::{debug, warn};

use crate::{
    analytics::ResultSelected,
    components::ResultItemView,
    event::ClickEvent,
    model::{ResultCollection, collection::NOT_FOUND},
};

/// What a row did with a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click did not land on one of this row's anchors.
    Ignored,
    /// The click was logged and the page navigated to the given href.
    Navigated(String),
    /// The click was logged, but the anchor had no href to follow.
    NoTarget,
}

impl ResultItemView {
    /// Handles a click delegated to this row.
    ///
    /// `collection` is the collection that owns the row's record, read as it
    /// is now rather than as it was when the row was rendered.
    pub fn handle_click(&self, event: &mut ClickEvent, collection: &ResultCollection) -> ClickOutcome {
        if !self.element.contains_anchor(event.target()) {
            debug!(id = self.record.id(), "Click outside result row anchors ignored");
            return ClickOutcome::Ignored;
        }

        event.prevent_default();

        let href = event.target().href.clone();

        let selected = self.result_selected(collection);
        debug!(
            id = self.record.id(),
            position = selected.result_position,
            "Search result selected"
        );

        let analytics_event = selected.into_event(self.bindings.event_namespace.as_deref());
        self.bindings.analytics.emit(&analytics_event);

        match href {
            Some(href) => {
                self.bindings.navigator.navigate(&href);
                ClickOutcome::Navigated(href)
            }
            None => {
                warn!(id = self.record.id(), "Clicked result link has no href");
                ClickOutcome::NoTarget
            }
        }
    }

    /// Builds the selection payload from the collection's current state.
    ///
    /// The position is `page * page_size + index`. A record that has left the
    /// collection has index [`NOT_FOUND`] and that value goes into the sum
    /// unchanged, so such a click reports one before the page's first rank.
    pub fn result_selected(&self, collection: &ResultCollection) -> ResultSelected {
        let index = collection.index_of(&self.record);
        if index == NOT_FOUND {
            warn!(id = self.record.id(), "Selected result is no longer in its collection");
        }

        let result_position =
            i64::from(collection.page()) * i64::from(collection.page_size()) + index;

        ResultSelected {
            search_term: collection.search_term().to_string(),
            result_position,
            result_link: self.record.id().to_string(),
        }
    }
}
