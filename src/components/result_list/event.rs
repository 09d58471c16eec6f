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

//! Click delegation for the results list.

use tracing::debug;

use crate::{
    components::{ClickOutcome, ResultList},
    event::ClickEvent,
};

impl ResultList {
    /// Routes a click on an anchor inside the row for `row_id` to that row.
    ///
    /// Clicks for rows the list does not hold are ignored.
    pub fn dispatch_click(&self, row_id: &str, event: &mut ClickEvent) -> ClickOutcome {
        match self.row(row_id) {
            Some(row) => row.handle_click(event, &self.collection),
            None => {
                debug!(row_id, "Click for unknown result row ignored");
                ClickOutcome::Ignored
            }
        }
    }

    /// Clicks the `ordinal`-th anchor of the row for `row_id`, as a user would.
    ///
    /// Returns `None` when there is no such row or anchor.
    pub fn click(&self, row_id: &str, ordinal: usize) -> Option<(ClickEvent, ClickOutcome)> {
        let anchor = self.row(row_id)?.element().anchor(ordinal)?;
        let mut event = ClickEvent::new(anchor);
        let outcome = self.dispatch_click(row_id, &mut event);
        Some((event, outcome))
    }
}
