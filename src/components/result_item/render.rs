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

//! Rendering of a result row into its element.

use tracing::debug;

use crate::components::ResultItemView;

impl ResultItemView {
    /// Replaces the row's content with the template applied to the record.
    ///
    /// The element itself is neither attached nor detached. Returns the view
    /// so a parent list can chain straight into [`ResultItemView::element`].
    pub fn render(&mut self) -> &mut Self {
        let markup = self.template.render(&self.record.template_context());
        self.element.set_inner_html(markup);

        debug!(id = self.record.id(), "Rendered search result row");

        self
    }
}
