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

//! Rendering of the results list.

use crate::components::ResultList;

impl ResultList {
    /// Renders every row and places them, in ranking order, into the list
    /// element.
    pub fn render(&mut self) -> &mut Self {
        let markup = self
            .rows
            .iter_mut()
            .map(|row| row.render().element().outer_html())
            .collect::<Vec<_>>()
            .join("\n");

        self.element.set_inner_html(markup);
        self
    }
}
