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

//! Click events delivered to rendered rows.

use crate::element::Anchor;

/// A click on an anchor, as delivered to a row's delegated click handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: Anchor,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new(target: Anchor) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// The anchor the click originated on.
    pub fn target(&self) -> &Anchor {
        &self.target
    }

    /// Suppresses the host's own link-following for this click.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
