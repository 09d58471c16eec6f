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

//! Search results list and its rows.
//!
//! [`ResultList`] owns a collection and one [`ResultItemView`] per record in
//! it. It renders the rows in ranking order and routes delegated clicks to
//! the row that owns the clicked anchor.

mod result_item;
mod result_list;

pub use result_item::{
    ClickOutcome, ROW_CLASS, ROW_TAG, ResultItemView, TEMPLATE_KEY, ViewBindings,
};
pub use result_list::{LIST_CLASS, LIST_TAG, ResultList};
