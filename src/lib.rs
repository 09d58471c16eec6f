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

//! # Search result rows.
//!
//! Renders the rows of a search results list and reports which result a user
//! followed.
//!
//! Each row is a [`ResultItemView`]: a record rendered through the
//! `search_item-tpl` template into an `li` element. Clicking an anchor inside
//! a row suppresses the default link handling, emits one
//! `search.result_selected` analytics event carrying the query, the result's
//! absolute rank and its id, and then hands the link to a [`Navigator`].
//!
//! ## Seams
//!
//! Everything a row talks to is injected:
//!
//! * [`TemplateSource`] supplies the row markup by key.
//! * [`AnalyticsSink`] receives events, fire-and-forget.
//! * [`Navigator`] performs the full-page navigation.
//!
//! [`ResultItemView`]: components::ResultItemView
//! [`Navigator`]: navigation::Navigator
//! [`TemplateSource`]: template::TemplateSource
//! [`AnalyticsSink`]: analytics::AnalyticsSink

pub mod analytics;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod template;

pub use error::ViewError;
