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

//! Template sources and compiled templates.
//!
//! The row view never reaches into a document for its markup. A
//! [`TemplateSource`] is handed to it at construction instead, and the markup
//! found under the row's key is compiled once into a [`Template`].
//!
//! # Sub-modules
//!
//! * [`compile`]: The interpolation engine that turns template source into a
//!   render function.
//! * [`document`]: A template source backed by an in-memory map, optionally
//!   filled from the `text/template` script blocks of an HTML document.

pub mod compile;
pub mod document;

pub use compile::{Template, TemplateError};
pub use document::DocumentTemplates;

/// Provider of named markup templates.
pub trait TemplateSource {
    /// Returns the template source registered under `key`, if any.
    fn template(&self, key: &str) -> Option<String>;
}
