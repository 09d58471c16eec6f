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

//! Error types for the result row component.
//!
//! Only construction can fail. Everything that goes wrong once a row is
//! rendered (a record missing from its collection, an analytics write, a
//! navigator that cannot spawn) is logged and absorbed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("template '{key}' not found in the template source")]
    TemplateNotFound { key: String },

    #[error("template '{key}' is malformed at byte {offset}: {reason}")]
    TemplateSyntax {
        key: String,
        offset: usize,
        reason: String,
    },

    #[error("result '{id}' appears more than once in the collection")]
    DuplicateResultId { id: String },
}
