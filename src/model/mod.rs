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

//! Domain models for search results.
//!
//! A [`ResultRecord`] is one search hit: a stable identifier plus whatever
//! display attributes the search backend returned for it. Records live in a
//! [`ResultCollection`], which also carries the paging state and the query
//! that produced them.

pub mod collection;

pub use collection::ResultCollection;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};
use tracing::warn;

const ID_ATTRIBUTE: &str = "id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl ResultRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        if name == ID_ATTRIBUTE {
            let value = value.into();
            match id_text(&value) {
                Some(id) => self.id = id,
                None => warn!(id = %value, "Ignoring result id that is not a string or number"),
            }
        } else {
            self.attributes.insert(name, value.into());
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display attributes, excluding the identifier.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// The mapping a row template is applied to: every display attribute
    /// plus `id`.
    pub fn template_context(&self) -> Map<String, Value> {
        let mut context = self.attributes.clone();
        context.insert(ID_ATTRIBUTE.to_string(), Value::String(self.id.clone()));
        context
    }
}

/// Identifiers arrive as strings or numbers; numbers are kept as their
/// decimal text.
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_text(&value)
        .ok_or_else(|| de::Error::custom(format!("result id must be a string or number, got {value}")))
}
