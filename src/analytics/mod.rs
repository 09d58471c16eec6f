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

//! Analytics events and the sinks that carry them.
//!
//! Emission is fire-and-forget: a sink accepts an event and returns
//! immediately. Whether it is delivered, retried or dropped is entirely the
//! sink's business.
//!
//! # Sub-modules
//!
//! * [`sinks`]: Bundled sink implementations (tracing log, JSON lines file).

pub mod sinks;

pub use sinks::{JsonLinesSink, TracingSink};

use serde::Serialize;
use serde_json::{Map, Value};

/// Name of the event emitted when a search result link is followed.
pub const RESULT_SELECTED: &str = "search.result_selected";

/// A named analytics event with a flat payload of primitive values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub data: Map<String, Value>,
}

/// Payload of [`RESULT_SELECTED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSelected {
    pub search_term: String,
    pub result_position: i64,
    pub result_link: String,
}

impl ResultSelected {
    /// Converts the payload into an event, prefixing the name with
    /// `namespace` when one is given.
    pub fn into_event(self, namespace: Option<&str>) -> AnalyticsEvent {
        let name = match namespace.filter(|ns| !ns.is_empty()) {
            Some(ns) => format!("{}.{}", ns.trim_end_matches('.'), RESULT_SELECTED),
            None => RESULT_SELECTED.to_string(),
        };

        let mut data = Map::new();
        data.insert("search_term".into(), Value::from(self.search_term));
        data.insert("result_position".into(), Value::from(self.result_position));
        data.insert("result_link".into(), Value::from(self.result_link));

        AnalyticsEvent { name, data }
    }
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    /// Hands `event` to the sink without waiting for delivery.
    fn emit(&self, event: &AnalyticsEvent);
}
