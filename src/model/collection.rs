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

//! Ranked, paged result collections.
//!
//! The collection is owned by whoever issued the search. Rows only read it,
//! and always at the moment they need it, so paging changes made after a row
//! was rendered are still reflected in what the row reports.

use std::rc::Rc;

use serde::Deserialize;

use crate::model::ResultRecord;

/// Index reported for a record that is not in the collection.
pub const NOT_FOUND: i64 = -1;

#[derive(Debug, Clone, Default)]
pub struct ResultCollection {
    records: Vec<Rc<ResultRecord>>,
    page: u32,
    page_size: u32,
    search_term: String,
}

/// Wire shape of a search response.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    search_term: String,
    #[serde(default)]
    page: u32,
    #[serde(default)]
    page_size: u32,
    #[serde(default)]
    results: Vec<ResultRecord>,
}

impl<'de> Deserialize<'de> for ResultCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let response = SearchResponse::deserialize(deserializer)?;
        Ok(Self {
            records: response.results.into_iter().map(Rc::new).collect(),
            page: response.page,
            page_size: response.page_size,
            search_term: response.search_term,
        })
    }
}

impl ResultCollection {
    pub fn new(search_term: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            records: vec![],
            page,
            page_size,
            search_term: search_term.into(),
        }
    }

    /// Appends a record at the lowest rank and returns the shared handle.
    pub fn push(&mut self, record: ResultRecord) -> Rc<ResultRecord> {
        let record = Rc::new(record);
        self.records.push(Rc::clone(&record));
        record
    }

    /// Replaces the current page of records.
    pub fn set_records(&mut self, records: Vec<Rc<ResultRecord>>) {
        self.records = records;
    }

    /// Removes the record with the given id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Rc<ResultRecord>> {
        let idx = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(idx))
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size;
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.search_term = search_term.into();
    }

    pub fn records(&self) -> &[Rc<ResultRecord>] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&Rc<ResultRecord>> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Zero-based rank of `record` in the current ordering, or [`NOT_FOUND`].
    ///
    /// Records are matched by identifier.
    pub fn index_of(&self, record: &ResultRecord) -> i64 {
        self.records
            .iter()
            .position(|r| r.id() == record.id())
            .and_then(|idx| i64::try_from(idx).ok())
            .unwrap_or(NOT_FOUND)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
