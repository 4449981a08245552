// src/store.rs
//
// Crawl data model.
//
// - ItemReference: one listing entry (label + detail link); transient.
// - Record: one parsed detail page plus the listing label/url. Immutable.
// - ResultCollection: accepted records in discovery order. Append-only.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};
use crate::filter::{self, Predicate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemReference {
    pub label: String,
    pub url: String,
}

/// Serialized flat: detail fields first (in chain order), then `title`, `url`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    fields: IndexMap<String, Option<String>>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
}

impl Record {
    pub fn new(item: &ItemReference, fields: IndexMap<String, Option<String>>) -> Self {
        Self { fields, title: item.label.clone(), url: item.url.clone() }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Value of a detail field; `None` if absent or null.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_deref())
    }

    pub fn fields(&self) -> &IndexMap<String, Option<String>> {
        &self.fields
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultCollection {
    records: Vec<Record>,
}

impl ResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` if it passes `predicate`. Returns whether it was kept.
    pub fn offer(&mut self, record: Record, predicate: &Predicate) -> bool {
        let keep = filter::accept(&record, predicate);
        if keep {
            self.records.push(record);
        }
        keep
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Read a collection previously written by `file::flush`.
pub fn load(path: &Path) -> Result<ResultCollection> {
    let text = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}
