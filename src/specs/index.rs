// src/specs/index.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::config::options::IndexQuery;
use crate::core::net::{self, Fetch};
use crate::error::Result;

/// Federal Register `documents.json` response. Keys other than `results`
/// (count, description, paging) are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentIndex {
    #[serde(flatten)]
    pub meta: Map<String, Value>,
    #[serde(default)]
    pub results: Vec<IndexEntry>,
}

/// One document. Only the fields the batch needs are typed; the rest of
/// what the API returned rides along in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub document_number: String,
    /// `None` when the API sent null; numbers and the like are stringified.
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Filled by the batch: extracted text, or `""` when that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
}

impl IndexEntry {
    /// Title for file names; `untitled` when the API had none.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }
}

const UNTITLED: &str = "untitled";

fn lenient_string<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(de)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Request URL for `query`. Array parameters use the API's `name[]` form.
pub fn query_url(query: &IndexQuery) -> Result<Url> {
    let mut url = Url::parse(&query.api_url)?;
    {
        let mut q = url.query_pairs_mut();
        q.append_pair("conditions[correction]", if query.correction { "1" } else { "0" });
        q.append_pair("conditions[president]", &query.president);
        q.append_pair("conditions[presidential_document_type]", &query.presidential_document_type);
        q.append_pair("conditions[signing_date][gte]", &query.signed_from);
        q.append_pair("conditions[signing_date][lte]", &query.signed_to);
        q.append_pair("conditions[type][]", &query.doc_type);
        for field in &query.fields {
            q.append_pair("fields[]", field);
        }
        q.append_pair("include_pre_1994_docs", if query.include_pre_1994_docs { "true" } else { "false" });
        let per_page = query.per_page.to_string();
        q.append_pair("maximum_per_page", &per_page);
        q.append_pair("order", &query.order);
        q.append_pair("per_page", &per_page);
    }
    Ok(url)
}

pub fn parse_doc(json: &str) -> Result<DocumentIndex> {
    Ok(serde_json::from_str(json)?)
}

/// Typed view of an index already parsed as plain JSON.
pub fn from_value(raw: Value) -> Result<DocumentIndex> {
    Ok(serde_json::from_value(raw)?)
}

/// Download the index as received (key order kept). Any failure here is
/// fatal to the batch.
pub fn fetch_raw(fetcher: &dyn Fetch, query: &IndexQuery) -> Result<Value> {
    let url = query_url(query)?;
    let resp = net::get_ok(fetcher, url.as_str())?;
    let raw: Value = serde_json::from_str(&resp.text())?;
    logf!(url = %url, "index downloaded");
    Ok(raw)
}

/// `fetch_raw` plus the typed view.
pub fn fetch(fetcher: &dyn Fetch, query: &IndexQuery) -> Result<DocumentIndex> {
    let index = from_value(fetch_raw(fetcher, query)?)?;
    logd!(documents = index.results.len(), "index parsed");
    Ok(index)
}
