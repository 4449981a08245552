// src/specs/detail.rs
use indexmap::IndexMap;
use scraper::{ElementRef, Html};

use crate::core::chain::FieldChain;
use crate::core::html::{text_compact, text_lines};
use crate::core::net::{self, Fetch};
use crate::error::Result;
use crate::store::{ItemReference, Record};

pub const DATE: &str = "date";
pub const PRESIDENT: &str = "president";
pub const TEXT: &str = "text";

/// Field chains for one document page, evaluated in declaration order.
pub struct DetailSpec {
    chains: Vec<FieldChain>,
}

impl DetailSpec {
    /// Layout of presidency.ucsb.edu document pages, with the older
    /// Drupal field classes as fallbacks.
    pub fn presidency() -> Result<Self> {
        let date = chain!(DATE;
            "span.date-display-single" => compact,
            "div.field--name-field-doc-date time" => compact,
        )?;
        let president = chain!(PRESIDENT;
            "h3.diet-title a" => compact,
            "p" => paragraph_naming_president,
        )?;
        let text = chain!(TEXT;
            "div.field-docs-content" => lines,
            "div.field--name-body, div#block-system-main" => lines,
        )?;
        Ok(Self::new(vec![date, president, text]))
    }

    pub fn new(chains: Vec<FieldChain>) -> Self {
        Self { chains }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.chains.iter().map(FieldChain::name)
    }

    /// Pure parse: every field gets an entry, `None` when no strategy matched.
    pub fn parse_doc(&self, html_doc: &str) -> IndexMap<String, Option<String>> {
        let doc = Html::parse_document(html_doc);
        self.chains
            .iter()
            .map(|c| (s!(c.name()), c.resolve(&doc)))
            .collect()
    }
}

/// Fetch and parse one detail page into a record carrying the listing's
/// label and url. Network failures come back as `Err` for the caller to
/// log and skip.
pub fn fetch(fetcher: &dyn Fetch, item: &ItemReference, spec: &DetailSpec) -> Result<Record> {
    let resp = net::get_ok(fetcher, &item.url)?;
    let t = std::time::Instant::now();
    let fields = spec.parse_doc(&resp.text());
    logd!(url = %item.url, elapsed = ?t.elapsed(), "parsed detail page");
    Ok(Record::new(item, fields))
}

/* ---------- extractors ---------- */

fn compact(el: ElementRef<'_>) -> Option<String> {
    Some(text_compact(el))
}

fn lines(el: ElementRef<'_>) -> Option<String> {
    Some(text_lines(el))
}

/// Last-resort attribution: the first paragraph mentioning "President".
fn paragraph_naming_president(el: ElementRef<'_>) -> Option<String> {
    Some(text_compact(el)).filter(|t| t.contains("President"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> DetailSpec {
        DetailSpec::presidency().unwrap()
    }

    #[test]
    fn primary_layout() {
        let doc = r#"
            <h3 class="diet-title"><a href="/people/president/donald-j-trump">Donald J. Trump</a></h3>
            <div class="field-docs-start-date-time"><span class="date-display-single">January 20, 2025</span></div>
            <div class="field-docs-content">
              <p>By the authority vested in me as President...</p>
              <p>Sec. 2. <em>Policy</em>.</p>
            </div>
        "#;
        let f = spec().parse_doc(doc);
        assert_eq!(f[DATE].as_deref(), Some("January 20, 2025"));
        assert_eq!(f[PRESIDENT].as_deref(), Some("Donald J. Trump"));
        assert_eq!(
            f[TEXT].as_deref(),
            Some("By the authority vested in me as President...\nSec. 2.\nPolicy\n.")
        );
    }

    #[test]
    fn fallback_layout() {
        let doc = r#"
            <div class="field--name-field-doc-date"><time datetime="2025-01-21">January 21, 2025</time></div>
            <p>Released by the White House.</p>
            <p>President Donald J. Trump signed the following order.</p>
            <div class="field--name-body"><p>Body text.</p></div>
        "#;
        let f = spec().parse_doc(doc);
        assert_eq!(f[DATE].as_deref(), Some("January 21, 2025"));
        assert_eq!(f[PRESIDENT].as_deref(), Some("President Donald J. Trump signed the following order."));
        assert_eq!(f[TEXT].as_deref(), Some("Body text."));
    }

    #[test]
    fn missing_fields_are_null_not_errors() {
        let f = spec().parse_doc("<html><body><h1>Page moved</h1></body></html>");
        assert_eq!(f.len(), 3);
        assert!(f.values().all(Option::is_none));
        let names: Vec<&str> = f.keys().map(String::as_str).collect();
        assert_eq!(names, [DATE, PRESIDENT, TEXT]);
    }
}
