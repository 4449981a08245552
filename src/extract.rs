// src/extract.rs
// Binary-to-text conversion. The batch only sees the `TextExtractor` trait.

use lopdf::Document;

use crate::core::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};

/// Converts a downloaded artifact into text, one string per page.
pub trait TextExtractor {
    fn pages(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extracted {
    pub text: String,
    pub pages: usize,
}

/// Run `extractor`, concatenate pages and collapse whitespace.
pub fn extract_text(extractor: &dyn TextExtractor, bytes: &[u8]) -> Result<Extracted> {
    let pages = extractor.pages(bytes)?;
    let joined: String = pages.concat();
    Ok(Extracted { text: normalize_ws(&joined), pages: pages.len() })
}

/// PDF text via lopdf, page by page in page-number order.
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| ScrapeError::Extraction(format!("not a readable PDF: {e}")))?;

        doc.get_pages()
            .keys()
            .map(|&n| {
                doc.extract_text(&[n])
                    .map_err(|e| ScrapeError::Extraction(format!("page {n}: {e}")))
            })
            .collect()
    }
}

/// Treats the bytes as UTF-8 text with pages separated by form feeds.
/// Invalid UTF-8 is an extraction failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ScrapeError::Extraction(format!("not UTF-8: {e}")))?;
        Ok(text.split('\u{c}').map(String::from).collect())
    }
}
