// src/scrape/batch.rs
use std::fmt;

use crate::{
    config::options::BatchOptions,
    core::net::{self, Fetch},
    error::{Result, ScrapeError},
    extract::{self, Extracted, TextExtractor},
    file::{self, ArtifactPaths},
    progress::Progress,
    specs::index::{self, DocumentIndex, IndexEntry},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Pages extracted across all successful entries.
    pub pages: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total PDFs: {}", self.total)?;
        writeln!(f, "Successfully processed: {}", self.succeeded)?;
        writeln!(f, "Failed to process: {}", self.failed)?;
        write!(f, "Total pages processed: {}", self.pages)
    }
}

/// Download, extract and merge text for every entry, in order.
///
/// Never fails as a whole: an entry whose PDF cannot be downloaded or read
/// gets `text_content = ""` and counts as failed. An entry whose sidecar
/// cannot be written keeps its text but also counts as failed.
pub fn process(
    index: &mut DocumentIndex,
    fetcher: &dyn Fetch,
    extractor: &dyn TextExtractor,
    opts: &BatchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> BatchSummary {
    let mut summary = BatchSummary { total: index.results.len(), ..BatchSummary::default() };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(summary.total);
    }

    for entry in &mut index.results {
        let paths = ArtifactPaths::new(&opts.pdf_dir, &opts.text_dir, &entry.document_number, entry.display_title());
        let label = entry.document_number.clone();
        logd!(doc = %label, pdf = %paths.pdf.display(), "processing");
        entry.text_content = None;

        let outcome = download_and_extract(entry, &paths, fetcher, extractor).and_then(|ex| {
            entry.text_content = Some(ex.text.clone());
            file::write_bytes(&paths.text, ex.text.as_bytes())?;
            Ok(ex)
        });

        match outcome {
            Ok(ex) => {
                summary.succeeded += 1;
                summary.pages += ex.pages;
                logf!(doc = %label, pages = ex.pages, "processed");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&format!("{label} ({} pages)", ex.pages));
                }
            }
            Err(e) => {
                summary.failed += 1;
                if entry.text_content.is_none() {
                    entry.text_content = Some(s!());
                }
                loge!(doc = %label, error = %e, "failed");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&label, &e.to_string());
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

/// Fetch the index, save it as received, process it, save it merged.
/// Only the index download, its parse and the two index writes can fail
/// the run.
pub fn run(
    fetcher: &dyn Fetch,
    extractor: &dyn TextExtractor,
    opts: &BatchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<BatchSummary> {
    file::ensure_directory(&opts.pdf_dir)?;
    file::ensure_directory(&opts.text_dir)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Downloading JSON data...");
    }
    let raw = index::fetch_raw(fetcher, &opts.query)?;

    let raw_path = opts.raw_index_path();
    file::write_json(&raw_path, &raw)?;
    logf!(path = %raw_path.display(), "raw index saved");

    let mut idx = index::from_value(raw)?;

    let summary = process(&mut idx, fetcher, extractor, opts, progress.as_mut().map(|p| &mut **p as &mut dyn Progress));

    let merged = opts.merged_index_path();
    file::write_json(&merged, &idx)?;
    logf!(
        path = %merged.display(),
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        pages = summary.pages,
        "merged index saved"
    );
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Processing Summary:\n{summary}"));
        p.log(&format!("Updated JSON saved to {}", merged.display()));
    }
    Ok(summary)
}

/// PDF bytes → disk → text. Errors are per entry.
fn download_and_extract(
    entry: &IndexEntry,
    paths: &ArtifactPaths,
    fetcher: &dyn Fetch,
    extractor: &dyn TextExtractor,
) -> Result<Extracted> {
    let url = entry
        .pdf_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ScrapeError::parse(format!("index entry {}", entry.document_number), "no pdf_url"))?;

    let resp = net::get_ok(fetcher, url)?;
    file::write_bytes(&paths.pdf, &resp.body)?;
    extract::extract_text(extractor, &resp.body)
}
