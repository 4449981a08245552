// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::{Result, ScrapeError};

/// Listing crawl + detail scrape + filter + sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    pub listing_url: String,
    /// Relative detail links are resolved against this.
    pub site_root: String,
    /// Value for the listing's year filter; `None` drops the parameter.
    pub year: Option<String>,
    pub page_size: u32,
    pub start_page: u32,
    /// Stop after this many listing pages even if a next link exists.
    pub max_pages: Option<u32>,
    pub request_delay: Duration,
    /// Record field the target is matched against.
    pub filter_field: String,
    /// Substring the filter field must contain; `None` keeps every record.
    pub target_filter: Option<String>,
    pub output_path: PathBuf,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            listing_url: s!(LISTING_URL),
            site_root: s!(SITE_ROOT),
            year: Some(s!(DEFAULT_YEAR)),
            page_size: DEFAULT_PAGE_SIZE,
            start_page: FIRST_PAGE,
            max_pages: None,
            request_delay: Duration::from_millis(REQUEST_PAUSE_MS),
            filter_field: s!(DEFAULT_FILTER_FIELD),
            target_filter: Some(s!(DEFAULT_TARGET)),
            output_path: PathBuf::from(DEFAULT_CRAWL_OUT),
        }
    }
}

impl CrawlOptions {
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ScrapeError::Config(s!("page size must be at least 1")));
        }
        if self.max_pages == Some(0) {
            return Err(ScrapeError::Config(s!("max pages must be at least 1")));
        }
        if self.filter_field.trim().is_empty() {
            return Err(ScrapeError::Config(s!("filter field must not be empty")));
        }
        url::Url::parse(&self.listing_url)?;
        url::Url::parse(&self.site_root)?;
        Ok(())
    }
}

/// Query-string filters for the Federal Register documents API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexQuery {
    pub api_url: String,
    pub correction: bool,
    pub president: String,
    pub presidential_document_type: String,
    pub signed_from: String,
    pub signed_to: String,
    pub doc_type: String,
    pub fields: Vec<String>,
    pub include_pre_1994_docs: bool,
    pub order: String,
    pub per_page: u32,
}

impl Default for IndexQuery {
    fn default() -> Self {
        Self {
            api_url: s!(INDEX_API_URL),
            correction: false,
            president: s!(DEFAULT_PRESIDENT),
            presidential_document_type: s!(DEFAULT_PRESIDENTIAL_DOC_TYPE),
            signed_from: s!(DEFAULT_SIGNED_FROM),
            signed_to: s!(DEFAULT_SIGNED_TO),
            doc_type: s!(DEFAULT_DOC_TYPE),
            fields: INDEX_FIELDS.iter().map(|f| s!(*f)).collect(),
            include_pre_1994_docs: true,
            order: s!(DEFAULT_ORDER),
            per_page: INDEX_PER_PAGE,
        }
    }
}

/// Index download + per-entry PDF download/extract + merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    pub query: IndexQuery,
    /// Raw and merged index JSON go here.
    pub out_dir: PathBuf,
    pub pdf_dir: PathBuf,
    pub text_dir: PathBuf,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            query: IndexQuery::default(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            pdf_dir: PathBuf::from(DEFAULT_PDF_DIR),
            text_dir: PathBuf::from(DEFAULT_TEXT_DIR),
        }
    }
}

impl BatchOptions {
    pub fn raw_index_path(&self) -> PathBuf {
        self.out_dir.join(RAW_INDEX_FILE)
    }

    pub fn merged_index_path(&self) -> PathBuf {
        self.out_dir.join(MERGED_INDEX_FILE)
    }
}

/// Records-by-date bar chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_CRAWL_OUT),
            output: PathBuf::from(DEFAULT_CHART_OUT),
            width: DEFAULT_CHART_W,
            height: DEFAULT_CHART_H,
        }
    }
}

impl ChartOptions {
    pub fn validate(&self) -> Result<()> {
        if self.width < 200 || self.height < 150 {
            return Err(ScrapeError::Config(format!(
                "chart must be at least 200x150, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site() {
        let c = CrawlOptions::default();
        assert_eq!(c.page_size, 40);
        assert_eq!(c.target_filter.as_deref(), Some("Trump"));
        assert_eq!(c.request_delay, Duration::from_secs(1));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_page_size_rejected() {
        let c = CrawlOptions { page_size: 0, ..CrawlOptions::default() };
        assert!(matches!(c.validate(), Err(ScrapeError::Config(_))));
    }

    #[test]
    fn batch_paths_live_in_out_dir() {
        let b = BatchOptions { out_dir: PathBuf::from("x"), ..BatchOptions::default() };
        assert_eq!(b.raw_index_path(), PathBuf::from("x").join("documents.json"));
        assert_eq!(b.merged_index_path(), PathBuf::from("x").join("documents_with_text.json"));
    }
}
