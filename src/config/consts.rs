// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("eo_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Crawl (American Presidency Project)
pub const SITE_ROOT: &str = "https://www.presidency.ucsb.edu";
pub const LISTING_URL: &str = "https://www.presidency.ucsb.edu/documents/app-categories/written-presidential-orders/presidential/executive-orders";
pub const LISTING_YEAR_PARAM: &str = "field_docs_start_date_time_value[value][date]";
pub const DEFAULT_YEAR: &str = "2025";
pub const DEFAULT_PAGE_SIZE: u32 = 40;
pub const FIRST_PAGE: u32 = 0;
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const DEFAULT_FILTER_FIELD: &str = "president";
pub const DEFAULT_TARGET: &str = "Trump";
pub const DEFAULT_CRAWL_OUT: &str = "documents_scraped.json";

// Batch (Federal Register API)
pub const INDEX_API_URL: &str = "https://www.federalregister.gov/api/v1/documents.json";
pub const DEFAULT_PRESIDENT: &str = "donald-trump";
pub const DEFAULT_PRESIDENTIAL_DOC_TYPE: &str = "executive_order";
pub const DEFAULT_DOC_TYPE: &str = "PRESDOCU";
pub const DEFAULT_SIGNED_FROM: &str = "01/20/2025";
pub const DEFAULT_SIGNED_TO: &str = "01/30/2025";
pub const DEFAULT_ORDER: &str = "executive_order";
pub const INDEX_PER_PAGE: u32 = 10_000;
pub const INDEX_FIELDS: &[&str] = &[
    "citation", "document_number", "end_page", "html_url", "pdf_url", "type",
    "subtype", "publication_date", "signing_date", "start_page", "title",
    "disposition_notes", "executive_order_number", "not_received_for_publication",
    "full_text_xml_url", "body_html_url", "json_url",
];

// Batch output
pub const DEFAULT_OUT_DIR: &str = "exec-orders";
pub const DEFAULT_PDF_DIR: &str = "pdfs";
pub const DEFAULT_TEXT_DIR: &str = "texts";
pub const RAW_INDEX_FILE: &str = "documents.json";
pub const MERGED_INDEX_FILE: &str = "documents_with_text.json";

// Chart
pub const DEFAULT_CHART_OUT: &str = "executive_orders_by_date.png";
pub const DEFAULT_CHART_W: u32 = 1200;
pub const DEFAULT_CHART_H: u32 = 600;
