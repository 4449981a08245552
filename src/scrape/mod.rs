// src/scrape/mod.rs
pub mod batch;
pub mod crawl;
pub mod walker;

pub use batch::BatchSummary;
pub use crawl::CrawlReport;
pub use walker::{walk, ListingWalker, StopReason};
