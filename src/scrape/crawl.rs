// src/scrape/crawl.rs
use crate::{
    config::options::CrawlOptions,
    core::net::Fetch,
    error::Result,
    file,
    filter::Predicate,
    progress::Progress,
    specs::detail::{self, DetailSpec},
    store::ResultCollection,
};

use super::walker::{ListingWalker, StopReason};

/// What a crawl produced and why it ended.
#[derive(Debug)]
pub struct CrawlReport {
    pub records: ResultCollection,
    /// Item references yielded by the walker.
    pub seen: usize,
    /// Detail pages that could not be fetched.
    pub failed: usize,
    /// Records parsed but dropped by the predicate.
    pub rejected: usize,
    pub pages: u32,
    pub stop: Option<StopReason>,
}

/// Walk the listing, fetch each detail page, keep records passing the
/// predicate. No I/O besides the fetcher.
pub fn collect(
    fetcher: &dyn Fetch,
    opts: &CrawlOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CrawlReport> {
    opts.validate()?;
    let spec = DetailSpec::presidency()?;
    let predicate = Predicate::from_target(&opts.filter_field, opts.target_filter.as_deref());

    let mut records = ResultCollection::new();
    let (mut seen, mut failed, mut rejected) = (0usize, 0usize, 0usize);

    let mut walker = ListingWalker::new(fetcher, opts)?;
    let mut last_page = 0;

    while let Some(item) = walker.next() {
        if walker.pages() != last_page {
            last_page = walker.pages();
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Fetched listing page {last_page}"));
            }
        }
        seen += 1;

        match detail::fetch(fetcher, &item, &spec) {
            Ok(record) => {
                if records.offer(record, &predicate) {
                    logd!(url = %item.url, "record kept");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&item.label);
                    }
                } else {
                    rejected += 1;
                }
            }
            Err(e) => {
                failed += 1;
                loge!(url = %item.url, error = %e, "detail page failed");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&item.label, &e.to_string());
                }
            }
        }
    }

    let pages = walker.pages();
    let stop = walker.into_stop_reason();
    logf!(pages, seen, kept = records.len(), rejected, failed, "crawl finished");

    if let Some(p) = progress.as_deref_mut() {
        if let Some(reason) = &stop {
            p.log(&format!("Stopped: {reason}"));
        }
        p.finish();
    }

    Ok(CrawlReport { records, seen, failed, rejected, pages, stop })
}

/// `collect`, then write the collection to `opts.output_path`.
pub fn run(
    fetcher: &dyn Fetch,
    opts: &CrawlOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CrawlReport> {
    let report = collect(fetcher, opts, progress.as_mut().map(|p| &mut **p as &mut dyn Progress))?;
    file::flush(&report.records, &opts.output_path)?;
    logf!(path = %opts.output_path.display(), records = report.records.len(), "records written");
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Saved {} documents to {}",
            report.records.len(),
            opts.output_path.display()
        ));
    }
    Ok(report)
}
