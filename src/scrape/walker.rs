// src/scrape/walker.rs
use std::collections::VecDeque;
use std::fmt;
use std::thread;

use url::Url;

use crate::config::options::CrawlOptions;
use crate::core::net::{self, Fetch};
use crate::error::{Result, ScrapeError};
use crate::specs::listing::{self, ListingSpec};
use crate::store::ItemReference;

/// Why the walk ended.
#[derive(Debug)]
pub enum StopReason {
    /// A page had no item blocks.
    EmptyPage,
    /// The last page had no next-page marker.
    NoNextPage,
    /// `max_pages` listing pages were read.
    PageLimit,
    /// A listing page could not be fetched; items already yielded stand.
    Failed(ScrapeError),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::EmptyPage => write!(f, "no documents on page"),
            StopReason::NoNextPage => write!(f, "no next page link"),
            StopReason::PageLimit => write!(f, "page limit reached"),
            StopReason::Failed(e) => write!(f, "listing fetch failed: {e}"),
        }
    }
}

/// Lazy, finite sequence of item references across listing pages.
///
/// Pages are fetched only when the previous page's items have all been
/// consumed, with `request_delay` slept before every fetch but the first.
pub struct ListingWalker<'a> {
    fetcher: &'a dyn Fetch,
    opts: &'a CrawlOptions,
    spec: ListingSpec,
    site_root: Url,
    cursor: u32,
    pages: u32,
    has_next: bool,
    pending: VecDeque<ItemReference>,
    stop: Option<StopReason>,
}

impl<'a> ListingWalker<'a> {
    pub fn new(fetcher: &'a dyn Fetch, opts: &'a CrawlOptions) -> Result<Self> {
        opts.validate()?;
        Ok(Self {
            fetcher,
            opts,
            spec: ListingSpec::new()?,
            site_root: Url::parse(&opts.site_root)?,
            cursor: opts.start_page,
            pages: 0,
            has_next: false,
            pending: VecDeque::new(),
            stop: None,
        })
    }

    /// Listing pages fetched and parsed so far.
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Set once the sequence is exhausted.
    pub fn stop_reason(&self) -> Option<&StopReason> {
        self.stop.as_ref()
    }

    pub fn into_stop_reason(self) -> Option<StopReason> {
        self.stop
    }

    /// Load the next page into `pending`, or say why there is none.
    fn advance(&mut self) -> std::result::Result<(), StopReason> {
        if self.pages > 0 {
            if !self.has_next {
                return Err(StopReason::NoNextPage);
            }
            if self.opts.max_pages.is_some_and(|max| self.pages >= max) {
                return Err(StopReason::PageLimit);
            }
            self.cursor += 1;
            if !self.opts.request_delay.is_zero() {
                thread::sleep(self.opts.request_delay);
            }
        }

        let url = listing::page_url(self.opts, self.cursor).map_err(StopReason::Failed)?;
        logf!(page = self.cursor, "fetching listing page");
        let resp = net::get_ok(self.fetcher, url.as_str()).map_err(StopReason::Failed)?;

        let page = listing::parse_doc(&resp.text(), &self.site_root, &self.spec);
        self.pages += 1;
        if page.is_empty() {
            return Err(StopReason::EmptyPage);
        }

        let skipped = page.blocks - page.items.len();
        if skipped > 0 {
            logd!(page = self.cursor, skipped, "item blocks without a link");
        }
        logd!(page = self.cursor, items = page.items.len(), has_next = page.has_next, "listing parsed");

        self.has_next = page.has_next;
        self.pending.extend(page.items);
        Ok(())
    }
}

impl Iterator for ListingWalker<'_> {
    type Item = ItemReference;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.pop_front() {
                return Some(item);
            }
            if self.stop.is_some() {
                return None;
            }
            if let Err(reason) = self.advance() {
                match &reason {
                    StopReason::Failed(e) => loge!(page = self.cursor, error = %e, "listing walk aborted"),
                    other => logf!(page = self.cursor, "listing walk finished: {other}"),
                }
                self.stop = Some(reason);
            }
        }
    }
}

/// Walk listing pages with the crawl options.
pub fn walk<'a>(fetcher: &'a dyn Fetch, opts: &'a CrawlOptions) -> Result<ListingWalker<'a>> {
    ListingWalker::new(fetcher, opts)
}
