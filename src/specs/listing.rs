// src/specs/listing.rs
use scraper::{Html, Selector};
use url::Url;

use crate::config::consts::LISTING_YEAR_PARAM;
use crate::config::options::CrawlOptions;
use crate::core::html::{selector, text_compact};
use crate::error::Result;
use crate::store::ItemReference;

/// One item block per document on the listing.
const ITEM_BLOCK: &str = "div.views-row";
/// Title link inside a block.
const ITEM_LINK: &str = "a";
/// Pager entry present on every page but the last.
const NEXT_MARKER: &str = "li.next a";

pub struct ListingSpec {
    item: Selector,
    link: Selector,
    next: Selector,
}

impl ListingSpec {
    pub fn new() -> Result<Self> {
        Ok(Self {
            item: selector(ITEM_BLOCK)?,
            link: selector(ITEM_LINK)?,
            next: selector(NEXT_MARKER)?,
        })
    }
}

/// What one listing page holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Item blocks seen, including ones skipped for lack of a link.
    pub blocks: usize,
    pub items: Vec<ItemReference>,
    pub has_next: bool,
}

impl ListingPage {
    /// No item blocks at all: the walk is over.
    pub fn is_empty(&self) -> bool {
        self.blocks == 0
    }
}

/// URL of listing page `cursor`: the listing URL plus `items_per_page`,
/// the optional year filter, and `page`.
pub fn page_url(opts: &CrawlOptions, cursor: u32) -> Result<Url> {
    let mut url = Url::parse(&opts.listing_url)?;
    {
        let mut q = url.query_pairs_mut();
        q.append_pair("items_per_page", &opts.page_size.to_string());
        if let Some(year) = &opts.year {
            q.append_pair(LISTING_YEAR_PARAM, year);
        }
        q.append_pair("page", &cursor.to_string());
    }
    Ok(url)
}

/// Pure parse. Blocks without a usable `<a href>` are skipped silently.
pub fn parse_doc(html_doc: &str, site_root: &Url, spec: &ListingSpec) -> ListingPage {
    let doc = Html::parse_document(html_doc);
    let mut page = ListingPage::default();

    for block in doc.select(&spec.item) {
        page.blocks += 1;

        let Some(link) = block.select(&spec.link).next() else { continue };
        let Some(href) = link.value().attr("href") else { continue };
        let Ok(url) = site_root.join(href) else {
            logd!(href, "unresolvable item link, skipped");
            continue;
        };

        page.items.push(ItemReference { label: text_compact(link), url: url.into() });
    }

    page.has_next = doc.select(&spec.next).next().is_some();
    page
}
