// tests/common/mod.rs
#![allow(dead_code)]

use std::path::Path;
use std::time::Duration;

use eo_scrape::config::options::CrawlOptions;
use eo_scrape::specs::listing;

pub const SITE: &str = "https://site.test";
pub const LISTING: &str = "https://site.test/documents/app-categories/presidential/executive-orders";

/// Crawl options pointed at the mock site: no year filter, no pause.
pub fn crawl_opts(out: &Path) -> CrawlOptions {
    CrawlOptions {
        listing_url: LISTING.to_string(),
        site_root: SITE.to_string(),
        year: None,
        page_size: 2,
        request_delay: Duration::ZERO,
        output_path: out.to_path_buf(),
        ..CrawlOptions::default()
    }
}

pub fn page(opts: &CrawlOptions, cursor: u32) -> String {
    listing::page_url(opts, cursor).unwrap().to_string()
}

/// Listing page with one block per `(href, title)`; `None` href makes a
/// block without a link.
pub fn listing_html(items: &[(Option<&str>, &str)], has_next: bool) -> String {
    let mut out = String::from("<html><body><div class=\"view-content\">");
    for (href, title) in items {
        match href {
            Some(h) => out.push_str(&format!(
                "<div class=\"views-row\"><div class=\"field-title\"><p><a href=\"{h}\">{title}</a></p></div></div>"
            )),
            None => out.push_str(&format!("<div class=\"views-row\"><span>{title}</span></div>")),
        }
    }
    out.push_str("</div>");
    if has_next {
        out.push_str("<ul class=\"pager\"><li class=\"next\"><a href=\"?page=next\">next</a></li></ul>");
    }
    out.push_str("</body></html>");
    out
}

pub fn detail_html(date: &str, president: &str, body: &str) -> String {
    format!(
        r#"<html><body>
          <div class="field-ds-doc-title"><h1>Executive Order</h1></div>
          <div class="field-docs-person"><h3 class="diet-title"><a href="/people/president">{president}</a></h3></div>
          <div class="field-docs-start-date-time"><span class="date-display-single">{date}</span></div>
          <div class="field-docs-content"><p>{body}</p><p>Second paragraph.</p></div>
        </body></html>"#
    )
}
