// benches/parse.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

use eo_scrape::specs::{detail::DetailSpec, listing};

fn listing_sample(rows: usize) -> String {
    let mut out = String::from("<html><body><div class=\"view-content\">");
    for i in 0..rows {
        out.push_str(&format!(
            "<div class=\"views-row\"><span class=\"date-display-single\">January {d}, 2025</span>\
             <div class=\"field-title\"><p><a href=\"/documents/executive-order-{i}\">Executive Order {i}</a></p></div></div>",
            d = i % 28 + 1
        ));
    }
    out.push_str("</div><ul class=\"pager\"><li class=\"next\"><a href=\"?page=1\">next</a></li></ul></body></html>");
    out
}

fn detail_sample(paragraphs: usize) -> String {
    let body: String = (0..paragraphs)
        .map(|i| format!("<p>Sec. {i}. By the authority vested in me as President by the Constitution.</p>"))
        .collect();
    format!(
        "<html><body><h3 class=\"diet-title\"><a href=\"/people/president\">Donald J. Trump</a></h3>\
         <span class=\"date-display-single\">January 20, 2025</span>\
         <div class=\"field-docs-content\">{body}</div></body></html>"
    )
}

fn bench_listing(c: &mut Criterion) {
    let doc = listing_sample(40);
    let root = Url::parse("https://www.presidency.ucsb.edu").unwrap();
    let spec = listing::ListingSpec::new().unwrap();

    c.bench_function("listing_page_40", |b| {
        b.iter(|| {
            let page = listing::parse_doc(black_box(&doc), &root, &spec);
            black_box(page.items.len())
        })
    });
}

fn bench_detail(c: &mut Criterion) {
    let spec = DetailSpec::presidency().unwrap();
    let primary = detail_sample(60);
    // Primary selectors miss, every chain walks its fallbacks.
    let fallback = primary
        .replace("diet-title", "x-title")
        .replace("date-display-single", "x-date")
        .replace("field-docs-content", "field--name-body");

    c.bench_function("detail_primary", |b| {
        b.iter(|| black_box(spec.parse_doc(black_box(&primary))))
    });
    c.bench_function("detail_fallback", |b| {
        b.iter(|| black_box(spec.parse_doc(black_box(&fallback))))
    });
}

criterion_group!(benches, bench_listing, bench_detail);
criterion_main!(benches);
