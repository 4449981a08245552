// tests/batch_e2e.rs
use std::fs;
use std::path::Path;

use eo_scrape::config::options::BatchOptions;
use eo_scrape::extract::PlainTextExtractor;
use eo_scrape::progress::RecordingProgress;
use eo_scrape::scrape::batch;
use eo_scrape::specs::index::{self, DocumentIndex, IndexEntry};
use eo_scrape::testing::MockFetcher;
use serde_json::{json, Value};

fn opts_in(dir: &Path) -> BatchOptions {
    BatchOptions {
        out_dir: dir.to_path_buf(),
        pdf_dir: dir.join("pdfs"),
        text_dir: dir.join("texts"),
        ..BatchOptions::default()
    }
}

fn index_url(opts: &BatchOptions) -> String {
    index::query_url(&opts.query).unwrap().to_string()
}

fn index_body() -> String {
    json!({
        "count": 3,
        "description": "Documents signed by Donald Trump",
        "results": [
            { "document_number": "2025-01", "title": "First Order", "pdf_url": "https://fr.test/2025-01.pdf", "signing_date": "2025-01-20" },
            { "document_number": "2025-02", "title": "Second: Order?", "pdf_url": "https://fr.test/2025-02.pdf", "signing_date": "2025-01-20" },
            { "document_number": "2025-03", "title": "Third Order", "pdf_url": "https://fr.test/2025-03.pdf", "signing_date": "2025-01-21" }
        ]
    })
    .to_string()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn failed_download_gets_empty_text_and_run_continues() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let fetcher = MockFetcher::new()
        .with_page(index_url(&opts), index_body())
        .with_page("https://fr.test/2025-01.pdf", "Page one\u{c}  page   two\n")
        .with_status("https://fr.test/2025-02.pdf", 404)
        .with_page("https://fr.test/2025-03.pdf", "Third body");

    let mut progress = RecordingProgress::default();
    let summary = batch::run(&fetcher, &PlainTextExtractor, &opts, Some(&mut progress)).unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.pages, 3);
    assert_eq!(progress.total, Some(3));
    assert_eq!(progress.failed.len(), 1);
    assert_eq!(progress.failed[0].0, "2025-02");

    let merged = read_json(&opts.merged_index_path());
    assert_eq!(merged["count"], 3);
    let results = merged["results"].as_array().unwrap();
    assert_eq!(results[0]["text_content"], "Page one page two");
    assert_eq!(results[1]["text_content"], "");
    assert_eq!(results[2]["text_content"], "Third body");
    assert_eq!(results[2]["signing_date"], "2025-01-21");

    let raw = read_json(&opts.raw_index_path());
    assert!(raw["results"][0].get("text_content").is_none());

    assert_eq!(fs::read(opts.pdf_dir.join("2025-01.pdf")).unwrap(), b"Page one\x0c  page   two\n");
    assert!(!opts.pdf_dir.join("2025-02.pdf").exists());
    assert_eq!(
        fs::read_to_string(opts.text_dir.join("2025-01_First Order.txt")).unwrap(),
        "Page one page two"
    );
    assert!(!opts.text_dir.join("2025-02_Second_ Order_.txt").exists());
    assert!(opts.text_dir.join("2025-03_Third Order.txt").exists());
}

#[test]
fn unreadable_artifact_keeps_pdf_but_no_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let body = json!({ "results": [
        { "document_number": "2025-09", "title": "Broken", "pdf_url": "https://fr.test/bad.pdf" }
    ]})
    .to_string();
    let fetcher = MockFetcher::new()
        .with_page(index_url(&opts), body)
        .with_page("https://fr.test/bad.pdf", vec![0xff, 0xfe, 0x00]);

    let summary = batch::run(&fetcher, &PlainTextExtractor, &opts, None).unwrap();
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.pages, 0);
    assert!(opts.pdf_dir.join("2025-09.pdf").exists());
    assert!(!opts.text_dir.join("2025-09_Broken.txt").exists());
    assert_eq!(read_json(&opts.merged_index_path())["results"][0]["text_content"], "");
}

#[test]
fn entry_without_pdf_url_fails_without_a_request() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let body = json!({ "results": [ { "document_number": "2025-10", "title": "No file" } ] }).to_string();
    let fetcher = MockFetcher::new().with_page(index_url(&opts), body);

    let summary = batch::run(&fetcher, &PlainTextExtractor, &opts, None).unwrap();
    assert_eq!(summary.failed, 1);
    assert_eq!(fetcher.calls().len(), 1);
}

#[test]
fn index_failure_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let fetcher = MockFetcher::new().with_failure(index_url(&opts), "connection refused");

    let err = batch::run(&fetcher, &PlainTextExtractor, &opts, None).unwrap_err();
    assert!(err.is_network());
    assert!(!opts.raw_index_path().exists());
    assert!(!opts.merged_index_path().exists());
}

#[test]
fn malformed_index_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let fetcher = MockFetcher::new().with_page(index_url(&opts), "<html>maintenance</html>");

    assert!(batch::run(&fetcher, &PlainTextExtractor, &opts, None).is_err());
    assert!(!opts.merged_index_path().exists());
}

#[test]
fn empty_index_writes_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let fetcher = MockFetcher::new().with_page(index_url(&opts), r#"{"count":0,"results":[]}"#);

    let summary = batch::run(&fetcher, &PlainTextExtractor, &opts, None).unwrap();
    assert_eq!(summary.total, 0);
    assert_eq!(read_json(&opts.raw_index_path()), read_json(&opts.merged_index_path()));
}

#[test]
fn null_title_entry_is_processed_with_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let body = json!({ "results": [
        { "document_number": "2025-01", "title": "First Order", "pdf_url": "https://fr.test/1.pdf" },
        { "document_number": "2025-02", "title": null, "pdf_url": "https://fr.test/2.pdf" },
        { "document_number": "2025-03", "title": "Third Order", "pdf_url": "https://fr.test/3.pdf" }
    ]})
    .to_string();
    let fetcher = MockFetcher::new()
        .with_page(index_url(&opts), body)
        .with_page("https://fr.test/1.pdf", "one")
        .with_page("https://fr.test/2.pdf", "two")
        .with_page("https://fr.test/3.pdf", "three");

    let summary = batch::run(&fetcher, &PlainTextExtractor, &opts, None).unwrap();
    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 0);
    assert_eq!(
        fs::read_to_string(opts.text_dir.join("2025-02_untitled.txt")).unwrap(),
        "two"
    );
    let merged = read_json(&opts.merged_index_path());
    assert!(merged["results"][1]["title"].is_null());
    assert_eq!(merged["results"][1]["text_content"], "two");
}

#[test]
fn raw_index_keeps_key_order_as_received() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let body = r#"{"results":[{"signing_date":"2025-01-20","title":"Order","pdf_url":"https://fr.test/1.pdf","document_number":"2025-01"}],"count":1}"#;
    let fetcher = MockFetcher::new()
        .with_page(index_url(&opts), body)
        .with_page("https://fr.test/1.pdf", "text");

    batch::run(&fetcher, &PlainTextExtractor, &opts, None).unwrap();
    let raw = read_json(&opts.raw_index_path());
    let top: Vec<&str> = raw.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(top, ["results", "count"]);
    let entry: Vec<&str> = raw["results"][0].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(entry, ["signing_date", "title", "pdf_url", "document_number"]);
}

#[test]
fn sidecar_write_failure_keeps_text_but_counts_as_failed() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    // A plain file where the text directory should be.
    fs::write(&opts.text_dir, b"not a directory").unwrap();

    let mut idx = DocumentIndex {
        results: vec![IndexEntry {
            document_number: "2025-05".to_string(),
            title: Some("Blocked".to_string()),
            pdf_url: Some("https://fr.test/5.pdf".to_string()),
            ..IndexEntry::default()
        }],
        ..DocumentIndex::default()
    };
    let fetcher = MockFetcher::new().with_page("https://fr.test/5.pdf", "Extracted  body");

    let summary = batch::process(&mut idx, &fetcher, &PlainTextExtractor, &opts, None);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.succeeded, 0);
    assert_eq!(summary.pages, 0);
    assert_eq!(idx.results[0].text_content.as_deref(), Some("Extracted body"));
    assert!(opts.pdf_dir.join("2025-05.pdf").exists());
}
