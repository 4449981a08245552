// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::options::{BatchOptions, ChartOptions, CrawlOptions};
use crate::core::net::HttpClient;
use crate::error::Result;
use crate::extract::PdfExtractor;
use crate::progress::Progress;
use crate::{chart, scrape};

#[derive(Debug, Parser)]
#[command(name = "eo_scrape", version, about = "Executive order crawler, PDF batch downloader and date chart")]
pub struct Cli {
    /// Append logs to this file instead of stderr (level via RUST_LOG)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Crawl the listing, scrape each document page, keep matching records
    Crawl(CrawlArgs),
    /// Download the document index, fetch PDFs, merge extracted text
    Download(DownloadArgs),
    /// Bar chart of crawled records per date
    Chart(ChartArgs),
}

#[derive(Debug, Args)]
pub struct CrawlArgs {
    /// Keep records whose filter field contains this text
    #[arg(short, long)]
    pub target: Option<String>,
    /// Keep every record regardless of the filter field
    #[arg(long, conflicts_with = "target")]
    pub all: bool,
    /// Record field the target is matched against
    #[arg(long)]
    pub field: Option<String>,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Pause between listing pages
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// Listing year filter
    #[arg(long)]
    pub year: Option<String>,
    /// Drop the listing year filter
    #[arg(long, conflicts_with = "year")]
    pub any_year: bool,
    #[arg(long)]
    pub start_page: Option<u32>,
    #[arg(long)]
    pub max_pages: Option<u32>,
    #[arg(long)]
    pub listing_url: Option<String>,
}

impl CrawlArgs {
    pub fn apply(self, opts: &mut CrawlOptions) {
        if self.all { opts.target_filter = None; }
        if let Some(v) = self.target { opts.target_filter = Some(v); }
        if let Some(v) = self.field { opts.filter_field = v; }
        if let Some(v) = self.out { opts.output_path = v; }
        if let Some(v) = self.page_size { opts.page_size = v; }
        if let Some(v) = self.delay_ms { opts.request_delay = Duration::from_millis(v); }
        if self.any_year { opts.year = None; }
        if let Some(v) = self.year { opts.year = Some(v); }
        if let Some(v) = self.start_page { opts.start_page = v; }
        if self.max_pages.is_some() { opts.max_pages = self.max_pages; }
        if let Some(v) = self.listing_url { opts.listing_url = v; }
    }
}

#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Federal Register president slug
    #[arg(long)]
    pub president: Option<String>,
    /// Signing date lower bound, MM/DD/YYYY
    #[arg(long)]
    pub from: Option<String>,
    /// Signing date upper bound, MM/DD/YYYY
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub per_page: Option<u32>,
    /// Directory for documents.json and documents_with_text.json
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    #[arg(long)]
    pub pdf_dir: Option<PathBuf>,
    #[arg(long)]
    pub text_dir: Option<PathBuf>,
}

impl DownloadArgs {
    pub fn apply(self, opts: &mut BatchOptions) {
        if let Some(v) = self.president { opts.query.president = v; }
        if let Some(v) = self.from { opts.query.signed_from = v; }
        if let Some(v) = self.to { opts.query.signed_to = v; }
        if let Some(v) = self.per_page { opts.query.per_page = v; }
        if let Some(v) = self.out_dir { opts.out_dir = v; }
        if let Some(v) = self.pdf_dir { opts.pdf_dir = v; }
        if let Some(v) = self.text_dir { opts.text_dir = v; }
    }
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Crawl output to read
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
}

impl ChartArgs {
    pub fn apply(self, opts: &mut ChartOptions) {
        if let Some(v) = self.input { opts.input = v; }
        if let Some(v) = self.out { opts.output = v; }
        if let Some(v) = self.width { opts.width = v; }
        if let Some(v) = self.height { opts.height = v; }
    }
}

/// Prints status lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        if self.total > 0 {
            println!("[{}/{}] {label}", self.done + self.failed, self.total);
        } else {
            println!("Kept: {label}");
        }
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.failed += 1;
        println!("Failed: {label}: {reason}");
    }
    fn finish(&mut self) {
        if self.done + self.failed > 0 {
            println!("Done ({} ok, {} failed)", self.done, self.failed);
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.log_file.as_deref())?;
    let mut progress = ConsoleProgress::default();

    match cli.command {
        Command::Crawl(args) => {
            let mut opts = CrawlOptions::default();
            args.apply(&mut opts);
            let client = HttpClient::new()?;
            scrape::crawl::run(&client, &opts, Some(&mut progress))?;
        }
        Command::Download(args) => {
            let mut opts = BatchOptions::default();
            args.apply(&mut opts);
            let client = HttpClient::new()?;
            scrape::batch::run(&client, &PdfExtractor, &opts, Some(&mut progress))?;
        }
        Command::Chart(args) => {
            let mut opts = ChartOptions::default();
            args.apply(&mut opts);
            chart::run(&opts, Some(&mut progress))?;
        }
    }
    Ok(())
}
