// src/chart.rs
//
// Records-by-date bar chart. Dates are bucketed per calendar day; the image
// carries bars, axes, a dashed horizontal grid and tick marks (one per grid
// line on the y axis, one per date under the x axis). There is no text
// rendering: the per-date numbers and the grid step go to the progress sink,
// and the bottom margin is left free for date labels.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use image::{ImageFormat, Rgb, RgbImage};

use crate::config::options::ChartOptions;
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::detail::DATE;
use crate::store::{self, Record};

/// Formats seen in scraped and API dates.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([190, 190, 190]);
const BAR: Rgb<u8> = Rgb([31, 119, 180]);

const MARGIN_LEFT: u32 = 70;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 30;
const MARGIN_BOTTOM: u32 = 70;
const TICK: u32 = 6;

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateHistogram {
    counts: BTreeMap<NaiveDate, usize>,
    skipped: usize,
}

impl DateHistogram {
    /// Count records per day. Records without a parseable date are skipped.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut hist = Self::default();
        for r in records {
            match r.field(DATE).and_then(parse_date) {
                Some(day) => *hist.counts.entry(day).or_insert(0) += 1,
                None => {
                    logw!(url = %r.url(), date = ?r.field(DATE), "record without usable date skipped");
                    hist.skipped += 1;
                }
            }
        }
        hist
    }

    /// (day, count) in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, usize)> + '_ {
        self.counts.iter().map(|(d, c)| (*d, *c))
    }

    /// Number of distinct days.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Records counted (skipped ones excluded).
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn max(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// Grid step giving at most ~10 horizontal lines.
fn grid_step(max: usize) -> usize {
    let mut step = 1;
    while max / step > 10 {
        step = match step {
            s if s.to_string().starts_with('1') => s * 2,
            s if s.to_string().starts_with('2') => s / 2 * 5,
            s => s * 2,
        };
    }
    step
}

pub fn render(hist: &DateHistogram, width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, WHITE);

    let x0 = MARGIN_LEFT;
    let x1 = width.saturating_sub(MARGIN_RIGHT);
    let y0 = MARGIN_TOP;
    let y1 = height.saturating_sub(MARGIN_BOTTOM); // baseline
    let plot_h = y1.saturating_sub(y0);
    let plot_w = x1.saturating_sub(x0);

    // Leave headroom above the tallest bar.
    let top = (hist.max() as f64 * 1.1).max(1.0);
    let y_of = |v: f64| y1 - ((v / top) * plot_h as f64).round() as u32;

    let step = grid_step(hist.max());
    let mut grid_ys = Vec::new();
    let mut v = step;
    while (v as f64) <= top {
        let y = y_of(v as f64);
        dashed_hline(&mut img, x0, x1, y, GRID);
        grid_ys.push(y);
        v += step;
    }

    let mut tick_xs = Vec::new();
    if !hist.is_empty() {
        let slot = plot_w as f64 / hist.len() as f64;
        let bar_w = ((slot * 0.8).round() as u32).max(1);
        for (i, (_, count)) in hist.iter().enumerate() {
            let left = x0 + (slot * i as f64 + (slot - bar_w as f64) / 2.0).round() as u32;
            fill_rect(&mut img, left, y_of(count as f64), left + bar_w, y1, BAR);
            tick_xs.push(left + bar_w / 2);
        }
    }

    // Axes last so bars don't cover them.
    fill_rect(&mut img, x0, y1, x1, y1 + 1, AXIS);
    fill_rect(&mut img, x0.saturating_sub(1), y0, x0, y1 + 1, AXIS);
    for y in grid_ys {
        fill_rect(&mut img, x0.saturating_sub(1 + TICK), y, x0, y + 1, AXIS);
    }
    for x in tick_xs {
        fill_rect(&mut img, x, y1 + 1, x + 1, y1 + 1 + TICK, AXIS);
    }
    img
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    for y in y0.min(h)..y1.min(h) {
        for x in x0.min(w)..x1.min(w) {
            img.put_pixel(x, y, color);
        }
    }
}

fn dashed_hline(img: &mut RgbImage, x0: u32, x1: u32, y: u32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    if y >= h { return; }
    for x in x0..x1.min(w) {
        if (x - x0) % 10 < 6 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Load records, count per day, write the PNG, report the distribution.
pub fn run(opts: &ChartOptions, mut progress: Option<&mut dyn Progress>) -> Result<DateHistogram> {
    opts.validate()?;
    let records = store::load(&opts.input)?;
    let hist = DateHistogram::from_records(&records);

    let img = render(&hist, opts.width, opts.height);
    if let Some(parent) = opts.output.parent() {
        crate::file::ensure_directory(parent)?;
    }
    img.save_with_format(&opts.output, ImageFormat::Png)?;
    logf!(path = %opts.output.display(), days = hist.len(), records = hist.total(), "chart written");

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Created graph showing {} records across {} dates",
            hist.total(),
            hist.len()
        ));
        if hist.skipped() > 0 {
            p.log(&format!("Skipped {} records without a usable date", hist.skipped()));
        }
        p.log(&format!("Grid line every {} orders", grid_step(hist.max())));
        p.log("Date distribution:");
        for (day, count) in hist.iter() {
            p.log(&format!("{}: {count} orders", day.format("%Y-%m-%d")));
        }
        p.finish();
    }
    Ok(hist)
}
