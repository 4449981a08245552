// src/progress.rs
/// Lightweight progress reporting used by long-running operations (crawl/batch).
/// Frontends implement this to surface status to users; logging is separate.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a record kept, a PDF processed).
    fn item_done(&mut self, _label: &str) {}

    /// Called when one logical unit fails; the run continues.
    fn item_failed(&mut self, _label: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects every call; handy in tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<String>,
    pub failed: Vec<(String, String)>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, label: &str) { self.done.push(s!(label)); }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.failed.push((s!(label), s!(reason)));
    }
    fn finish(&mut self) { self.finished = true; }
}
