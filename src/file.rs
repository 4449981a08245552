// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::core::sanitize::sanitize_filename;
use crate::error::{Result, ScrapeError};
use crate::store::ResultCollection;

/// Sink: write the whole collection as pretty JSON, replacing `dest`.
pub fn flush(collection: &ResultCollection, dest: &Path) -> Result<()> {
    write_json(dest, collection)
}

/// Serialize `value` with two-space indentation (UTF-8, no escaping of
/// non-ASCII) and overwrite `path`. Parent directories are created.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    write_bytes(path, contents.as_bytes())
}

pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, bytes).map_err(|e| ScrapeError::io(path, e))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))?; }
    Ok(())
}

/// Where one index entry's artifacts land.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub pdf: PathBuf,
    pub text: PathBuf,
}

impl ArtifactPaths {
    /// `<pdf_dir>/<number>.pdf` and `<text_dir>/<number>_<title>.txt`,
    /// both file names sanitized.
    pub fn new(pdf_dir: &Path, text_dir: &Path, document_number: &str, title: &str) -> Self {
        let pdf_name = sanitize_filename(&format!("{document_number}.pdf"));
        let text_name = sanitize_filename(&format!("{document_number}_{title}.txt"));
        Self { pdf: pdf_dir.join(pdf_name), text: text_dir.join(text_name) }
    }
}
