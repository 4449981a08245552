// src/error.rs
//! Typed errors for the scraping pipelines.
//!
//! Network and extraction failures are recovered per item by the callers
//! (logged, counted, skipped); they only surface as `Err` from the top-level
//! runners when nothing can proceed (index download, final write, bad config).

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection, TLS, timeout or body read failure
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Document could not be interpreted at all
    #[error("could not parse {what}: {reason}")]
    Parse { what: String, reason: String },

    #[error("invalid selector `{css}`: {reason}")]
    Selector { css: String, reason: String },

    /// Opaque binary-to-text converter failed
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ScrapeError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io { path: path.as_ref().to_path_buf(), source }
    }

    pub fn parse(what: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse { what: what.into(), reason: reason.into() }
    }

    /// True for failures of the remote side (status or transport).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
