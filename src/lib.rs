// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod chart;
pub mod extract;
pub mod file;
pub mod filter;
pub mod progress;
pub mod scrape;
pub mod store;
pub mod testing;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, ScrapeError};
