// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge: *where the data lives* in each remote document and
//! *how to read it robustly*.
//!
//! ## What lives here
//! - **Listing pages** (`listing`): item blocks, their links, and the next-page
//!   marker of the paginated executive-order index.
//! - **Detail pages** (`detail`): the per-field fallback chains (date,
//!   president, text) for one document page.
//! - **Document index** (`index`): the Federal Register JSON shape and the
//!   query URL that requests it.
//!
//! ## What does **not** live here
//! - Looping, pacing, filtering, accumulation: `scrape`.
//! - Writing anything to disk: `file`.
//!
//! ## Conventions
//! - Each spec splits `fetch` (network) from `parse_doc` (pure) so parsing is
//!   testable offline against inline fixtures.
//! - A missing element nulls one field or skips one item; it never fails the
//!   page. Only a document that cannot be read at all is an error.
pub mod detail;
pub mod index;
pub mod listing;
