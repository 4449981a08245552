// src/core/mod.rs

pub mod chain;
pub mod html;
pub mod net;
pub mod sanitize;

pub use chain::{FieldChain, Strategy};
pub use net::{Fetch, HttpClient, Response};
