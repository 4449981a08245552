// src/testing.rs
//! Test doubles for the injected capabilities.
//!
//! `MockFetcher` serves canned responses by exact URL and records every
//! request, so pipelines can run end to end without a network.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::net::{Fetch, Response};
use crate::error::{Result, ScrapeError};

#[derive(Default)]
pub struct MockFetcher {
    routes: HashMap<String, Route>,
    calls: RefCell<Vec<String>>,
}

enum Route {
    Respond(Response),
    Fail(String),
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 200 with `body`.
    pub fn with_page(self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.with_response(url, Response::ok(body))
    }

    /// Empty body with `status`.
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.with_response(url, Response { status, body: Vec::new() })
    }

    /// Transport failure (connection refused, timeout, ...).
    pub fn with_failure(mut self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.routes.insert(url.into(), Route::Fail(reason.into()));
        self
    }

    pub fn with_response(mut self, url: impl Into<String>, resp: Response) -> Self {
        self.routes.insert(url.into(), Route::Respond(resp));
        self
    }

    /// Every URL requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Fetch for MockFetcher {
    /// Unknown URLs fail like an unreachable host.
    fn get(&self, url: &str) -> Result<Response> {
        self.calls.borrow_mut().push(s!(url));
        match self.routes.get(url) {
            Some(Route::Respond(resp)) => Ok(resp.clone()),
            Some(Route::Fail(reason)) => Err(ScrapeError::Transport { url: s!(url), reason: reason.clone() }),
            None => Err(ScrapeError::Transport { url: s!(url), reason: s!("no route in mock") }),
        }
    }
}
