// src/core/net.rs
// Blocking HTTP GET behind a small trait so pipelines can run against fixtures.

use std::time::Duration;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Raw response: status code plus body bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The only network capability the pipelines use.
///
/// Implementations return `Err` for transport failures only; a non-success
/// status is still an `Ok(Response)`. Use [`get_ok`] to treat it as an error.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Response>;
}

/// GET `url` and turn a non-success status into `ScrapeError::Status`.
pub fn get_ok(fetcher: &dyn Fetch, url: &str) -> Result<Response> {
    let resp = fetcher.get(url)?;
    if !resp.is_success() {
        return Err(ScrapeError::Status { url: s!(url), status: resp.status });
    }
    Ok(resp)
}

/// reqwest blocking client with a fixed timeout and user agent. No retries.
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| ScrapeError::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<Response> {
        logd!(url, "GET");
        let transport = |e: reqwest::Error| ScrapeError::Transport {
            url: s!(url),
            reason: e.to_string(),
        };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(transport)?.to_vec();
        Ok(Response { status, body })
    }
}
