//! In-memory index fetcher.

use std::collections::HashMap;
use std::sync::Mutex;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::core::LinksError;
use crate::fetch::IndexFetcher;

/// Serves canned bodies by exact URL and records every request.
///
/// Unknown URLs fail like an HTTP 404.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.into(), body.into());
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|requests| requests.clone()).unwrap_or_default()
    }
}

impl IndexFetcher for MockFetcher {
    async fn fetch_into<W>(&self, url: &str, sink: &mut W) -> Result<u64, LinksError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        let body = self.responses.get(url).ok_or_else(|| LinksError::FetchFailed {
            url: url.to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        })?;
        sink.write_all(body).await.map_err(|e| LinksError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(body.len() as u64)
    }
}
