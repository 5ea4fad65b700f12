//! Index-file download.
//!
//! [`IndexFetcher`] is the seam between the link task and the network. The CLI
//! uses [`HttpIndexFetcher`]; tests substitute an in-memory fetcher.

use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::core::LinksError;

/// Streams the body behind a URL into a writer.
pub trait IndexFetcher {
    /// Writes the body of `url` to `sink` and returns the number of bytes written.
    ///
    /// Any failure, including a non-success HTTP status, is reported as
    /// [`LinksError::FetchFailed`]. Bytes may already have been written to `sink`
    /// when an error is returned.
    fn fetch_into<W>(
        &self,
        url: &str,
        sink: &mut W,
    ) -> impl Future<Output = Result<u64, LinksError>> + Send
    where
        W: AsyncWrite + Unpin + Send;
}

/// [`IndexFetcher`] over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpIndexFetcher {
    client: reqwest::Client,
}

impl HttpIndexFetcher {
    /// Builds a fetcher; `timeout` bounds each whole request.
    ///
    /// # Errors
    ///
    /// [`LinksError::ConfigError`] if the HTTP client cannot be initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self, LinksError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("javadoc-links/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| LinksError::ConfigError {
            message: format!("Failed to initialize HTTP client: {e}"),
        })?;
        Ok(Self::from_client(client))
    }

    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl IndexFetcher for HttpIndexFetcher {
    async fn fetch_into<W>(&self, url: &str, sink: &mut W) -> Result<u64, LinksError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let failed = |reason: String| LinksError::FetchFailed {
            url: url.to_string(),
            reason,
        };

        debug!("Fetching {url}");
        let mut response = self.client.get(url).send().await.map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(failed(format!("HTTP {status}")));
        }

        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await.map_err(|e| failed(e.to_string()))? {
            sink.write_all(&chunk).await.map_err(|e| failed(e.to_string()))?;
            written += chunk.len() as u64;
        }
        Ok(written)
    }
}
