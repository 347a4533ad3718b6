// src/fetch/http.rs
// =============================================================================
// This module downloads pages and assets over HTTP.
//
// Key functionality:
// - Defines the Fetcher trait (the seam the rest of the app talks to)
// - Implements it with reqwest (HttpFetcher)
// - Turns every failure (network, 404, timeout...) into a log line plus None
//
// There is deliberately no retry here: one GET per URL, that's it.
//
// Rust concepts:
// - Traits: A shared interface that several types can implement
// - async-trait: Lets trait methods be async and still usable as `dyn Fetcher`
// - Result<T, E>: For error handling
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

// Everything that can go wrong while fetching a single URL
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, TLS failure, timeout, body read...
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// Things like data:, mailto: or javascript: references
    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),
}

// Anything that can turn a URL into bytes
//
// `get` does the actual work and reports errors.
// `fetch` is what callers use: it logs the error and hands back an Option,
// so a failed download never escapes past this boundary.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    async fn fetch(&self, url: &str) -> Option<Vec<u8>> {
        match self.get(url).await {
            Ok(body) => {
                debug!(url, bytes = body.len(), "fetched");
                Some(body)
            }
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                None
            }
        }
    }
}

// The real fetcher, backed by a shared reqwest client
//
// reqwest::Client keeps a connection pool internally, so one client is
// shared by every page and every asset download.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client from our configuration
    //
    // Only a user agent and an optional timeout are set. Redirects follow the
    // reqwest default policy.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if !is_http_url(url) {
            let scheme = url.split_once(':').map_or(url, |(scheme, _)| scheme);
            return Err(FetchError::UnsupportedScheme(scheme.to_string()));
        }

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // bytes() rather than text(): assets are binary, and pages are
        // decoded by the caller
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

// Only http:// and https:// can be downloaded
//
// Asset references like "data:image/png;base64,..." resolve to valid URLs
// but there is nothing to GET.
fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
