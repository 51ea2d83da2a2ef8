// GitHub API HTTP client.
// Sends requests through the fetch guard, tracks rate limits, and classifies status codes.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;

use crate::error::{FolioError, Result};
use crate::fetch::{FetchGuard, RequestOptions};

use super::types::RateLimit;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Unauthenticated GitHub API client with rate limit tracking.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    guard: FetchGuard,
    base_url: String,
    rate_limit: RateLimit,
}

impl GitHubClient {
    /// Create a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("folio")
            .build()
            .map_err(FolioError::Transport)?;

        Ok(Self::with_http_client(base_url, client, timeout))
    }

    /// Create a client on top of an existing reqwest client.
    pub fn with_http_client(base_url: &str, client: Client, timeout: Duration) -> Self {
        Self {
            guard: FetchGuard::new(client, timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limit: RateLimit::default(),
        }
    }

    /// Client against the public GitHub API.
    pub fn public(timeout: Duration) -> Result<Self> {
        Self::new(GITHUB_API_BASE, timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the rate limit seen on the most recent response.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(USER_AGENT, HeaderValue::from_static("folio"));
        headers
    }

    /// Make a GET request to the GitHub API.
    pub async fn get(&mut self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "GET");

        let options = RequestOptions::new().with_headers(Self::default_headers());
        let response = self.guard.fetch_with_timeout(&url, options).await?;

        self.update_rate_limit(&response);
        self.check_response(response)
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&mut self, response: &Response) {
        let header = |name: &str| -> Option<u64> {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        };

        if let Some(limit) = header("x-ratelimit-limit") {
            self.rate_limit.limit = limit;
        }
        if let Some(remaining) = header("x-ratelimit-remaining") {
            self.rate_limit.remaining = remaining;
        }
        if let Some(reset) = header("x-ratelimit-reset") {
            self.rate_limit.reset = reset;
        }
    }

    /// Check response status and convert errors.
    fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        match status {
            StatusCode::NOT_FOUND => Err(FolioError::NotFound(url)),
            StatusCode::FORBIDDEN if self.rate_limit.remaining == 0 => {
                Err(FolioError::RateLimited {
                    reset_at: self.rate_limit.reset_at(),
                })
            }
            status => Err(FolioError::UpstreamStatus { status, url }),
        }
    }
}
