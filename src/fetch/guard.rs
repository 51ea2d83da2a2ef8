// Timeout-guarded HTTP GET.
// Races a single request against a timer that fires a cancellation signal.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{FolioError, Result};

/// Default request timeout: 10 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-request transport options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    /// Overrides the guard's default timeout when set.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Terminal state of one guarded call.
#[derive(Debug)]
enum FetchOutcome {
    Completed(Response),
    TimedOut,
    TransportFailed(reqwest::Error),
}

/// Wraps a reqwest client so no request outlives its timeout.
#[derive(Debug, Clone)]
pub struct FetchGuard {
    client: Client,
    default_timeout: Duration,
}

impl FetchGuard {
    pub fn new(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Issue a GET to `url`, failing with `Timeout` if no response arrives in time.
    ///
    /// The response is returned whatever its status code.
    pub async fn fetch_with_timeout(&self, url: &str, options: RequestOptions) -> Result<Response> {
        let timeout = options.timeout.unwrap_or(self.default_timeout);
        if timeout.is_zero() {
            return Err(FolioError::Config("timeout must be positive".to_string()));
        }

        let request = self.client.get(url).headers(options.headers).send();

        let outcome = match race_timeout(request, timeout, CancellationToken::new()).await {
            Some(Ok(response)) => FetchOutcome::Completed(response),
            Some(Err(e)) => FetchOutcome::TransportFailed(e),
            None => FetchOutcome::TimedOut,
        };

        match outcome {
            FetchOutcome::Completed(response) => {
                debug!(url, status = %response.status(), "fetch completed");
                Ok(response)
            }
            FetchOutcome::TimedOut => {
                warn!(url, timeout_ms = timeout.as_millis() as u64, "fetch timed out");
                Err(FolioError::Timeout {
                    url: url.to_string(),
                    after: timeout,
                })
            }
            FetchOutcome::TransportFailed(e) => {
                warn!(url, error = %e, "fetch failed");
                Err(FolioError::Transport(e))
            }
        }
    }
}

/// Run `work` until it finishes or `signal` is cancelled by the timer, whichever is first.
///
/// Returns `None` on timeout. The losing future is dropped and the timer task is
/// aborted before returning, so `signal` is never cancelled after `work` wins.
async fn race_timeout<F>(work: F, timeout: Duration, signal: CancellationToken) -> Option<F::Output>
where
    F: Future,
{
    let timer = tokio::spawn(abort_after(timeout, signal.clone()));

    let outcome = tokio::select! {
        output = work => Some(output),
        () = signal.cancelled() => None,
    };
    timer.abort();
    outcome
}

async fn abort_after(timeout: Duration, signal: CancellationToken) {
    tokio::time::sleep(timeout).await;
    signal.cancel();
}
