//! Background GitHub quota checks
//!
//! Periodically queries `/rate_limit` and logs what is left. Purely advisory:
//! nothing is throttled and failures are only logged.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::github::{GitHubClient, RateLimit};

/// Remaining calls below which a warning is logged
pub const LOW_QUOTA_THRESHOLD: u64 = 10;

/// Handle for the quota check task
pub struct RateLimitMonitor {
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

impl RateLimitMonitor {
    /// Spawns the check loop: first check after `initial_delay`, then every `interval`
    pub fn spawn(mut client: GitHubClient, initial_delay: Duration, interval: Duration) -> Self {
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(initial_delay) => {}
                _ = token.cancelled() => return,
            }

            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => check_once(&mut client).await,
                    _ = token.cancelled() => break,
                }
            }
        });

        Self { shutdown, handle }
    }

    /// Stops the task and waits for it to finish
    pub async fn shutdown(self) {
        self.shutdown.cancel();
        let _ = self.handle.await;
    }
}

async fn check_once(client: &mut GitHubClient) {
    match client.get_rate_limit().await {
        Ok(quota) => {
            log_quota(&quota);
        }
        Err(e) => warn!(error = %e, "rate limit check failed"),
    }
}

/// Logs the quota; returns true when it is running low
fn log_quota(quota: &RateLimit) -> bool {
    info!(
        "GitHub API rate limit: {}/{} (resets at {})",
        quota.remaining,
        quota.limit,
        quota.reset_at()
    );

    let low = quota.remaining < LOW_QUOTA_THRESHOLD;
    if low {
        warn!(remaining = quota.remaining, "GitHub API rate limit running low");
    }
    low
}
