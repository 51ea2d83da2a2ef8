// Error types for folio.
// Covers fetch failures, GitHub status errors, and local file errors.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Request to {url} timed out after {}ms", .after.as_millis())]
    Timeout { url: String, after: Duration },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API error: HTTP {status} from {url}")]
    UpstreamStatus { status: StatusCode, url: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl FolioError {
    /// True for failures raised by the fetch layer itself.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, FolioError::Timeout { .. } | FolioError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_includes_url_and_millis() {
        let err = FolioError::Timeout {
            url: "https://api.github.com/users/octocat".to_string(),
            after: Duration::from_millis(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("users/octocat"));
        assert!(msg.contains("100ms"));
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn test_upstream_status_is_not_fetch_failure() {
        let err = FolioError::UpstreamStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://localhost/x".to_string(),
        };
        assert!(!err.is_fetch_failure());
        assert!(err.to_string().contains("500"));
    }
}
