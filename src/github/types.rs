// GitHub API response types.
// Only the fields the portfolio renders are decoded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile of a GitHub user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub html_url: Option<String>,
}

impl Profile {
    /// Name to show, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// Repository as listed under `/users/{user}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub updated_at: DateTime<Utc>,
}

/// Rate limit information from response headers or `/rate_limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    /// Unix seconds.
    pub reset: u64,
}

impl RateLimit {
    /// Reset time as `HH:MM:SS` UTC.
    pub fn reset_at(&self) -> String {
        DateTime::from_timestamp(self.reset as i64, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Body of `GET /rate_limit`.
#[derive(Debug, Deserialize)]
pub(crate) struct RateLimitResponse {
    pub resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RateLimitResources {
    pub core: RateLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_profile_decodes() {
        let profile: Profile =
            serde_json::from_str(r#"{"login":"octocat","followers":10}"#).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.followers, 10);
        assert_eq!(profile.public_repos, 0);
        assert_eq!(profile.display_name(), "octocat");
    }

    #[test]
    fn test_repository_decodes() {
        let json = r#"{
            "name": "folio",
            "html_url": "https://github.com/octocat/folio",
            "description": null,
            "fork": false,
            "language": "Rust",
            "stargazers_count": 1200,
            "forks_count": 3,
            "updated_at": "2024-05-01T12:00:00Z"
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "folio");
        assert!(repo.topics.is_empty());
        assert_eq!(repo.language.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_rate_limit_response_decodes() {
        let json = r#"{"resources":{"core":{"limit":60,"remaining":7,"reset":0,"used":53}},"rate":{}}"#;
        let parsed: RateLimitResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.resources.core.remaining, 7);
        assert_eq!(parsed.resources.core.reset_at(), "00:00:00");
    }
}
