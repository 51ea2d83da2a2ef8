// GitHub API endpoint functions.
// Typed methods for the profile, repository, and quota endpoints.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{Profile, RateLimit, RateLimitResponse, Repository};

impl GitHubClient {
    /// Get a user's public profile.
    pub async fn get_user(&mut self, username: &str) -> Result<Profile> {
        let response = self.get(&format!("/users/{}", username)).await?;
        let profile: Profile = response.json().await?;
        Ok(profile)
    }

    /// Get a user's public repositories, in the order GitHub returns them.
    pub async fn get_user_repos(&mut self, username: &str) -> Result<Vec<Repository>> {
        let response = self.get(&format!("/users/{}/repos", username)).await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }

    /// Get the core API quota. Does not count against the limit.
    pub async fn get_rate_limit(&mut self) -> Result<RateLimit> {
        let response = self.get("/rate_limit").await?;
        let wrapper: RateLimitResponse = response.json().await?;
        Ok(wrapper.resources.core)
    }
}
