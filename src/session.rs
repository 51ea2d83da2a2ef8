// Portfolio session: the per-process context that the UI reads from.
// Checks the timed cache, fetches on a miss, and stores what it fetched.

use std::sync::Arc;

use tracing::{error, info};

use crate::cache::{Clock, SystemClock, TimedCache};
use crate::config::Config;
use crate::error::Result;
use crate::github::{GitHubClient, Profile, Repository};

pub const PROFILE_KEY: &str = "profile";
pub const REPOS_KEY: &str = "repos";

/// Values held in the session cache, one variant per key.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Profile(Profile),
    Repos(Vec<Repository>),
}

/// Image URLs for the third-party GitHub statistics cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCards {
    pub top_languages: String,
    pub streak: String,
    pub profile_stats: String,
}

impl StatsCards {
    pub fn for_user(username: &str) -> Self {
        Self {
            top_languages: format!(
                "https://github-readme-stats.vercel.app/api/top-langs?username={}&locale=en&hide_title=false&layout=compact&card_width=320&langs_count=5&theme=dark&hide_border=true&order=2",
                username
            ),
            streak: format!(
                "https://github-readme-streak-stats.herokuapp.com/?user={}&theme=dark&hide_border=true",
                username
            ),
            profile_stats: format!(
                "https://github-readme-stats.vercel.app/api?username={}&show_icons=true&theme=dark&hide_border=true",
                username
            ),
        }
    }
}

/// Everything the GitHub panes render.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub profile: Profile,
    pub repos: Vec<Repository>,
    pub stats: StatsCards,
}

pub struct PortfolioSession {
    client: GitHubClient,
    cache: TimedCache<CachedValue>,
    config: Config,
}

impl PortfolioSession {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build a session whose cache reads time from `clock`.
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        let client = GitHubClient::new(&config.api_base, config.api_timeout)?;
        Ok(Self::with_client(config, client, clock))
    }

    /// Assemble a session from an already configured client.
    pub fn with_client(config: Config, client: GitHubClient, clock: Arc<dyn Clock>) -> Self {
        let cache = TimedCache::with_clock(config.cache_duration, clock);
        Self {
            client,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &GitHubClient {
        &self.client
    }

    pub fn cache(&self) -> &TimedCache<CachedValue> {
        &self.cache
    }

    pub async fn load_profile(&mut self) -> Result<Profile> {
        if let Some(CachedValue::Profile(profile)) = self.cache.get(PROFILE_KEY) {
            info!("using cached GitHub profile");
            return Ok(profile.clone());
        }

        info!(user = %self.config.username, "fetching GitHub profile");
        let profile = self
            .client
            .get_user(&self.config.username)
            .await
            .inspect_err(|e| error!(error = %e, "error loading GitHub profile"))?;

        info!(login = %profile.login, "GitHub profile loaded");
        self.cache.set(PROFILE_KEY, CachedValue::Profile(profile.clone()));
        Ok(profile)
    }

    /// Most recently updated repositories, newest first.
    pub async fn load_repos(&mut self) -> Result<Vec<Repository>> {
        if let Some(CachedValue::Repos(repos)) = self.cache.get(REPOS_KEY) {
            info!("using cached GitHub repos");
            return Ok(repos.clone());
        }

        info!(user = %self.config.username, "fetching GitHub repositories");
        let mut repos = self
            .client
            .get_user_repos(&self.config.username)
            .await
            .inspect_err(|e| error!(error = %e, "error loading GitHub repos"))?;

        repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        repos.truncate(self.config.repo_limit);

        info!(count = repos.len(), "GitHub repos loaded");
        self.cache.set(REPOS_KEY, CachedValue::Repos(repos.clone()));
        Ok(repos)
    }

    pub fn stats_cards(&self) -> StatsCards {
        StatsCards::for_user(&self.config.username)
    }

    /// Load profile, then repositories, then stats. Stops at the first failure.
    pub async fn load_all(&mut self) -> Result<Snapshot> {
        let profile = self.load_profile().await?;
        let repos = self.load_repos().await?;
        let stats = self.stats_cards();
        Ok(Snapshot {
            profile,
            repos,
            stats,
        })
    }

    /// Drop everything cached and load again from the API.
    pub async fn refresh(&mut self) -> Result<Snapshot> {
        info!("refreshing GitHub data");
        self.cache.clear();
        self.load_all().await
    }
}
