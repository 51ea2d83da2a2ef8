// Runtime configuration.
// Defaults mirror the portfolio's published settings; the CLI overrides them.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::DEFAULT_CACHE_DURATION;
use crate::cli::Cli;
use crate::error::{FolioError, Result};
use crate::fetch::DEFAULT_TIMEOUT;
use crate::github::GITHUB_API_BASE;

/// Number of most recently updated repositories to show.
pub const DEFAULT_REPO_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// GitHub user whose portfolio is shown
    pub username: String,
    pub api_base: String,
    pub api_timeout: Duration,
    pub cache_duration: Duration,
    pub repo_limit: usize,
    /// JSON file describing the project gallery
    pub projects_path: PathBuf,
    /// Delay before the first quota check
    pub rate_limit_initial_delay: Duration,
    pub rate_limit_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: "octocat".to_string(),
            api_base: GITHUB_API_BASE.to_string(),
            api_timeout: DEFAULT_TIMEOUT,
            cache_duration: DEFAULT_CACHE_DURATION,
            repo_limit: DEFAULT_REPO_LIMIT,
            projects_path: PathBuf::from("data/projects.json"),
            rate_limit_initial_delay: Duration::from_secs(5),
            rate_limit_interval: Duration::from_secs(5 * 60),
        }
    }
}

impl Config {
    /// Apply CLI overrides on top of the defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::default();

        if let Some(user) = &cli.user {
            config.username = user.clone();
        }
        if let Some(path) = &cli.projects {
            config.projects_path = path.clone();
        }
        if let Some(ms) = cli.timeout_ms {
            config.api_timeout = Duration::from_millis(ms);
        }
        if let Some(secs) = cli.cache_secs {
            config.cache_duration = Duration::from_secs(secs);
        }
        if let Some(base) = &cli.api_base {
            config.api_base = base.clone();
        }
        if let Some(limit) = cli.repo_limit {
            config.repo_limit = limit;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(FolioError::Config("username must not be empty".to_string()));
        }
        if self.api_timeout.is_zero() {
            return Err(FolioError::Config("timeout must be positive".to_string()));
        }
        if self.rate_limit_interval.is_zero() {
            return Err(FolioError::Config(
                "rate limit interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_timeout, Duration::from_secs(10));
        assert_eq!(config.cache_duration, Duration::from_secs(3600));
        assert_eq!(config.repo_limit, 6);
        assert_eq!(config.rate_limit_interval, Duration::from_secs(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_cli_overrides() {
        let cli = Cli::parse_from([
            "folio",
            "--user",
            "torvalds",
            "--timeout-ms",
            "2500",
            "--cache-secs",
            "60",
            "--repo-limit",
            "3",
        ]);
        let config = Config::from_cli(&cli).unwrap();

        assert_eq!(config.username, "torvalds");
        assert_eq!(config.api_timeout, Duration::from_millis(2500));
        assert_eq!(config.cache_duration, Duration::from_secs(60));
        assert_eq!(config.repo_limit, 3);
        assert_eq!(config.api_base, GITHUB_API_BASE);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = Cli::parse_from(["folio", "--timeout-ms", "0"]);
        let err = Config::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_blank_username_rejected() {
        let cli = Cli::parse_from(["folio", "--user", "  "]);
        assert!(Config::from_cli(&cli).is_err());
    }
}
