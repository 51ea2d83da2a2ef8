//! Command-line interface parsing for folio

use std::path::PathBuf;

use clap::Parser;

/// folio - browse a GitHub portfolio in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "folio")]
#[command(about = "GitHub profile, repositories, and project gallery in the terminal")]
#[command(version)]
pub struct Cli {
    /// GitHub username to display
    #[arg(long, short)]
    pub user: Option<String>,

    /// Path to the project gallery JSON file
    #[arg(long, value_name = "FILE")]
    pub projects: Option<PathBuf>,

    /// Request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// How long fetched GitHub data stays fresh, in seconds
    #[arg(long, value_name = "SECS")]
    pub cache_secs: Option<u64>,

    /// GitHub API base URL
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Number of recently updated repositories to show
    #[arg(long, value_name = "N")]
    pub repo_limit: Option<usize>,

    /// Print a text summary and exit instead of starting the TUI
    #[arg(long)]
    pub plain: bool,
}
