//! folio - a GitHub portfolio in the terminal
//!
//! Shows a user's profile, recently updated repositories, statistics cards,
//! and a local project gallery.

use std::fs::{self, File};
use std::io;
use std::panic;
use std::sync::Mutex;

use chrono::Utc;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use folio::app::App;
use folio::cache::log_path;
use folio::cli::Cli;
use folio::config::Config;
use folio::format::{format_number, time_since};
use folio::monitor::RateLimitMonitor;
use folio::projects::load_projects;
use folio::session::PortfolioSession;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "folio=info".into())
}

/// Logs go to stderr in plain mode; the TUI owns the terminal otherwise, so they go to a file.
fn init_tracing(plain: bool) -> io::Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter());

    if plain {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
        return Ok(());
    }

    if let Some(path) = log_path() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }
    Ok(())
}

/// Restore the terminal before printing a panic message.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

async fn print_summary(session: &mut PortfolioSession) -> folio::Result<()> {
    let snapshot = session.load_all().await?;
    let profile = &snapshot.profile;

    println!("{} (@{})", profile.display_name(), profile.login);
    if let Some(bio) = &profile.bio {
        println!("{}", bio);
    }
    println!(
        "{} repos · {} followers · {} following",
        profile.public_repos, profile.followers, profile.following
    );
    println!();

    let now = Utc::now();
    for repo in &snapshot.repos {
        println!(
            "  {:<30} ★ {:>6}  {:<12} updated {}",
            repo.name,
            format_number(repo.stargazers_count),
            repo.language.as_deref().unwrap_or("Unknown"),
            time_since(repo.updated_at, now)
        );
    }

    match load_projects(&session.config().projects_path).await {
        Ok(projects) => {
            println!();
            for project in projects {
                println!("  {} ({} cards)", project.title, project.cards.len());
            }
        }
        Err(e) => error!(error = %e, "project gallery unavailable"),
    }
    Ok(())
}

async fn run_tui(session: PortfolioSession) -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.plain)?;

    let config = Config::from_cli(&cli)?;
    info!(user = %config.username, "starting folio");

    let mut session = PortfolioSession::new(config)?;
    let monitor = RateLimitMonitor::spawn(
        session.client().clone(),
        session.config().rate_limit_initial_delay,
        session.config().rate_limit_interval,
    );

    let result: Result<(), Box<dyn std::error::Error>> = if cli.plain {
        print_summary(&mut session).await.map_err(Into::into)
    } else {
        run_tui(session).await
    };

    monitor.shutdown().await;
    result
}
