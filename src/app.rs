// App state and main event loop.
// Owns the portfolio session and feeds its data to the tab panes.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tracing::info;

use crate::error::FolioError;
use crate::github::{Profile, Repository};
use crate::projects::{Project, load_projects};
use crate::session::{PortfolioSession, Snapshot, StatsCards};
use crate::state::{LoadingState, SelectableList};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Profile,
    Repositories,
    Stats,
    Projects,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Profile, Tab::Repositories, Tab::Stats, Tab::Projects];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Repositories => "Repositories",
            Tab::Stats => "Stats",
            Tab::Projects => "Projects",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Profile => Tab::Repositories,
            Tab::Repositories => Tab::Stats,
            Tab::Stats => Tab::Projects,
            Tab::Projects => Tab::Profile,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Profile => Tab::Projects,
            Tab::Repositories => Tab::Profile,
            Tab::Stats => Tab::Repositories,
            Tab::Projects => Tab::Stats,
        }
    }
}

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Refresh,
}

/// Retry hint shown when the request never got an answer.
pub const CONNECTION_HINT: &str = "Check your connection, then press r to retry";
/// Retry hint shown when GitHub answered with an error.
pub const UPSTREAM_HINT: &str = "GitHub refused the request, press r to retry";

/// Pick the retry hint for a failed GitHub load.
pub fn retry_hint(error: &FolioError) -> &'static str {
    if error.is_fetch_failure() {
        CONNECTION_HINT
    } else {
        UPSTREAM_HINT
    }
}

/// Main application state.
pub struct App {
    session: PortfolioSession,
    /// Currently active tab.
    pub active_tab: Tab,
    pub profile: LoadingState<Profile>,
    pub repos: SelectableList<Repository>,
    pub stats: LoadingState<StatsCards>,
    pub projects: SelectableList<Project>,
    /// Hint under the GitHub error panes.
    pub retry_hint: &'static str,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(session: PortfolioSession) -> Self {
        Self {
            session,
            active_tab: Tab::default(),
            profile: LoadingState::Idle,
            repos: SelectableList::new(),
            stats: LoadingState::Idle,
            projects: SelectableList::new(),
            retry_hint: CONNECTION_HINT,
            should_quit: false,
        }
    }

    pub fn username(&self) -> &str {
        &self.session.config().username
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        self.set_github_loading();
        self.projects.set_loading();
        terminal.draw(|frame| ui::draw(frame, self))?;

        self.load_gallery().await;
        self.load_github(false).await;

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            if self.poll_events()? == Action::Refresh {
                self.set_github_loading();
                terminal.draw(|frame| ui::draw(frame, self))?;
                self.load_github(true).await;
            }
        }
        Ok(())
    }

    #[allow(clippy::collapsible_if)]
    fn poll_events(&mut self) -> io::Result<Action> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(self.handle_key(key.code));
                }
            }
        }
        Ok(Action::None)
    }

    /// Apply a key press to the UI state.
    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab => self.active_tab = self.active_tab.prev(),
            KeyCode::Char('r') => return Action::Refresh,
            KeyCode::Down | KeyCode::Char('j') => match self.active_tab {
                Tab::Repositories => self.repos.select_next(),
                Tab::Projects => self.projects.select_next(),
                _ => {}
            },
            KeyCode::Up | KeyCode::Char('k') => match self.active_tab {
                Tab::Repositories => self.repos.select_prev(),
                Tab::Projects => self.projects.select_prev(),
                _ => {}
            },
            _ => {}
        }
        Action::None
    }

    fn set_github_loading(&mut self) {
        self.profile = LoadingState::Loading;
        self.repos.set_loading();
        self.stats = LoadingState::Loading;
    }

    /// Load the GitHub panes, from cache unless `refresh` is set.
    pub async fn load_github(&mut self, refresh: bool) {
        let result = if refresh {
            self.session.refresh().await
        } else {
            self.session.load_all().await
        };

        match result {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(e) => {
                self.retry_hint = retry_hint(&e);
                let message = e.to_string();
                self.profile = LoadingState::Error(message.clone());
                self.repos.set_error(message.clone());
                self.stats = LoadingState::Error(message);
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        info!(repos = snapshot.repos.len(), "GitHub panes updated");
        self.profile = LoadingState::Loaded(snapshot.profile);
        self.repos.set_loaded(snapshot.repos);
        self.stats = LoadingState::Loaded(snapshot.stats);
    }

    pub async fn load_gallery(&mut self) {
        match load_projects(&self.session.config().projects_path).await {
            Ok(projects) => self.projects.set_loaded(projects),
            Err(e) => self.projects.set_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cache::SystemClock;
    use crate::config::Config;
    use crate::test_support::{Route, local_session, serve};

    fn offline_app() -> App {
        App::new(PortfolioSession::new(Config::default()).unwrap())
    }

    #[test]
    fn test_tab_cycle() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
        assert_eq!(Tab::Projects.next(), Tab::Profile);
    }

    #[test]
    fn test_keys() {
        let mut app = offline_app();

        assert_eq!(app.handle_key(KeyCode::Tab), Action::None);
        assert_eq!(app.active_tab, Tab::Repositories);

        assert_eq!(app.handle_key(KeyCode::Char('r')), Action::Refresh);

        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_list_navigation_follows_active_tab() {
        let mut app = offline_app();
        app.projects.set_loaded(vec![
            Project {
                title: "a".to_string(),
                description: String::new(),
                cards: Vec::new(),
            },
            Project {
                title: "b".to_string(),
                description: String::new(),
                cards: Vec::new(),
            },
        ]);

        app.handle_key(KeyCode::Down);
        assert_eq!(app.projects.selected(), Some(0), "profile tab ignores arrows");

        app.active_tab = Tab::Projects;
        app.handle_key(KeyCode::Char('j'));
        assert_eq!(app.projects.selected(), Some(1));
    }

    #[tokio::test]
    async fn test_load_error_marks_all_github_panes() {
        let server = serve(vec![]).await;
        let mut app = App::new(local_session(&server, Config::default(), Arc::new(SystemClock)));

        app.load_github(false).await;

        assert!(matches!(app.profile, LoadingState::Error(_)));
        assert!(matches!(app.repos.data, LoadingState::Error(_)));
        assert!(matches!(app.stats, LoadingState::Error(_)));
        assert_eq!(app.retry_hint, UPSTREAM_HINT, "a 404 is an upstream answer");
    }

    #[test]
    fn test_retry_hint_separates_connection_from_upstream() {
        let timeout = FolioError::Timeout {
            url: "http://localhost/users/octocat".to_string(),
            after: Duration::from_millis(100),
        };
        let missing = FolioError::NotFound("http://localhost/users/ghost".to_string());

        assert_eq!(retry_hint(&timeout), CONNECTION_HINT);
        assert_eq!(retry_hint(&missing), UPSTREAM_HINT);
    }

    #[tokio::test]
    async fn test_load_success_fills_panes() {
        let server = serve(vec![
            Route::json("/users/octocat", r#"{"login":"octocat","name":"The Octocat"}"#),
            Route::json(
                "/users/octocat/repos",
                r#"[{"name":"a","html_url":"u","updated_at":"2024-01-01T00:00:00Z"}]"#,
            ),
        ])
        .await;
        let mut app = App::new(local_session(&server, Config::default(), Arc::new(SystemClock)));

        app.load_github(false).await;

        assert_eq!(app.profile.data().unwrap().display_name(), "The Octocat");
        assert_eq!(app.repos.selected_item().unwrap().name, "a");
        assert!(app.stats.is_loaded());
    }
}
