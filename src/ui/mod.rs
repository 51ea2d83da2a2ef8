// UI module for rendering the TUI.
// Contains the tab bar, the GitHub panes, and the project gallery.

mod list;
mod profile;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::Profile => profile::render_profile(frame, &app.profile, app.retry_hint, area),
        Tab::Repositories => {
            list::render_repositories_list(frame, &mut app.repos, app.retry_hint, area)
        }
        Tab::Stats => profile::render_stats(frame, &app.stats, app.retry_hint, area),
        Tab::Projects => list::render_projects_list(frame, &mut app.projects, area),
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
    ];
    if matches!(app.active_tab, Tab::Repositories | Tab::Projects) {
        hints.push(Span::raw("  ↑↓ "));
        hints.push(Span::styled("Navigate", Style::default().fg(Color::DarkGray)));
    }
    hints.extend([
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]);

    if app.profile.is_loading() {
        hints.push(Span::styled(
            "  ⏳ loading GitHub data",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}
