// List rendering for repositories and gallery projects.
// Provides styled list views with loading, error, and empty states.

use chrono::Utc;
use ratatui::{prelude::*, widgets::*};

use crate::format::{format_number, hex_to_rgb, language_color, time_since};
use crate::github::Repository;
use crate::projects::Project;
use crate::state::{LoadingState, SelectableList};

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render the GitHub error state with a retry hint.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str, hint: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "⚠ Unable to load GitHub data",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(error, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(hint.to_string()),
    ];
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

fn language_style(language: Option<&str>) -> Style {
    match hex_to_rgb(language_color(language)) {
        Some((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
        None => Style::default().fg(Color::Gray),
    }
}

fn repository_item(repo: &Repository) -> ListItem<'static> {
    let mut title = vec![Span::styled(
        repo.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if repo.fork {
        title.push(Span::styled(" [fork]", Style::default().fg(Color::DarkGray)));
    }
    for topic in repo.topics.iter().take(3) {
        title.push(Span::styled(
            format!(" #{}", topic),
            Style::default().fg(Color::Blue),
        ));
    }

    let description = repo
        .description
        .clone()
        .unwrap_or_else(|| "No description available".to_string());

    let footer = vec![
        Span::styled("● ", language_style(repo.language.as_deref())),
        Span::raw(repo.language.clone().unwrap_or_else(|| "Unknown".to_string())),
        Span::raw(format!(
            "  ★ {}  ⑂ {}  ",
            format_number(repo.stargazers_count),
            format_number(repo.forks_count)
        )),
        Span::styled(
            format!("Updated {}", time_since(repo.updated_at, Utc::now())),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    ListItem::new(vec![
        Line::from(title),
        Line::from(Span::styled(description, Style::default().fg(Color::Gray))),
        Line::from(footer),
        Line::from(""),
    ])
}

pub fn render_repositories_list(
    frame: &mut Frame,
    list: &mut SelectableList<Repository>,
    hint: &str,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recent Repositories ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &list.data {
        LoadingState::Idle | LoadingState::Loading => {
            render_loading(frame, inner, "Fetching repositories")
        }
        LoadingState::Error(e) => render_error(frame, inner, e, hint),
        LoadingState::Loaded(repos) if repos.is_empty() => {
            render_empty(frame, inner, "No public repositories")
        }
        LoadingState::Loaded(repos) => {
            let items: Vec<ListItem> = repos.iter().map(repository_item).collect();
            let widget = List::new(items)
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("▶ ");
            frame.render_stateful_widget(widget, inner, &mut list.list_state);
        }
    }
}

pub fn render_projects_list(frame: &mut Frame, list: &mut SelectableList<Project>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title(" Projects ");
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    match &list.data {
        LoadingState::Idle | LoadingState::Loading => render_loading(frame, inner, "Loading projects"),
        LoadingState::Error(e) => {
            let text = Paragraph::new(format!("❌ Error loading projects: {}", e))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(text, inner);
        }
        LoadingState::Loaded(projects) if projects.is_empty() => {
            render_empty(frame, inner, "No projects")
        }
        LoadingState::Loaded(projects) => {
            let items: Vec<ListItem> = projects
                .iter()
                .map(|p| ListItem::new(p.title.clone()))
                .collect();
            let widget = List::new(items)
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
            frame.render_stateful_widget(widget, inner, &mut list.list_state);
        }
    }

    render_project_cards(frame, list.selected_item(), chunks[1]);
}

fn render_project_cards(frame: &mut Frame, project: Option<&Project>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Cards ");
    let Some(project) = project else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(project.description.clone()),
        Line::from(""),
    ];
    for card in &project.cards {
        lines.push(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(Color::Cyan)),
            Span::raw(card.alt.clone()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", card.link),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::from(Span::styled(
            format!("  image: {}", card.image),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let text = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(text, area);
}
