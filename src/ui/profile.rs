// Profile and statistics panes.

use ratatui::{prelude::*, widgets::*};

use crate::github::Profile;
use crate::session::StatsCards;
use crate::state::LoadingState;

use super::list::{render_error, render_loading};

const DEFAULT_BIO: &str = "Full-Stack Developer passionate about creating amazing web experiences.";

pub fn render_profile(frame: &mut Frame, profile: &LoadingState<Profile>, hint: &str, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" GitHub Profile ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = match profile {
        LoadingState::Loaded(profile) => profile,
        LoadingState::Error(e) => return render_error(frame, inner, e, hint),
        _ => return render_loading(frame, inner, "Fetching profile"),
    };

    let stat = |value: u64, label: &'static str| {
        vec![
            Span::styled(
                value.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}   ", label), Style::default().fg(Color::DarkGray)),
        ]
    };

    let mut stats = stat(profile.public_repos, "Repos");
    stats.extend(stat(profile.followers, "Followers"));
    stats.extend(stat(profile.following, "Following"));

    let mut lines = vec![
        Line::from(Span::styled(
            profile.display_name().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("@{}", profile.login),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(profile.bio.clone().unwrap_or_else(|| DEFAULT_BIO.to_string())),
        Line::from(""),
        Line::from(stats),
    ];
    if let Some(url) = &profile.html_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            url.clone(),
            Style::default().fg(Color::Blue),
        )));
    }

    let text = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(text, inner);
}

pub fn render_stats(frame: &mut Frame, stats: &LoadingState<StatsCards>, hint: &str, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" GitHub Stats ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stats = match stats {
        LoadingState::Loaded(stats) => stats,
        LoadingState::Error(e) => return render_error(frame, inner, e, hint),
        _ => return render_loading(frame, inner, "Loading statistics"),
    };

    let card = |title: &'static str, url: &str| {
        vec![
            Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(url.to_string(), Style::default().fg(Color::Blue))),
            Line::from(""),
        ]
    };

    let mut lines = card("Top Languages", &stats.top_languages);
    lines.extend(card("GitHub Streak", &stats.streak));
    lines.extend(card("Profile Stats", &stats.profile_stats));

    let text = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(text, inner);
}
