//! Projects section: language filter, one page of repositories, pager.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::error::FolioError;
use crate::feed::{FeedState, RepositoryFeed, RepositoryRecord};

use super::theme::Palette;

pub fn render_projects(frame: &mut Frame, area: Rect, feed: &RepositoryFeed, palette: &Palette) {
    let [filter_area, list_area, pager_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    match feed.state() {
        FeedState::Idle => {
            render_notice(frame, list_area, "Press r to load repositories.", palette);
        }
        FeedState::Loading => {
            let text = format!("Loading repositories for {}…", feed.owner());
            render_notice(frame, list_area, &text, palette);
        }
        FeedState::Failed(err) => {
            let err = FolioError::from(err.clone());
            let mut lines = vec![
                Line::from(Span::styled(
                    "Could not load repositories.",
                    Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(err.user_message(), palette.dim())),
            ];
            if err.is_retryable() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled("Press r to retry.", palette.dim())));
            }
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), list_area);
        }
        FeedState::Ready => {
            frame.render_widget(Paragraph::new(filter_line(feed, palette)), filter_area);

            let page = feed.page();
            if page.is_empty() {
                let text = format!("No {} repositories to show.", feed.selected_language());
                render_notice(frame, list_area, &text, palette);
            } else {
                let lines: Vec<Line> = page
                    .iter()
                    .flat_map(|record| repository_lines(record, palette))
                    .collect();
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), list_area);
            }

            let pager = format!(
                " Page {} / {}  ·  {} repositories",
                feed.current_page(),
                feed.total_pages(),
                feed.filtered_count()
            );
            frame.render_widget(Paragraph::new(Span::styled(pager, palette.dim())), pager_area);
        }
    }
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), palette.dim())),
        area,
    );
}

fn filter_line(feed: &RepositoryFeed, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(" Language: ", palette.dim())];
    for language in feed.available_languages() {
        if language == feed.selected_language() {
            spans.push(Span::styled(
                format!("[{}]", language),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {} ", language), palette.dim()));
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn repository_lines(record: &RepositoryRecord, palette: &Palette) -> Vec<Line<'static>> {
    let mut meta = vec![Span::styled(format!(" {}", record.name), palette.heading())];
    if let Some(language) = &record.language {
        meta.push(Span::styled(format!("  {}", language), Style::default().fg(palette.secondary)));
    }
    meta.push(Span::styled(
        format!("  ★ {}  updated {}", record.stargazers_count, record.updated_at.format("%Y-%m-%d")),
        palette.dim(),
    ));

    let mut lines = vec![Line::from(meta)];
    if let Some(description) = &record.description {
        lines.push(Line::from(format!("   {}", description)));
    }

    let mut links = vec![Span::styled(format!("   {}", record.html_url), palette.dim())];
    if let Some(homepage) = &record.homepage_url {
        links.push(Span::styled(format!("  ↗ {}", homepage), Style::default().fg(palette.accent)));
    }
    lines.push(Line::from(links));
    lines.push(Line::default());
    lines
}
