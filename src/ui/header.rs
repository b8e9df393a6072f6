//! Profile header with the like and visitor counters.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

use super::theme::Palette;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let engagement = &app.portfolio.engagement;
    let stats = engagement.stats();

    let heart = if engagement.has_liked() { "♥" } else { "♡" };
    let mut likes = vec![
        Span::styled(
            format!("{} {}", heart, engagement.like_count()),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "   {} visitors · {} today · {} this week",
                stats.total, stats.today, stats.this_week
            ),
            palette.dim(),
        ),
    ];
    if app.like_acknowledged() {
        likes.push(Span::styled(
            "   Thanks for the like!",
            Style::default().fg(palette.secondary).add_modifier(Modifier::ITALIC),
        ));
    }

    let mode = if app.theme().is_dark() { "dark" } else { "light" };

    let lines = vec![
        Line::from(Span::styled(app.profile_name.clone(), palette.heading())),
        Line::from(vec![
            Span::styled(app.profile_title.clone(), Style::default().fg(palette.secondary)),
            Span::styled(format!("   [{} mode]", mode), palette.dim()),
        ]),
        Line::from(likes),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border())
        .style(palette.base());

    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Left),
        area,
    );
}
