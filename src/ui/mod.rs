//! Terminal rendering.
//!
//! One frame is drawn from a single [`Theme`](crate::theme::Theme) snapshot,
//! so a dark-mode toggle never shows a half-switched screen.

mod header;
mod projects;
mod tabs;
mod theme;

pub use tabs::render_section_tabs;
pub use theme::{to_color, Palette};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::router::Section;
use header::render_header;
use projects::render_projects;

const KEYBINDS: &str =
    " ←/→ section  ·  d theme  ·  l like  ·  [ ] page  ·  f language  ·  r reload  ·  q quit";

/// Draw the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::from_theme(&app.theme());
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let [header_area, tabs_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app, &palette);

    let router = &app.portfolio.router;
    frame.render_widget(
        Paragraph::new(render_section_tabs(&router.sections(), router.active_section(), &palette)),
        tabs_area,
    );

    render_body(frame, body_area, app, &palette);

    frame.render_widget(
        Paragraph::new(Span::styled(KEYBINDS, palette.dim())),
        footer_area,
    );
}

fn render_body(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let section = app.portfolio.router.active_section();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border())
        .style(palette.panel())
        .title(Span::styled(format!(" {} ", section.label()), palette.heading()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match section {
        Section::Projects => render_projects(frame, inner, &app.portfolio.feed, palette),
        other => {
            let text = vec![
                Line::from(Span::styled(placeholder(other), palette.dim())),
            ];
            frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
        }
    }
}

fn placeholder(section: Section) -> &'static str {
    match section {
        Section::Experience => "Roles and responsibilities, most recent first.",
        Section::Education => "Degrees and coursework.",
        Section::Skills => "Languages, frameworks and tools.",
        Section::Certificates => "Certifications and credentials.",
        Section::Contact => "Email, GitHub and social links.",
        Section::Projects => "",
    }
}
