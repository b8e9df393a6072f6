//! Section tab strip.
//!
//! Uses a `▶` marker for the active section, like the thread switcher.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::router::Section;

use super::theme::Palette;

/// Render the enabled sections as one line, numbered by their hotkey.
pub fn render_section_tabs(sections: &[Section], active: Section, palette: &Palette) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, section) in sections.iter().enumerate() {
        let hotkey = Section::ALL
            .iter()
            .position(|s| s == section)
            .map(|i| i + 1)
            .unwrap_or(0);
        let label = format!("{} {}", hotkey, section.label());

        if *section == active {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label,
                Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label, palette.dim()));
        }

        if idx + 1 < sections.len() {
            spans.push(Span::raw("   "));
        }
    }

    Line::from(spans)
}
