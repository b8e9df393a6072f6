//! Theme tokens as ratatui colors.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::{Rgb, Theme, Token};

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Every token of one [`Theme`], resolved to [`Color`]s for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub text: Color,
    pub text_dim: Color,
    pub background: Color,
    pub surface: Color,
    pub border: Color,
}

impl Palette {
    pub fn from_theme(theme: &Theme) -> Self {
        let c = |token| to_color(theme.color(token));
        Self {
            primary: c(Token::Primary),
            secondary: c(Token::Secondary),
            accent: c(Token::Accent),
            text: c(Token::TextPrimary),
            text_dim: c(Token::TextSecondary),
            background: c(Token::BackgroundPrimary),
            surface: c(Token::BackgroundSecondary),
            border: c(Token::Border),
        }
    }

    /// Base style for a full-screen area.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        let dark = Palette::from_theme(&Theme::DARK);
        assert_eq!(dark.background, Color::Rgb(0x0f, 0x17, 0x2a));
        assert_eq!(dark.primary, Color::Rgb(0x66, 0x7e, 0xea));

        let light = Palette::from_theme(&Theme::LIGHT);
        assert_eq!(light.background, Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(light.border, Color::Rgb(0xe5, 0xe7, 0xeb));
    }
}
