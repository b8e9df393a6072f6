//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::router::Section;

use super::App;

impl App {
    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),

            KeyCode::Right | KeyCode::Tab => {
                let fetch = self.portfolio.next_section();
                self.spawn_fetch(fetch);
            }
            KeyCode::Left | KeyCode::BackTab => {
                let fetch = self.portfolio.previous_section();
                self.spawn_fetch(fetch);
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                let fetch = self.portfolio.select_section(Section::ALL[index].id());
                self.spawn_fetch(fetch);
            }

            KeyCode::Char('d') => {
                self.portfolio.theme.toggle();
            }
            KeyCode::Char('l') => {
                self.portfolio.engagement.like();
            }

            KeyCode::Char(']') | KeyCode::PageDown => self.portfolio.feed.next_page(),
            KeyCode::Char('[') | KeyCode::PageUp => self.portfolio.feed.prev_page(),
            KeyCode::Char('f') => self.portfolio.feed.cycle_language_filter(),
            KeyCode::Char('a') => {
                self.portfolio.feed.set_language_filter(crate::feed::ALL_LANGUAGES);
            }
            KeyCode::Char('r') => {
                let fetch = self.portfolio.reload_feed();
                self.spawn_fetch(fetch);
            }

            _ => {}
        }
    }
}
