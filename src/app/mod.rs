//! Application state for the TUI.
//!
//! [`App`] owns the [`Portfolio`] and is only touched from the event loop.
//! The repository fetch is the one piece of work that runs elsewhere: it is
//! spawned on tokio and its [`AppMessage::FeedLoaded`] comes back through
//! `message_rx`.

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::time::Instant;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::FolioConfig;
use crate::feed::FeedFetch;
use crate::portfolio::Portfolio;
use crate::theme::Theme;

/// View-model for one run of the portfolio.
pub struct App {
    pub portfolio: Portfolio,
    pub profile_name: String,
    pub profile_title: String,
    /// Set when the event loop should exit
    pub should_quit: bool,
    /// Set when something visible changed since the last draw
    pub needs_redraw: bool,
    /// Taken by the event loop so it can `select!` on it
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    theme_rx: watch::Receiver<Theme>,
    fetch_task: Option<JoinHandle<()>>,
    ack_visible: bool,
}

impl App {
    /// Build around an initialized portfolio.
    pub fn new(portfolio: Portfolio, config: &FolioConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let theme_rx = portfolio.theme.subscribe();
        Self {
            portfolio,
            profile_name: config.profile_name.clone(),
            profile_title: config.profile_title.clone(),
            should_quit: false,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            theme_rx,
            fetch_task: None,
            ack_visible: false,
        }
    }

    /// The theme to draw with. Always a complete light or dark set.
    pub fn theme(&self) -> Theme {
        *self.theme_rx.borrow()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
    }

    /// Whether the like acknowledgment is showing.
    pub fn like_acknowledged(&self) -> bool {
        self.ack_visible
    }

    /// Run `fetch` on the runtime, reporting back as [`AppMessage::FeedLoaded`].
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_fetch(&mut self, fetch: Option<FeedFetch>) {
        if !self.portfolio.feed.is_loading() {
            // Navigation detached the feed; the old task's result is moot
            if let Some(task) = self.fetch_task.take() {
                task.abort();
            }
        }

        let Some(fetch) = fetch else {
            return;
        };

        tracing::debug!("Spawning repository fetch {:?}", fetch.ticket());
        let tx = self.message_tx.clone();
        self.fetch_task = Some(tokio::spawn(async move {
            let outcome = fetch.run().await;
            let _ = tx.send(AppMessage::FeedLoaded(outcome));
        }));
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::FeedLoaded(outcome) => {
                if self.portfolio.feed.complete(outcome) {
                    self.fetch_task = None;
                    self.mark_dirty();
                }
            }
        }
    }

    /// Periodic housekeeping. Expires the like acknowledgment.
    pub fn tick(&mut self, now: Instant) {
        let engagement = &mut self.portfolio.engagement;
        engagement.clear_expired_acknowledgment(now);
        let visible = engagement.acknowledgment_active(now);
        if visible != self.ack_visible {
            self.ack_visible = visible;
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::adapters::MemoryStore;
    use crate::engagement::LIKE_ACK_DURATION;
    use crate::feed::FeedState;
    use crate::portfolio::PortfolioDeps;
    use crate::router::Section;
    use crate::traits::FixedColorScheme;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::json;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app(http: &MockHttpClient) -> App {
        let config = FolioConfig::default().with_github_owner("octocat");
        let mut portfolio = Portfolio::new(
            &config,
            PortfolioDeps {
                persistent: Arc::new(MemoryStore::new()),
                session: Arc::new(MemoryStore::new()),
                http: Arc::new(http.clone()),
                color_scheme: Arc::new(FixedColorScheme(Some(false))),
            },
        );
        portfolio.initialize();
        App::new(portfolio, &config)
    }

    #[tokio::test]
    async fn test_dark_mode_key_republishes_theme() {
        let mut app = test_app(&MockHttpClient::new());
        assert!(!app.theme().is_dark());

        app.handle_key(key(KeyCode::Char('d')));

        assert!(app.theme().is_dark());
        assert_eq!(app.theme(), Theme::DARK);
    }

    #[tokio::test]
    async fn test_like_key_and_acknowledgment() {
        let mut app = test_app(&MockHttpClient::new());
        app.handle_key(key(KeyCode::Char('l')));
        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.portfolio.engagement.like_count(), 128);

        let now = Instant::now();
        app.tick(now);
        assert!(app.like_acknowledged());

        app.needs_redraw = false;
        app.tick(now + LIKE_ACK_DURATION);
        assert!(!app.like_acknowledged());
        assert!(app.needs_redraw);
    }

    #[tokio::test]
    async fn test_entering_projects_fetches_in_background() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(&json!([{
            "id": 1,
            "name": "folio",
            "description": "Terminal portfolio",
            "language": "Rust",
            "html_url": "https://github.com/octocat/folio",
            "homepage": "",
            "updated_at": "2024-05-01T00:00:00Z",
            "fork": false
        }])));
        let mut app = test_app(&http);
        let mut rx = app.message_rx.take().unwrap();

        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.portfolio.router.active_section(), Section::Projects);
        assert!(app.portfolio.feed.is_loading());

        let message = rx.recv().await.unwrap();
        app.handle_message(message);

        assert!(matches!(app.portfolio.feed.state(), FeedState::Ready));
        assert_eq!(app.portfolio.feed.items()[0].name, "folio");
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_disabled_section_key_is_ignored() {
        let mut app = test_app(&MockHttpClient::new());
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.portfolio.router.active_section(), Section::Experience);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = test_app(&MockHttpClient::new());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = test_app(&MockHttpClient::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
