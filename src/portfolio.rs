//! The five core components wired together.
//!
//! [`Portfolio::initialize`] is the startup sequence: theme first, then the
//! engagement counters. The feed stays `Idle` until the projects section is
//! first entered.

use std::sync::Arc;

use crate::adapters::{EnvColorSchemeProbe, FileStore, MemoryStore, ReqwestHttpClient};
use crate::config::FolioConfig;
use crate::engagement::{EngagementState, EngagementTracker};
use crate::feed::{FeedFetch, RepositoryFeed};
use crate::preferences::PreferenceStore;
use crate::router::{Section, SectionRouter};
use crate::theme::{Theme, ThemeController};
use crate::traits::{ColorSchemeProbe, HttpClient, HttpError, KeyValueStore};

/// Collaborators a [`Portfolio`] is built from.
pub struct PortfolioDeps {
    pub persistent: Arc<dyn KeyValueStore>,
    pub session: Arc<dyn KeyValueStore>,
    pub http: Arc<dyn HttpClient>,
    pub color_scheme: Arc<dyn ColorSchemeProbe>,
}

impl PortfolioDeps {
    /// Production collaborators: file-backed preferences, reqwest, and the
    /// environment color-scheme probe.
    pub fn from_config(config: &FolioConfig) -> Result<Self, HttpError> {
        let persistent: Arc<dyn KeyValueStore> = match &config.storage_path {
            Some(path) => Arc::new(FileStore::new(path)),
            None => match FileStore::default_location() {
                Some(store) => Arc::new(store),
                None => {
                    tracing::warn!("No home directory; preferences will not outlive this session");
                    Arc::new(MemoryStore::new())
                }
            },
        };

        Ok(Self {
            persistent,
            session: Arc::new(MemoryStore::new()),
            http: Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout())?),
            color_scheme: Arc::new(EnvColorSchemeProbe::new()),
        })
    }
}

/// Preferences, theme, engagement, feed and router for one run.
#[derive(Debug)]
pub struct Portfolio {
    pub prefs: PreferenceStore,
    pub theme: ThemeController,
    pub engagement: EngagementTracker,
    pub feed: RepositoryFeed,
    pub router: SectionRouter,
}

impl Portfolio {
    pub fn new(config: &FolioConfig, deps: PortfolioDeps) -> Self {
        let prefs = PreferenceStore::new(deps.persistent, deps.session);
        let feed = RepositoryFeed::new(deps.http, prefs.clone(), config.github_owner.clone())
            .with_api_base(config.api_base_url.clone())
            .with_page_size(config.page_size);

        Self {
            theme: ThemeController::new(prefs.clone(), deps.color_scheme),
            engagement: EngagementTracker::new(prefs.clone()),
            feed,
            router: SectionRouter::new(config.certificates_enabled),
            prefs,
        }
    }

    /// Load the theme and count this launch as a visit.
    pub fn initialize(&mut self) -> (Theme, EngagementState) {
        let theme = self.theme.initialize();
        let engagement = self.engagement.initialize();
        tracing::info!(
            "Portfolio ready: dark={} likes={} visitors={}",
            theme.is_dark(),
            engagement.like_count,
            engagement.visitor_count
        );
        (theme, engagement)
    }

    /// Navigate to `id`. Entering the projects section starts the feed.
    pub fn select_section(&mut self, id: &str) -> Option<FeedFetch> {
        if !self.router.select(id) {
            return None;
        }
        self.on_section_entered()
    }

    /// Navigate to the next section in order.
    pub fn next_section(&mut self) -> Option<FeedFetch> {
        self.router.next();
        self.on_section_entered()
    }

    /// Navigate to the previous section in order.
    pub fn previous_section(&mut self) -> Option<FeedFetch> {
        self.router.previous();
        self.on_section_entered()
    }

    /// Retry the feed after a failure. Only meaningful on the projects
    /// section; a loaded or loading feed is left alone.
    pub fn reload_feed(&mut self) -> Option<FeedFetch> {
        self.on_section_entered()
    }

    fn on_section_entered(&mut self) -> Option<FeedFetch> {
        if self.router.active_section() == Section::Projects {
            self.feed.begin_load()
        } else {
            // Leaving the projects view abandons any fetch it started
            self.feed.detach();
            None
        }
    }
}
