//! GitHub-backed projects feed.
//!
//! [`RepositoryFeed`] is a small state machine:
//!
//! ```text
//! Idle ──begin_load──▶ Loading ──complete(Ok)──▶ Ready
//!   ▲                     │
//!   └──────detach─────────┤
//!                         └──complete(Err)──▶ Failed ──begin_load──▶ Loading
//! ```
//!
//! The fetch itself is handed out as a [`FeedFetch`] so the caller decides
//! where it runs; the binary spawns it on tokio and reports the
//! [`FeedOutcome`] back over its message channel. Only one fetch is ever
//! outstanding. A session cache short-circuits `Idle → Ready` on later
//! loads.

mod fetch;
mod pager;
mod record;

pub use fetch::{curate, fetch_repositories, repos_url, GITHUB_API_BASE, USER_AGENT};
pub use pager::{available_languages, matches_language, Pager, ALL_LANGUAGES, DEFAULT_PAGE_SIZE};
pub use record::{GitHubRepoPayload, RepositoryRecord};

use std::fmt;
use std::sync::Arc;

use crate::error::FeedError;
use crate::preferences::{PreferenceKey, PreferenceStore};
use crate::traits::HttpClient;

/// Where the feed is in its lifecycle.
#[derive(Debug, Clone)]
pub enum FeedState {
    Idle,
    Loading,
    Ready,
    /// The working set is empty; the error is kept for display and logs.
    Failed(FeedError),
}

impl FeedState {
    pub fn label(&self) -> &'static str {
        match self {
            FeedState::Idle => "idle",
            FeedState::Loading => "loading",
            FeedState::Ready => "ready",
            FeedState::Failed(_) => "failed",
        }
    }
}

/// Identifies one fetch so a result can be matched to the request that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedTicket(u64);

/// A pending repository request, detached from the feed so it can run on
/// another task.
pub struct FeedFetch {
    ticket: FeedTicket,
    client: Arc<dyn HttpClient>,
    url: String,
}

impl FeedFetch {
    pub fn ticket(&self) -> FeedTicket {
        self.ticket
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue the request.
    pub async fn run(self) -> FeedOutcome {
        let result = fetch_repositories(self.client.as_ref(), &self.url).await;
        FeedOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

impl fmt::Debug for FeedFetch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedFetch")
            .field("ticket", &self.ticket)
            .field("url", &self.url)
            .finish()
    }
}

/// The result of a [`FeedFetch`].
#[derive(Debug, Clone)]
pub struct FeedOutcome {
    pub ticket: FeedTicket,
    pub result: Result<Vec<RepositoryRecord>, FeedError>,
}

/// Fetches, caches, filters and paginates one account's repositories.
pub struct RepositoryFeed {
    client: Arc<dyn HttpClient>,
    prefs: PreferenceStore,
    owner: String,
    api_base: String,
    state: FeedState,
    items: Vec<RepositoryRecord>,
    selected_language: String,
    /// Indexes into `items` passing the language filter
    filtered: Vec<usize>,
    pager: Pager,
    generation: u64,
}

impl RepositoryFeed {
    pub fn new(client: Arc<dyn HttpClient>, prefs: PreferenceStore, owner: impl Into<String>) -> Self {
        Self {
            client,
            prefs,
            owner: owner.into(),
            api_base: GITHUB_API_BASE.to_string(),
            state: FeedState::Idle,
            items: Vec::new(),
            selected_language: ALL_LANGUAGES.to_string(),
            filtered: Vec::new(),
            pager: Pager::default(),
            generation: 0,
        }
    }

    /// Point the feed at another API root (a GitHub Enterprise host, or a
    /// test server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pager = Pager::new(page_size);
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Session cache key for this owner.
    pub fn cache_key(&self) -> PreferenceKey {
        PreferenceKey::session(format!("repos:{}", self.owner))
    }

    /// Start a load.
    ///
    /// Resolves synchronously from memory or the session cache when it can.
    /// Returns a fetch only on the `Idle/Failed → Loading` transition; while a
    /// fetch is outstanding this returns `None`.
    pub fn begin_load(&mut self) -> Option<FeedFetch> {
        match self.state {
            FeedState::Loading => {
                tracing::debug!("Repository fetch already in flight for {}", self.owner);
                return None;
            }
            FeedState::Ready => return None,
            FeedState::Idle | FeedState::Failed(_) => {}
        }

        if let Some(cached) = self.prefs.lookup::<Vec<RepositoryRecord>>(&self.cache_key()) {
            tracing::debug!(
                "Serving {} repositories for {} from session cache",
                cached.len(),
                self.owner
            );
            self.apply_ready(cached);
            return None;
        }

        self.generation += 1;
        self.state = FeedState::Loading;
        Some(FeedFetch {
            ticket: FeedTicket(self.generation),
            client: Arc::clone(&self.client),
            url: repos_url(&self.api_base, &self.owner),
        })
    }

    /// Deliver a fetch result. Returns `false` if the result was stale and
    /// discarded.
    pub fn complete(&mut self, outcome: FeedOutcome) -> bool {
        if !matches!(self.state, FeedState::Loading) || outcome.ticket != FeedTicket(self.generation) {
            tracing::debug!("Discarding stale repository result {:?}", outcome.ticket);
            return false;
        }

        match outcome.result {
            Ok(records) => {
                self.prefs.set(&self.cache_key(), &records);
                self.apply_ready(records);
            }
            Err(e) => {
                tracing::warn!("[{}] Repository fetch for {} failed: {}", e.error_code(), self.owner, e);
                self.items.clear();
                self.filtered.clear();
                self.pager.reset();
                self.state = FeedState::Failed(e);
            }
        }
        true
    }

    /// Abandon an outstanding fetch; its result will be discarded on arrival.
    pub fn detach(&mut self) {
        if matches!(self.state, FeedState::Loading) {
            self.generation += 1;
            self.state = FeedState::Idle;
            tracing::debug!("Detached in-flight repository fetch for {}", self.owner);
        }
    }

    /// Load and wait for the result.
    pub async fn load(&mut self) -> &FeedState {
        if let Some(fetch) = self.begin_load() {
            let outcome = fetch.run().await;
            self.complete(outcome);
        }
        &self.state
    }

    fn apply_ready(&mut self, records: Vec<RepositoryRecord>) {
        self.items = records;
        self.state = FeedState::Ready;
        if self.selected_language != ALL_LANGUAGES
            && !self.items.iter().any(|r| matches_language(r, &self.selected_language))
        {
            self.selected_language = ALL_LANGUAGES.to_string();
        }
        self.refilter();
        self.pager.clamp(self.filtered.len());
    }

    fn refilter(&mut self) {
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, r)| matches_language(r, &self.selected_language))
            .map(|(i, _)| i)
            .collect();
    }

    /// Filter by exact language, or show everything for [`ALL_LANGUAGES`],
    /// and return to page 1.
    ///
    /// A language absent from the working set is ignored and returns `false`.
    pub fn set_language_filter(&mut self, language: &str) -> bool {
        if language != ALL_LANGUAGES && !self.items.iter().any(|r| matches_language(r, language)) {
            tracing::debug!("Ignoring filter for unknown language {:?}", language);
            return false;
        }
        self.selected_language = language.to_string();
        self.refilter();
        self.pager.reset();
        true
    }

    /// Advance to the next entry of [`available_languages`](Self::available_languages),
    /// wrapping around.
    pub fn cycle_language_filter(&mut self) {
        let languages = self.available_languages();
        let next = languages
            .iter()
            .position(|l| *l == self.selected_language)
            .map(|i| (i + 1) % languages.len())
            .unwrap_or(0);
        self.set_language_filter(&languages[next]);
    }

    pub fn next_page(&mut self) {
        self.pager.next(self.filtered.len());
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FeedState::Loading)
    }

    /// The full working set (empty unless `Ready`).
    pub fn items(&self) -> &[RepositoryRecord] {
        &self.items
    }

    pub fn available_languages(&self) -> Vec<String> {
        available_languages(&self.items)
    }

    pub fn selected_language(&self) -> &str {
        &self.selected_language
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// The repositories on the current page.
    pub fn page(&self) -> Vec<&RepositoryRecord> {
        self.filtered[self.pager.range(self.filtered.len())]
            .iter()
            .map(|&i| &self.items[i])
            .collect()
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered.len())
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }
}

impl fmt::Debug for RepositoryFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryFeed")
            .field("owner", &self.owner)
            .field("state", &self.state.label())
            .field("items", &self.items.len())
            .field("selected_language", &self.selected_language)
            .field("current_page", &self.pager.current_page())
            .finish_non_exhaustive()
    }
}
