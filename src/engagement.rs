//! Like and visitor counters.
//!
//! The visitor count is a simulated metric: it starts from a random seed on
//! the first run and goes up by one on every launch, whether or not the
//! visitor is new. It is not analytics and should not be presented as such.

use std::ops::Range;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::preferences::{keys, PreferenceKey, PreferenceStore};

/// Like count shown before anyone has liked the portfolio.
pub const INITIAL_LIKE_COUNT: u64 = 127;

/// Band the simulated visitor count is seeded into on the first run.
pub const VISITOR_SEED_RANGE: Range<u64> = 500..1500;

/// How long the "thanks for the like" acknowledgment stays visible.
pub const LIKE_ACK_DURATION: Duration = Duration::from_secs(3);

/// Counter values for the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementState {
    pub like_count: u64,
    pub has_liked: bool,
    pub visitor_count: u64,
}

impl Default for EngagementState {
    fn default() -> Self {
        Self {
            like_count: INITIAL_LIKE_COUNT,
            has_liked: false,
            visitor_count: 0,
        }
    }
}

/// Figures derived from the simulated visitor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitorStats {
    pub total: u64,
    pub today: u64,
    pub this_week: u64,
}

impl VisitorStats {
    pub fn from_total(total: u64) -> Self {
        Self {
            total,
            today: total / 10,
            this_week: total / 3,
        }
    }
}

/// Owns [`EngagementState`]; the only code that mutates it.
#[derive(Debug)]
pub struct EngagementTracker {
    prefs: PreferenceStore,
    state: EngagementState,
    ack_until: Option<Instant>,
}

impl EngagementTracker {
    pub fn new(prefs: PreferenceStore) -> Self {
        Self {
            prefs,
            state: EngagementState::default(),
            ack_until: None,
        }
    }

    /// Load counters and record this launch as a visit.
    ///
    /// Not idempotent: every call bumps the persisted visitor count.
    pub fn initialize(&mut self) -> EngagementState {
        self.initialize_with_rng(&mut rand::thread_rng())
    }

    /// [`initialize`](Self::initialize) with a caller-supplied seed source.
    pub fn initialize_with_rng<R: Rng>(&mut self, rng: &mut R) -> EngagementState {
        let like_count = self.load_or_populate(&keys::LIKE_COUNT, INITIAL_LIKE_COUNT);
        let has_liked = self.load_or_populate(&keys::HAS_LIKED, false);

        let visitor_count = match self.prefs.lookup::<u64>(&keys::VISITOR_COUNT) {
            Some(count) => count,
            None => {
                let seed = rng.gen_range(VISITOR_SEED_RANGE);
                tracing::debug!("First visit; seeding simulated visitor count at {}", seed);
                seed
            }
        };

        // This launch is shown the count as read; the next one sees it plus one
        self.prefs
            .set(&keys::VISITOR_COUNT, &visitor_count.saturating_add(1));

        self.state = EngagementState {
            like_count,
            has_liked,
            visitor_count,
        };
        self.ack_until = None;
        self.state
    }

    fn load_or_populate<T>(&self, key: &PreferenceKey, default: T) -> T
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        match self.prefs.lookup(key) {
            Some(value) => value,
            None => {
                self.prefs.set(key, &default);
                default
            }
        }
    }

    /// Like the portfolio. Only the first like counts; later calls return
    /// `false` and change nothing.
    pub fn like(&mut self) -> bool {
        self.like_at(Instant::now())
    }

    /// [`like`](Self::like) with an explicit clock reading.
    pub fn like_at(&mut self, now: Instant) -> bool {
        if self.state.has_liked {
            return false;
        }

        self.state.like_count = self.state.like_count.saturating_add(1);
        self.state.has_liked = true;
        self.prefs.set(&keys::LIKE_COUNT, &self.state.like_count);
        self.prefs.set(&keys::HAS_LIKED, &true);
        self.ack_until = Some(now + LIKE_ACK_DURATION);

        tracing::info!("Portfolio liked; count is now {}", self.state.like_count);
        true
    }

    /// Whether the like acknowledgment should still be shown at `now`.
    pub fn acknowledgment_active(&self, now: Instant) -> bool {
        self.ack_until.is_some_and(|until| now < until)
    }

    /// Drop the acknowledgment once it has expired.
    pub fn clear_expired_acknowledgment(&mut self, now: Instant) {
        if !self.acknowledgment_active(now) {
            self.ack_until = None;
        }
    }

    pub fn state(&self) -> EngagementState {
        self.state
    }

    pub fn like_count(&self) -> u64 {
        self.state.like_count
    }

    pub fn has_liked(&self) -> bool {
        self.state.has_liked
    }

    pub fn visitor_count(&self) -> u64 {
        self.state.visitor_count
    }

    pub fn stats(&self) -> VisitorStats {
        VisitorStats::from_total(self.state.visitor_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tracker(prefs: &PreferenceStore) -> EngagementTracker {
        EngagementTracker::new(prefs.clone())
    }

    #[test]
    fn test_fresh_visitor_defaults() {
        let prefs = PreferenceStore::in_memory();
        let mut engagement = tracker(&prefs);

        let state = engagement.initialize();

        assert_eq!(state.like_count, 127);
        assert!(!state.has_liked);
        assert!(VISITOR_SEED_RANGE.contains(&state.visitor_count));
        assert_eq!(prefs.lookup::<u64>(&keys::LIKE_COUNT), Some(127));
        assert_eq!(prefs.lookup::<bool>(&keys::HAS_LIKED), Some(false));
    }

    #[test]
    fn test_every_launch_increments_persisted_visitors() {
        let prefs = PreferenceStore::in_memory();
        let mut rng = StdRng::seed_from_u64(7);

        let first = tracker(&prefs).initialize_with_rng(&mut rng).visitor_count;
        assert_eq!(prefs.lookup::<u64>(&keys::VISITOR_COUNT), Some(first + 1));

        let second = tracker(&prefs).initialize_with_rng(&mut rng).visitor_count;
        let third = tracker(&prefs).initialize_with_rng(&mut rng).visitor_count;

        assert_eq!(second, first + 1);
        assert_eq!(third, first + 2);
    }

    #[test]
    fn test_existing_count_is_not_reseeded() {
        let prefs = PreferenceStore::in_memory();
        prefs.set(&keys::VISITOR_COUNT, &4321u64);

        let state = tracker(&prefs).initialize();

        assert_eq!(state.visitor_count, 4321);
        assert_eq!(prefs.lookup::<u64>(&keys::VISITOR_COUNT), Some(4322));
    }

    #[test]
    fn test_like_is_one_shot() {
        let prefs = PreferenceStore::in_memory();
        let mut engagement = tracker(&prefs);
        engagement.initialize();

        assert!(engagement.like());
        for _ in 0..5 {
            assert!(!engagement.like());
        }

        assert_eq!(engagement.like_count(), 128);
        assert!(engagement.has_liked());
        assert_eq!(prefs.lookup::<u64>(&keys::LIKE_COUNT), Some(128));
        assert_eq!(prefs.lookup::<bool>(&keys::HAS_LIKED), Some(true));
    }

    #[test]
    fn test_prior_like_survives_restart() {
        let prefs = PreferenceStore::in_memory();
        prefs.set(&keys::HAS_LIKED, &true);
        prefs.set(&keys::LIKE_COUNT, &300u64);

        let mut engagement = tracker(&prefs);
        engagement.initialize();

        assert!(!engagement.like());
        assert_eq!(engagement.like_count(), 300);
    }

    #[test]
    fn test_acknowledgment_expires() {
        let prefs = PreferenceStore::in_memory();
        let mut engagement = tracker(&prefs);
        engagement.initialize();
        let start = Instant::now();

        assert!(!engagement.acknowledgment_active(start));
        engagement.like_at(start);

        assert!(engagement.acknowledgment_active(start + Duration::from_secs(1)));
        assert!(!engagement.acknowledgment_active(start + LIKE_ACK_DURATION));

        engagement.clear_expired_acknowledgment(start + Duration::from_secs(4));
        assert!(!engagement.acknowledgment_active(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_stats_derivation() {
        let stats = VisitorStats::from_total(1234);
        assert_eq!(stats.today, 123);
        assert_eq!(stats.this_week, 411);
    }
}
