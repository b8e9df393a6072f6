//! AppMessage enum for results delivered from background tasks.

use crate::feed::FeedOutcome;

/// Messages received from spawned tasks.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A repository fetch finished, successfully or not
    FeedLoaded(FeedOutcome),
}
