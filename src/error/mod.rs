//! Error types for folio.
//!
//! Every component in the core recovers from its own failures, so these types
//! mostly travel into log lines and the `Failed` state of the repository
//! feed. The layout follows a simple rule: one `thiserror` enum per concern,
//! unified by [`FolioError`] and classified by [`ErrorCategory`].
//!
//! | Error | Raised by | Recovery |
//! |-------|-----------|----------|
//! | [`StorageError`] | preference / session stores | default value, no-op write |
//! | [`FeedError`] | repository fetch | `Failed` with empty list |
//! | [`RouteError`] | section router | request ignored |
//! | [`ConfigError`] | config loader | reported by the binary |

mod category;
mod config;
mod feed;
mod folio_error;
mod route;
mod storage;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use feed::FeedError;
pub use folio_error::FolioError;
pub use route::RouteError;
pub use storage::StorageError;
