//! folio - a terminal portfolio with persisted preferences and a
//! GitHub-backed projects feed.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod engagement;
pub mod error;
pub mod feed;
pub mod logging;
pub mod portfolio;
pub mod preferences;
pub mod router;
pub mod terminal;
pub mod theme;
pub mod traits;
pub mod ui;
