//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - outbound HTTP used by the repository feed
//! - [`KeyValueStore`] - string key-value storage behind the preference layer
//! - [`ColorSchemeProbe`] - the platform's light/dark preference

pub mod color_scheme;
pub mod http;
pub mod storage;

pub use color_scheme::{ColorSchemeProbe, FixedColorScheme};
pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::KeyValueStore;
