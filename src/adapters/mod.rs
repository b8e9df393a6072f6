//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileStore`] - persistent key-value store backed by a JSON file
//! - [`MemoryStore`] - session-scoped key-value store
//! - [`EnvColorSchemeProbe`] - color-scheme preference from the environment
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::UnavailableStore`] - A store whose every operation fails

pub mod env_color_scheme;
pub mod file_store;
pub mod memory_store;
pub mod mock;
pub mod reqwest_http;

pub use env_color_scheme::EnvColorSchemeProbe;
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use mock::{MockHttpClient, UnavailableStore};
pub use reqwest_http::ReqwestHttpClient;
