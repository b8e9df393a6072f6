//! Command-line interface.
//!
//! Flags that finish without starting the TUI are handled here:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//! use folio::config::FolioConfig;
//!
//! let command = parse_args(std::env::args());
//! let config = FolioConfig::load()?;
//! if let Some(result) = run_cli_command(&command, &config) {
//!     // printed version/help or reset preferences; exit
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, TuiOptions};
pub use version::{usage, version_line, VERSION};

use color_eyre::eyre::{eyre, Result};

use crate::adapters::FileStore;
use crate::config::FolioConfig;
use crate::traits::KeyValueStore;

/// Run a command that does not need the TUI.
///
/// Returns `None` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: &CliCommand, config: &FolioConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", usage());
            Some(Ok(()))
        }
        CliCommand::Reset => Some(handle_reset(config)),
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, usage()))),
        CliCommand::RunTui(_) => None,
    }
}

/// Remove every persisted preference.
pub fn handle_reset(config: &FolioConfig) -> Result<()> {
    let store = match &config.storage_path {
        Some(path) => FileStore::new(path),
        None => FileStore::default_location().ok_or_else(|| eyre!("cannot locate home directory"))?,
    };
    store.clear()?;
    println!("Cleared preferences in {}", store.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        let command = CliCommand::RunTui(TuiOptions::default());
        assert!(run_cli_command(&command, &FolioConfig::default()).is_none());
    }

    #[test]
    fn test_invalid_is_an_error() {
        let command = CliCommand::Invalid("bad".to_string());
        let result = run_cli_command(&command, &FolioConfig::default());
        assert!(matches!(result, Some(Err(_))));
    }

    #[test]
    fn test_reset_clears_configured_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let store = FileStore::new(&path);
        store.set_raw("likeCount", "200").unwrap();

        let config = FolioConfig::default().with_storage_path(&path);
        handle_reset(&config).unwrap();

        assert_eq!(store.get_raw("likeCount").unwrap(), None);
    }
}
