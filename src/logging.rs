//! Log file setup.
//!
//! The TUI owns stdout, so log lines go to `~/.folio/folio.log`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::adapters::file_store::STATE_DIR;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

pub const LOG_FILE: &str = "folio.log";

/// The directive used when [`LOG_ENV`] is unset or invalid.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "folio=debug"
    } else {
        "folio=info"
    }
}

pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STATE_DIR).join(LOG_FILE))
}

fn open_log(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber, appending to `path`.
///
/// Returns `false` if the file cannot be opened or a subscriber is already
/// installed; the app runs without logs in that case.
pub fn init(path: &Path, verbose: bool) -> bool {
    let file = match open_log(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
