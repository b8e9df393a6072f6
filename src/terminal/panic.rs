//! Panic hook that puts the terminal back before the report is printed.

use super::setup::emergency_restore;
use std::panic;

/// Chain terminal restoration in front of the current panic hook.
///
/// Install after `color_eyre::install()` so the eyre panic report is the
/// hook being wrapped.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
