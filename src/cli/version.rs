//! `--version` and `--help` output.

/// Crate version, from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("folio {}", VERSION)
}

pub fn usage() -> String {
    format!(
        "{}\n\n\
         Usage: folio [OPTIONS]\n\n\
         Options:\n  \
         --owner <NAME>  GitHub user whose repositories fill the projects section\n  \
         -v, --verbose   Log at debug level to ~/.folio/folio.log\n  \
         --reset         Clear saved preferences (theme, likes, visitor count)\n  \
         -h, --help      Print this help\n  \
         -V, --version   Print version\n\n\
         Keys: \u{2190}/\u{2192} sections, d dark mode, l like, [ ] pages, f language, r reload, q quit",
        version_line()
    )
}
