//! Platform color-scheme preference.

/// Reports whether the platform prefers a dark color scheme.
pub trait ColorSchemeProbe: Send + Sync {
    /// `Some(true)` for dark, `Some(false)` for light, `None` when the
    /// platform expresses no preference.
    fn prefers_dark(&self) -> Option<bool>;
}

/// A probe with a fixed answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}
