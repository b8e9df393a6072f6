//! Color-scheme preference read from the environment.
//!
//! Terminals have no media query, so the probe checks an explicit override
//! first and then the `COLORFGBG` convention set by rxvt, Konsole, iTerm2 and
//! others (`"<fg>;<bg>"`, background color index last).

use crate::traits::ColorSchemeProbe;

/// Explicit override: `dark` or `light`.
pub const SCHEME_ENV: &str = "FOLIO_COLOR_SCHEME";

/// Terminal foreground/background hint.
pub const COLORFGBG_ENV: &str = "COLORFGBG";

/// Reads [`SCHEME_ENV`] and [`COLORFGBG_ENV`] at probe time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorSchemeProbe;

impl EnvColorSchemeProbe {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a preference from raw variable values.
    pub fn resolve(scheme: Option<&str>, colorfgbg: Option<&str>) -> Option<bool> {
        if let Some(scheme) = scheme {
            match scheme.trim().to_ascii_lowercase().as_str() {
                "dark" => return Some(true),
                "light" => return Some(false),
                _ => {}
            }
        }

        let background = colorfgbg?.rsplit(';').next()?.trim().parse::<u8>().ok()?;
        // ANSI indexes 0-6 and 8 are dark backgrounds; 7 and 9-15 are light
        match background {
            0..=6 | 8 => Some(true),
            7 | 9..=15 => Some(false),
            _ => None,
        }
    }
}

impl ColorSchemeProbe for EnvColorSchemeProbe {
    fn prefers_dark(&self) -> Option<bool> {
        let scheme = std::env::var(SCHEME_ENV).ok();
        let colorfgbg = std::env::var(COLORFGBG_ENV).ok();
        Self::resolve(scheme.as_deref(), colorfgbg.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        assert_eq!(EnvColorSchemeProbe::resolve(Some("dark"), Some("0;15")), Some(true));
        assert_eq!(EnvColorSchemeProbe::resolve(Some("LIGHT"), Some("15;0")), Some(false));
    }

    #[test]
    fn test_colorfgbg_background() {
        assert_eq!(EnvColorSchemeProbe::resolve(None, Some("15;0")), Some(true));
        assert_eq!(EnvColorSchemeProbe::resolve(None, Some("0;15")), Some(false));
        assert_eq!(EnvColorSchemeProbe::resolve(None, Some("15;default;0")), Some(true));
    }

    #[test]
    fn test_no_preference() {
        assert_eq!(EnvColorSchemeProbe::resolve(None, None), None);
        assert_eq!(EnvColorSchemeProbe::resolve(Some("auto"), None), None);
        assert_eq!(EnvColorSchemeProbe::resolve(None, Some("garbage")), None);
    }
}
