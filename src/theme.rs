//! Light and dark palettes and the controller that switches between them.
//!
//! A [`Theme`] is a complete token set derived from a single flag. The
//! [`ThemeController`] owns that flag, persists it, and publishes whole
//! themes over a `watch` channel so a consumer never sees a mix of light and
//! dark tokens.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use crate::preferences::{keys, PreferenceStore};
use crate::traits::ColorSchemeProbe;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Semantic color slots the view layer styles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Primary,
    Secondary,
    Accent,
    TextPrimary,
    TextSecondary,
    BackgroundPrimary,
    BackgroundSecondary,
    Border,
}

impl Token {
    pub const ALL: [Token; 8] = [
        Token::Primary,
        Token::Secondary,
        Token::Accent,
        Token::TextPrimary,
        Token::TextSecondary,
        Token::BackgroundPrimary,
        Token::BackgroundSecondary,
        Token::Border,
    ];

    /// The style-variable name the token is published under.
    pub fn variable(self) -> &'static str {
        match self {
            Token::Primary => "--primary-color",
            Token::Secondary => "--secondary-color",
            Token::Accent => "--accent-color",
            Token::TextPrimary => "--text-primary",
            Token::TextSecondary => "--text-secondary",
            Token::BackgroundPrimary => "--bg-primary",
            Token::BackgroundSecondary => "--bg-secondary",
            Token::Border => "--border-color",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

const LIGHT_TOKENS: [Rgb; 8] = [
    Rgb::from_hex(0x2563eb),
    Rgb::from_hex(0x1e40af),
    Rgb::from_hex(0x3b82f6),
    Rgb::from_hex(0x1f2937),
    Rgb::from_hex(0x6b7280),
    Rgb::from_hex(0xffffff),
    Rgb::from_hex(0xf8fafc),
    Rgb::from_hex(0xe5e7eb),
];

const DARK_TOKENS: [Rgb; 8] = [
    Rgb::from_hex(0x667eea),
    Rgb::from_hex(0x764ba2),
    Rgb::from_hex(0x3b82f6),
    Rgb::from_hex(0xf8fafc),
    Rgb::from_hex(0xcbd5e1),
    Rgb::from_hex(0x0f172a),
    Rgb::from_hex(0x1e293b),
    Rgb::from_hex(0x334155),
];

/// A complete token set for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    is_dark: bool,
    tokens: [Rgb; 8],
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        is_dark: false,
        tokens: LIGHT_TOKENS,
    };

    pub const DARK: Theme = Theme {
        is_dark: true,
        tokens: DARK_TOKENS,
    };

    /// The theme for a mode. Pure: equal flags give equal themes.
    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn color(&self, token: Token) -> Rgb {
        self.tokens[token.index()]
    }

    /// Every token with its color, in [`Token::ALL`] order.
    pub fn tokens(&self) -> impl Iterator<Item = (Token, Rgb)> + '_ {
        Token::ALL.into_iter().map(move |t| (t, self.color(t)))
    }

    /// The mapping as named style variables, e.g. `("--bg-primary", "#0f172a")`.
    pub fn variables(&self) -> Vec<(&'static str, String)> {
        self.tokens()
            .map(|(token, rgb)| (token.variable(), rgb.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::LIGHT
    }
}

/// Owns the dark-mode flag and publishes the matching [`Theme`].
pub struct ThemeController {
    prefs: PreferenceStore,
    probe: Arc<dyn ColorSchemeProbe>,
    publisher: watch::Sender<Theme>,
}

impl ThemeController {
    pub fn new(prefs: PreferenceStore, probe: Arc<dyn ColorSchemeProbe>) -> Self {
        let (publisher, _) = watch::channel(Theme::default());
        Self {
            prefs,
            probe,
            publisher,
        }
    }

    /// Load the persisted flag. On first run, adopt the platform preference
    /// and persist it so later runs never consult the platform again.
    pub fn initialize(&mut self) -> Theme {
        let is_dark = match self.prefs.lookup::<bool>(&keys::DARK_MODE) {
            Some(saved) => saved,
            None => {
                let platform = self.probe.prefers_dark();
                let is_dark = platform.unwrap_or(false);
                tracing::debug!(
                    "No saved dark-mode preference; platform reports {:?}, using {}",
                    platform,
                    is_dark
                );
                self.prefs.set(&keys::DARK_MODE, &is_dark);
                is_dark
            }
        };

        self.publish(is_dark)
    }

    /// Switch modes, persist the flag, and republish the full token set.
    pub fn set_dark_mode(&mut self, is_dark: bool) -> Theme {
        self.prefs.set(&keys::DARK_MODE, &is_dark);
        self.publish(is_dark)
    }

    pub fn toggle(&mut self) -> Theme {
        self.set_dark_mode(!self.is_dark())
    }

    fn publish(&self, is_dark: bool) -> Theme {
        let theme = Theme::for_mode(is_dark);
        self.publisher.send_replace(theme);
        theme
    }

    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    /// The currently published theme.
    pub fn current(&self) -> Theme {
        *self.publisher.borrow()
    }

    /// Receive every theme published from now on.
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.publisher.subscribe()
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("is_dark", &self.is_dark())
            .finish_non_exhaustive()
    }
}
