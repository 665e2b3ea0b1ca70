//! Request-scoped theme preferences.
//!
//! Preferences arrive as untrusted cookie values. This module is the
//! only place raw request strings are interpreted: the legacy
//! `day`/`night` mode names are translated here, unknown themes fall
//! back to the default palette, unknown brands are dropped. Everything
//! behind this boundary speaks [`Mode`] and registry-known names, and
//! nothing here ever fails: a bad cookie yields defaults, not errors.

use tracing::debug;

use crate::grammar::Mode;
use crate::palettes::DEFAULT_THEME;
use crate::registry::ThemeRegistry;

/// Cookie carrying the mode preference.
pub const COOKIE_MODE: &str = "tm-mode";
/// Cookie carrying the theme name.
pub const COOKIE_THEME: &str = "tm-theme";
/// Cookie carrying the brand id.
pub const COOKIE_BRAND: &str = "tm-brand";

/// Sanitized theme preferences for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemePrefs {
    /// Explicit mode choice. `None` means follow the client's
    /// `prefers-color-scheme`.
    pub mode: Option<Mode>,
    /// Resolvable theme name, never empty.
    pub theme: String,
    /// Registered brand id, if the request named one we know.
    pub brand: Option<String>,
}

impl Default for ThemePrefs {
    fn default() -> Self {
        Self {
            mode: None,
            theme: DEFAULT_THEME.to_string(),
            brand: None,
        }
    }
}

impl ThemePrefs {
    /// Build preferences from raw cookie values.
    pub fn from_raw(
        registry: &ThemeRegistry,
        raw_mode: Option<&str>,
        raw_theme: Option<&str>,
        raw_brand: Option<&str>,
    ) -> Self {
        let mode = raw_mode.and_then(parse_request_mode);

        let theme = match raw_theme {
            Some(name) if registry.contains_theme(name) => name.to_string(),
            Some(name) => {
                debug!("unknown theme `{name}` in request, using `{DEFAULT_THEME}`");
                DEFAULT_THEME.to_string()
            }
            None => DEFAULT_THEME.to_string(),
        };

        let brand = match raw_brand {
            Some(id) if registry.contains_brand(id) => Some(id.to_string()),
            Some(id) => {
                debug!("unknown brand `{id}` in request, dropping it");
                None
            }
            None => None,
        };

        Self { mode, theme, brand }
    }
}

/// Interpret a raw mode string. Accepts the canonical names and the
/// legacy `day`/`night` spellings still present in old cookies.
fn parse_request_mode(raw: &str) -> Option<Mode> {
    match raw {
        "day" => {
            debug!("translating legacy mode `day` to `light`");
            Some(Mode::Light)
        }
        "night" => {
            debug!("translating legacy mode `night` to `dark`");
            Some(Mode::Dark)
        }
        other => match other.parse() {
            Ok(mode) => Some(mode),
            Err(_) => {
                debug!("ignoring unknown mode `{other}` in request");
                None
            }
        },
    }
}
