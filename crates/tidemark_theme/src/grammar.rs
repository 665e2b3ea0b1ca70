//! Identifier grammar for palette names and theme ids.
//!
//! A palette name is lowercase words joined by single hyphens
//! (`ocean`, `deep-sea-2`). A theme id appends the mode axis:
//! `<palette>-<mode>` where mode is exactly `light` or `dark`.
//! The grammar is the one place identifier well-formedness is defined;
//! everything downstream trusts ids that passed it.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Palette names: start with a letter, lowercase alphanumeric words,
/// single hyphens as separators.
pub const PALETTE_PATTERN: &str = r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$";

/// Theme ids: a palette name followed by `-light` or `-dark`.
pub const THEME_ID_PATTERN: &str =
    r"^(?P<palette>[a-z][a-z0-9]*(?:-[a-z0-9]+)*)-(?P<mode>light|dark)$";

fn palette_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PALETTE_PATTERN).expect("palette pattern is valid"))
}

fn theme_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(THEME_ID_PATTERN).expect("theme id pattern is valid"))
}

/// The light/dark axis of a theme.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    /// Canonical lowercase name, as it appears inside theme ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Both modes, light first.
    pub fn all() -> &'static [Mode] {
        const MODES: [Mode; 2] = [Mode::Light, Mode::Dark];
        &MODES
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for mode values outside the exact `light`/`dark` set.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("mode must be `light` or `dark`")]
pub struct ParseModeError;

impl FromStr for Mode {
    type Err = ParseModeError;

    /// Case-sensitive: `LIGHT` and `Dark` are rejected. Legacy
    /// `day`/`night` spellings are translated at the request boundary,
    /// not here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseModeError),
        }
    }
}

/// A theme id decomposed into its palette and mode parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedThemeId<'a> {
    pub palette: &'a str,
    pub mode: Mode,
}

/// Whether `s` is a well-formed palette name.
pub fn is_valid_palette_name(s: &str) -> bool {
    palette_re().is_match(s)
}

/// Whether `s` is a well-formed `<palette>-<mode>` theme id.
pub fn is_valid_theme_id(s: &str) -> bool {
    theme_id_re().is_match(s)
}

/// Split a theme id into `(palette, mode)`, or `None` if it does not
/// match the grammar. Splitting is lossless: rejoining the parts with a
/// hyphen reproduces the input.
pub fn parse_theme_id(id: &str) -> Option<ParsedThemeId<'_>> {
    let caps = theme_id_re().captures(id)?;
    let palette = caps.name("palette")?.as_str();
    let mode = match caps.name("mode")?.as_str() {
        "light" => Mode::Light,
        _ => Mode::Dark,
    };
    Some(ParsedThemeId { palette, mode })
}

/// Compose a theme id from its parts.
pub fn theme_id(palette: &str, mode: Mode) -> String {
    format!("{palette}-{}", mode.as_str())
}
