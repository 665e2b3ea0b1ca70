//! Built-in palette catalog.
//!
//! A palette is three token layers: a mode-independent base (radius,
//! font stacks) and one overlay per mode. The resolver merges them;
//! nothing here knows about merging. Color values are space-separated
//! HSL triplets so hosts can wrap them in `hsl()` / `hsl(… / alpha)`.

mod ember;
mod ocean;
mod tidemark;

use std::fmt::{Display, Formatter};

use crate::contract::TokenMap;
use crate::grammar::Mode;

/// Theme name used whenever a request names no theme or an unknown one.
pub const DEFAULT_THEME: &str = "tidemark";

/// A named set of token layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Palette name, also the first half of the palette's theme ids.
    pub name: String,
    /// Mode-independent tokens.
    pub base: TokenMap,
    /// Tokens for light mode, merged over `base`.
    pub light: TokenMap,
    /// Tokens for dark mode, merged over `base`.
    pub dark: TokenMap,
}

impl Palette {
    /// The mode-specific layer.
    pub fn layer(&self, mode: Mode) -> &TokenMap {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Builds a layer from a literal token table.
pub(crate) fn token_set(pairs: &[(&str, &str)]) -> TokenMap {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Palettes compiled into the engine, always resolvable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinPalette {
    /// Default marine-blue palette.
    Tidemark,
    /// Teal and cyan palette.
    Ocean,
    /// Warm orange palette.
    Ember,
}

impl BuiltinPalette {
    /// Stable palette id for cookies, config, and theme ids.
    pub fn id(self) -> &'static str {
        match self {
            Self::Tidemark => "tidemark",
            Self::Ocean => "ocean",
            Self::Ember => "ember",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Tidemark => "Tidemark",
            Self::Ocean => "Ocean",
            Self::Ember => "Ember",
        }
    }

    /// Full catalog, default first.
    pub fn all() -> &'static [BuiltinPalette] {
        const PALETTES: [BuiltinPalette; 3] = [
            BuiltinPalette::Tidemark,
            BuiltinPalette::Ocean,
            BuiltinPalette::Ember,
        ];
        &PALETTES
    }

    /// Build the palette's token layers.
    pub fn palette(self) -> Palette {
        match self {
            Self::Tidemark => tidemark::palette(),
            Self::Ocean => ocean::palette(),
            Self::Ember => ember::palette(),
        }
    }
}

impl Display for BuiltinPalette {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
