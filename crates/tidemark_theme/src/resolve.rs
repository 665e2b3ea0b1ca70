//! Token resolution.
//!
//! Resolution merges three layers, later layers winning per token:
//! palette base, then the mode layer, then the brand overlay. The
//! merged map is reordered into contract order behind a version stamp,
//! so the same `(theme, mode, brand)` triple always yields the same
//! map in the same iteration order.
//!
//! Unknown theme names fall back to the default palette instead of
//! failing: a stale cookie must never take a page down. A theme that
//! resolves without every required token is a configuration bug and
//! fails loudly.

use thiserror::Error;
use tracing::debug;

use crate::contract::{self, TokenMap, CONTRACT_TOKEN, CONTRACT_VALUE};
use crate::grammar::{self, Mode};
use crate::palettes::DEFAULT_THEME;
use crate::registry::ThemeRegistry;

/// Resolution failures. Fallbacks absorb bad identifiers, so the only
/// way to fail is a palette that does not cover the contract.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("theme `{theme}` ({mode}) is missing required tokens: {}", .missing.join(", "))]
    IncompleteTheme {
        theme: String,
        mode: Mode,
        missing: Vec<String>,
    },
}

/// A fully resolved token map with its provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTokenMap {
    theme: String,
    mode: Mode,
    brand: Option<String>,
    tokens: TokenMap,
}

impl ResolvedTokenMap {
    /// Theme that actually resolved (the fallback name if the request
    /// named an unknown theme).
    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Brand layer that was applied, if any.
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// `<theme>-<mode>` id of this map.
    pub fn theme_id(&self) -> String {
        grammar::theme_id(&self.theme, self.mode)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn tokens(&self) -> &TokenMap {
        &self.tokens
    }

    /// Declaration lines, one `  name: value;` per token, in map order.
    pub fn css_declarations(&self) -> String {
        let mut out = String::with_capacity(self.tokens.len() * 32);
        for (name, value) in &self.tokens {
            out.push_str("  ");
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out
    }

    /// One CSS rule asserting every token under `selector`.
    pub fn css_rule(&self, selector: &str) -> String {
        format!("{selector} {{\n{}}}\n", self.css_declarations())
    }
}

/// Resolve the token map for a `(theme, mode, brand)` triple.
pub fn compute_token_map(
    registry: &ThemeRegistry,
    mode: Mode,
    theme_name: &str,
    brand_id: Option<&str>,
) -> Result<ResolvedTokenMap, ResolveError> {
    let (palette, theme) = match registry.palette(theme_name) {
        Some(palette) => (palette, theme_name.to_string()),
        None => {
            debug!("unknown theme `{theme_name}`, falling back to `{DEFAULT_THEME}`");
            let palette = registry
                .palette(DEFAULT_THEME)
                .expect("default palette is compiled in");
            (palette, DEFAULT_THEME.to_string())
        }
    };

    let mut merged = palette.base.clone();
    for (name, value) in palette.layer(mode) {
        merged.insert(name.clone(), value.clone());
    }

    let brand = match brand_id {
        None => None,
        Some(id) => match registry.brand_overrides(id) {
            Some(overrides) => {
                for (name, value) in overrides {
                    merged.insert(name, value);
                }
                Some(id.to_string())
            }
            None => {
                debug!("unknown brand `{id}`, resolving without a brand layer");
                None
            }
        },
    };

    // Reorder into contract order behind the stamp; anything the
    // contract does not require trails in merge order.
    let mut tokens = TokenMap::with_capacity(merged.len() + 1);
    tokens.insert(CONTRACT_TOKEN.to_string(), CONTRACT_VALUE.to_string());

    let mut missing = Vec::new();
    for name in contract::required_tokens() {
        match merged.get(name) {
            Some(value) => {
                tokens.insert(name.to_string(), value.clone());
            }
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(ResolveError::IncompleteTheme {
            theme,
            mode,
            missing,
        });
    }

    for (name, value) in merged {
        if name != CONTRACT_TOKEN && !contract::is_required_token(&name) {
            tokens.insert(name, value);
        }
    }

    debug!(
        "resolved `{}-{mode}` ({} tokens{})",
        theme,
        tokens.len(),
        brand.as_deref().map(|b| format!(", brand `{b}`")).unwrap_or_default()
    );

    Ok(ResolvedTokenMap {
        theme,
        mode,
        brand,
        tokens,
    })
}
