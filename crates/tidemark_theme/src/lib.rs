//! Tidemark Theme Engine
//!
//! Token resolution and contract validation for the Tidemark design
//! system. Every themable value is a CSS custom property in the
//! reserved `--tm-` namespace; this crate owns the canonical set of
//! those tokens and everything that produces or audits them.
//!
//! # Overview
//!
//! - **Grammar**: palette names and `<palette>-<mode>` theme ids
//! - **Contract**: the closed token set, with pairing and deprecation
//!   rules
//! - **Registry**: built-in palettes plus host-registered palettes and
//!   brand overlays
//! - **Resolution**: base, mode, and brand layers merged into one
//!   deterministic token map
//! - **Validation & parity**: structured audits of theme artifacts for
//!   CI
//! - **SSR boot assets**: inline style and script for a correct first
//!   paint
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tidemark_theme::{compute_token_map, Mode, ThemeRegistry};
//!
//! let registry = ThemeRegistry::global();
//! let resolved = compute_token_map(registry, Mode::Dark, "ocean", None)?;
//! let css = resolved.css_rule(":root");
//! ```
//!
//! # Resolution model
//!
//! A palette ships a mode-independent base layer and one layer per
//! mode; a brand overlay may sit on top. Later layers win per token.
//! The resolved map always leads with the contract version stamp and
//! carries every required token, or resolution fails: an incomplete
//! theme is a configuration bug, not a runtime condition to paper
//! over. Unknown theme or brand names, by contrast, are runtime
//! conditions (stale cookies) and degrade to the default palette or to
//! no brand layer.

pub mod artifact;
pub mod contract;
pub mod grammar;
pub mod palettes;
pub mod parity;
pub mod prefs;
pub mod registry;
pub mod resolve;
pub mod ssr;
pub mod validate;

// Re-export commonly used types
pub use artifact::{read_theme_css, ArtifactError, ThemeArtifact};
pub use contract::{TokenMap, CONTRACT_TOKEN, CONTRACT_VERSION, TOKEN_PREFIX};
pub use grammar::{is_valid_palette_name, is_valid_theme_id, parse_theme_id, Mode, ParsedThemeId};
pub use palettes::{BuiltinPalette, Palette, DEFAULT_THEME};
pub use parity::{check_parity, ParityEntry, ParityReport};
pub use prefs::{ThemePrefs, COOKIE_BRAND, COOKIE_MODE, COOKIE_THEME};
pub use registry::{Brand, RegistryError, ThemeRegistry};
pub use resolve::{compute_token_map, ResolveError, ResolvedTokenMap};
pub use ssr::{boot_assets, BootAssets};
pub use validate::{validate_theme, DeprecatedUse, ForegroundViolation, ValidationReport};
