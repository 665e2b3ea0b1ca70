//! Palette and brand registry.
//!
//! Hosts register custom palettes and brand overlays here; the
//! resolver reads from it. Built-in palettes are compiled in and are
//! not registry entries, so they survive [`ThemeRegistry::clear`] and
//! cannot be shadowed. Lookups hand out owned snapshots; the registry
//! keeps exclusive ownership of its entries.

use std::sync::{OnceLock, RwLock};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::contract::TokenMap;
use crate::grammar;
use crate::palettes::{BuiltinPalette, Palette};

static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

/// A brand overlay: tokens merged over the mode layer at resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Brand {
    id: String,
    overrides: TokenMap,
}

impl Brand {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            overrides: TokenMap::new(),
        }
    }

    /// Add one token override. Later calls win on the same name.
    pub fn override_token(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn overrides(&self) -> &TokenMap {
        &self.overrides
    }
}

/// Registration failures. Lookups never fail; writes do.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("theme name `{0}` is invalid: want lowercase words separated by single hyphens")]
    InvalidTheme(String),
    #[error("brand id `{0}` is invalid: want lowercase words separated by single hyphens")]
    InvalidBrand(String),
    #[error("theme `{0}` is already registered")]
    DuplicateTheme(String),
    #[error("brand `{0}` is already registered")]
    DuplicateBrand(String),
}

/// Registry of resolvable palettes and brands.
pub struct ThemeRegistry {
    builtin: FxHashMap<String, Palette>,
    palettes: RwLock<FxHashMap<String, Palette>>,
    brands: RwLock<FxHashMap<String, Brand>>,
}

impl ThemeRegistry {
    /// Fresh registry holding only the built-in palettes.
    pub fn new() -> Self {
        let builtin = BuiltinPalette::all()
            .iter()
            .map(|b| (b.id().to_string(), b.palette()))
            .collect();
        Self {
            builtin,
            palettes: RwLock::new(FxHashMap::default()),
            brands: RwLock::new(FxHashMap::default()),
        }
    }

    /// Process-wide registry instance.
    pub fn global() -> &'static ThemeRegistry {
        REGISTRY.get_or_init(ThemeRegistry::new)
    }

    /// Register a custom palette under its own name.
    ///
    /// The name must satisfy the palette grammar and must not collide
    /// with a built-in or previously registered palette.
    pub fn register_palette(&self, palette: Palette) -> Result<(), RegistryError> {
        if !grammar::is_valid_palette_name(&palette.name) {
            return Err(RegistryError::InvalidTheme(palette.name));
        }
        if self.builtin.contains_key(&palette.name) {
            return Err(RegistryError::DuplicateTheme(palette.name));
        }
        let mut palettes = self.palettes.write().unwrap();
        if palettes.contains_key(&palette.name) {
            return Err(RegistryError::DuplicateTheme(palette.name));
        }
        debug!("registered palette `{}`", palette.name);
        palettes.insert(palette.name.clone(), palette);
        Ok(())
    }

    /// Register a brand overlay under its id.
    pub fn register_brand(&self, brand: Brand) -> Result<(), RegistryError> {
        if !grammar::is_valid_palette_name(&brand.id) {
            return Err(RegistryError::InvalidBrand(brand.id));
        }
        let mut brands = self.brands.write().unwrap();
        if brands.contains_key(&brand.id) {
            return Err(RegistryError::DuplicateBrand(brand.id));
        }
        debug!("registered brand `{}`", brand.id);
        brands.insert(brand.id.clone(), brand);
        Ok(())
    }

    /// Remove every registered palette and brand. Built-ins persist.
    /// This is the only unregistration mechanism.
    pub fn clear(&self) {
        self.palettes.write().unwrap().clear();
        self.brands.write().unwrap().clear();
    }

    /// Look up a palette by name, built-in or registered.
    pub fn palette(&self, name: &str) -> Option<Palette> {
        if let Some(palette) = self.palettes.read().unwrap().get(name) {
            return Some(palette.clone());
        }
        self.builtin.get(name).cloned()
    }

    /// Overrides carried by a registered brand.
    pub fn brand_overrides(&self, id: &str) -> Option<TokenMap> {
        self.brands
            .read()
            .unwrap()
            .get(id)
            .map(|brand| brand.overrides.clone())
    }

    pub fn contains_theme(&self, name: &str) -> bool {
        self.builtin.contains_key(name) || self.palettes.read().unwrap().contains_key(name)
    }

    pub fn contains_brand(&self, id: &str) -> bool {
        self.brands.read().unwrap().contains_key(id)
    }

    /// Every resolvable theme name, sorted.
    pub fn theme_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.builtin.keys().cloned().collect();
        names.extend(self.palettes.read().unwrap().keys().cloned());
        names.sort();
        names
    }

    /// Every registered brand id, sorted.
    pub fn brand_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.brands.read().unwrap().keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
