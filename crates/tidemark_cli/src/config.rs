//! Tidemark configuration file handling

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tidemark_theme::{Brand, ThemeRegistry, TokenMap};

/// File name looked up in the working directory when `--config` is not
/// given.
pub const CONFIG_FILE: &str = "tidemark.toml";

/// Top-level Tidemark configuration (tidemark.toml)
#[derive(Debug, Default, Deserialize)]
pub struct TidemarkConfig {
    #[serde(default)]
    pub themes: ThemesConfig,
    #[serde(default, rename = "brand")]
    pub brands: Vec<BrandConfig>,
}

/// Where the shipped theme artifacts live
#[derive(Debug, Deserialize)]
pub struct ThemesConfig {
    #[serde(default = "default_themes_dir")]
    pub dir: String,
}

fn default_themes_dir() -> String {
    "themes".to_string()
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            dir: default_themes_dir(),
        }
    }
}

/// One `[[brand]]` block: a brand id plus its token overrides
#[derive(Debug, Deserialize)]
pub struct BrandConfig {
    pub id: String,
    #[serde(default)]
    pub overrides: TokenMap,
}

impl TidemarkConfig {
    /// Load configuration from an explicit path, or from tidemark.toml
    /// in the working directory. A missing implicit file means
    /// defaults; a missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let implicit = Path::new(CONFIG_FILE);
                if implicit.exists() {
                    Self::read(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Register every configured brand. A duplicate id in the file
    /// surfaces the registry's duplicate error.
    pub fn apply(&self, registry: &ThemeRegistry) -> Result<()> {
        for block in &self.brands {
            let mut brand = Brand::new(&block.id);
            for (name, value) in &block.overrides {
                brand = brand.override_token(name, value);
            }
            registry
                .register_brand(brand)
                .with_context(|| format!("invalid [[brand]] entry `{}`", block.id))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_themes_dir() {
        let config = TidemarkConfig::default();
        assert_eq!(config.themes.dir, "themes");
        assert!(config.brands.is_empty());
    }

    #[test]
    fn load_reads_an_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tidemark.toml");
        fs::write(&path, "[themes]\ndir = \"artifacts\"\n").expect("write config");

        let config = TidemarkConfig::load(Some(&path)).expect("load config");
        assert_eq!(config.themes.dir, "artifacts");
        assert!(config.brands.is_empty());
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let err = TidemarkConfig::load(Some(Path::new("/no/such/tidemark.toml")))
            .expect_err("missing explicit config should fail");
        assert!(format!("{err:#}").contains("failed to read"));
    }

    #[test]
    fn config_registers_brands_with_their_overrides() {
        let src = r#"
[themes]
dir = "artifacts"

[[brand]]
id = "acme"

[brand.overrides]
"--tm-primary" = "262 84% 58%"
"--tm-ring" = "262 84% 58%"
"#;
        let config: TidemarkConfig = toml::from_str(src).expect("parse config");
        assert_eq!(config.brands.len(), 1);

        let registry = ThemeRegistry::new();
        config.apply(&registry).expect("apply config");
        assert_eq!(registry.brand_ids(), ["acme"]);
        let overrides = registry.brand_overrides("acme").expect("registered brand");
        assert_eq!(
            overrides.get("--tm-primary").map(String::as_str),
            Some("262 84% 58%")
        );
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn duplicate_brand_ids_in_config_fail_loudly() {
        let src = r#"
[[brand]]
id = "acme"

[[brand]]
id = "acme"
"#;
        let config: TidemarkConfig = toml::from_str(src).expect("parse config");
        let registry = ThemeRegistry::new();
        let err = config.apply(&registry).expect_err("duplicate id should fail");
        assert!(format!("{err:#}").contains("already registered"));
    }

    #[test]
    fn invalid_brand_ids_in_config_fail_loudly() {
        let src = r#"
[[brand]]
id = "Acme Corp"
"#;
        let config: TidemarkConfig = toml::from_str(src).expect("parse config");
        let registry = ThemeRegistry::new();
        let err = config.apply(&registry).expect_err("invalid id should fail");
        assert!(format!("{err:#}").contains("is invalid"));
    }
}
