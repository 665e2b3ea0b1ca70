//! Server-side boot assets.
//!
//! The first paint must carry the right tokens before any stylesheet
//! loads, or the page flashes the wrong theme. `boot_assets` turns
//! sanitized request preferences into an inline style block plus a
//! bootstrap script that mirrors the choice as `data-tm-*` attributes
//! on the document element.
//!
//! With a known mode the style asserts one resolved map on `:root`.
//! Without one the client decides: the light map is asserted
//! unconditionally and the dark map behind
//! `@media (prefers-color-scheme: dark)`, and the script leaves the
//! mode attribute unset.

use crate::grammar::Mode;
use crate::prefs::ThemePrefs;
use crate::registry::ThemeRegistry;
use crate::resolve::{compute_token_map, ResolveError};

/// Inline assets for the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootAssets {
    /// CSS asserting resolved tokens on `:root`.
    pub style: String,
    /// Script mirroring theme, mode, and brand as `data-tm-*`
    /// attributes.
    pub script: String,
}

impl BootAssets {
    /// The style wrapped in a `<style>` element, tagged so hosts can
    /// find and replace it on navigation.
    pub fn style_element(&self) -> String {
        format!("<style data-tm-boot>\n{}</style>", self.style)
    }

    /// The script wrapped in a `<script>` element.
    pub fn script_element(&self) -> String {
        format!("<script data-tm-boot>{}</script>", self.script)
    }
}

/// Build boot assets for one request.
///
/// Resolution failure is fatal here: serving a half-themed page is
/// worse than failing the request and surfacing the broken palette.
pub fn boot_assets(
    registry: &ThemeRegistry,
    prefs: &ThemePrefs,
) -> Result<BootAssets, ResolveError> {
    let brand = prefs.brand.as_deref();
    match prefs.mode {
        Some(mode) => {
            let resolved = compute_token_map(registry, mode, &prefs.theme, brand)?;
            Ok(BootAssets {
                style: resolved.css_rule(":root"),
                script: boot_script(resolved.theme(), Some(mode), resolved.brand()),
            })
        }
        None => {
            let light = compute_token_map(registry, Mode::Light, &prefs.theme, brand)?;
            let dark = compute_token_map(registry, Mode::Dark, &prefs.theme, brand)?;
            let style = format!(
                "{}@media (prefers-color-scheme: dark) {{\n{}}}\n",
                light.css_rule(":root"),
                indent(&dark.css_rule(":root")),
            );
            Ok(BootAssets {
                style,
                script: boot_script(light.theme(), None, light.brand()),
            })
        }
    }
}

// Attribute values come from resolution, so they already passed the
// identifier grammar; interpolating them into markup is safe.
fn boot_script(theme: &str, mode: Option<Mode>, brand: Option<&str>) -> String {
    let mut attrs = format!("e.setAttribute(\"data-tm-theme\",\"{theme}\");");
    if let Some(mode) = mode {
        attrs.push_str(&format!("e.setAttribute(\"data-tm-mode\",\"{mode}\");"));
    }
    if let Some(brand) = brand {
        attrs.push_str(&format!("e.setAttribute(\"data-tm-brand\",\"{brand}\");"));
    }
    format!("(function(){{var e=document.documentElement;{attrs}}})();")
}

fn indent(block: &str) -> String {
    block.lines().map(|line| format!("  {line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::TokenMap;
    use crate::palettes::Palette;
    use crate::registry::Brand;
    use pretty_assertions::assert_eq;

    fn prefs(mode: Option<Mode>, theme: &str, brand: Option<&str>) -> ThemePrefs {
        ThemePrefs {
            mode,
            theme: theme.to_string(),
            brand: brand.map(str::to_string),
        }
    }

    #[test]
    fn known_mode_asserts_one_block() {
        let registry = ThemeRegistry::new();
        let assets = boot_assets(&registry, &prefs(Some(Mode::Dark), "ocean", None))
            .expect("builtin resolves");

        assert!(assets.style.starts_with(":root {\n  --tm-contract: \"4\";\n"));
        assert!(!assets.style.contains("@media"));
        assert!(assets.script.contains("\"data-tm-theme\",\"ocean\""));
        assert!(assets.script.contains("\"data-tm-mode\",\"dark\""));
        assert!(!assets.script.contains("data-tm-brand"));
    }

    #[test]
    fn unknown_mode_defers_to_the_client() {
        let registry = ThemeRegistry::new();
        let assets =
            boot_assets(&registry, &prefs(None, "tidemark", None)).expect("builtin resolves");

        let media_pos = assets
            .style
            .find("@media (prefers-color-scheme: dark)")
            .expect("dark block is conditional");
        let light_block = &assets.style[..media_pos];
        let dark_block = &assets.style[media_pos..];

        assert!(light_block.contains("--tm-background: 0 0% 100%;"));
        assert!(dark_block.contains("--tm-background: 222 47% 7%;"));
        assert!(assets.script.contains("\"data-tm-theme\",\"tidemark\""));
        assert!(!assets.script.contains("data-tm-mode"));
    }

    #[test]
    fn brand_flows_into_style_and_script() {
        let registry = ThemeRegistry::new();
        registry
            .register_brand(Brand::new("acme").override_token("--tm-primary", "262 83% 58%"))
            .expect("fresh id registers");

        let assets = boot_assets(&registry, &prefs(Some(Mode::Light), "tidemark", Some("acme")))
            .expect("resolves");
        assert!(assets.style.contains("--tm-primary: 262 83% 58%;"));
        assert!(assets.script.contains("\"data-tm-brand\",\"acme\""));
    }

    #[test]
    fn attributes_mirror_what_actually_resolved() {
        let registry = ThemeRegistry::new();
        // Hand-built prefs can carry names the registry never saw.
        let assets = boot_assets(&registry, &prefs(Some(Mode::Light), "no-such", Some("ghost")))
            .expect("falls back");
        assert!(assets.script.contains("\"data-tm-theme\",\"tidemark\""));
        assert!(!assets.script.contains("data-tm-brand"));
    }

    #[test]
    fn broken_palettes_fail_the_request() {
        let registry = ThemeRegistry::new();
        registry
            .register_palette(Palette {
                name: "bare".into(),
                base: TokenMap::new(),
                light: TokenMap::new(),
                dark: TokenMap::new(),
            })
            .expect("fresh name registers");

        let err = boot_assets(&registry, &prefs(Some(Mode::Light), "bare", None))
            .expect_err("bare palette cannot boot");
        assert!(matches!(err, ResolveError::IncompleteTheme { .. }));
    }

    #[test]
    fn elements_wrap_the_raw_assets() {
        let registry = ThemeRegistry::new();
        let assets = boot_assets(&registry, &ThemePrefs::default()).expect("default resolves");

        let style = assets.style_element();
        assert!(style.starts_with("<style data-tm-boot>\n:root {"));
        assert!(style.ends_with("</style>"));

        let script = assets.script_element();
        assert!(script.starts_with("<script data-tm-boot>(function()"));
        assert!(script.ends_with("</script>"));
    }
}
