//! Catalog-wide resolution guarantees.

use tidemark_theme::{
    compute_token_map, contract, validate_theme, BuiltinPalette, Mode, ThemeArtifact,
    ThemeRegistry, CONTRACT_TOKEN,
};

#[test]
fn every_builtin_resolves_and_validates_cleanly() {
    let registry = ThemeRegistry::new();
    for builtin in BuiltinPalette::all() {
        for mode in Mode::all() {
            let resolved = compute_token_map(&registry, *mode, builtin.id(), None)
                .unwrap_or_else(|e| panic!("{} {mode} should resolve: {e}", builtin.id()));

            let report = validate_theme(resolved.tokens());
            assert!(
                report.is_valid(),
                "{} {mode} should validate cleanly: {report:?}",
                builtin.id()
            );
            assert_eq!(
                resolved.iter().next().map(|(name, _)| name),
                Some(CONTRACT_TOKEN),
                "{} {mode} should lead with the stamp",
                builtin.id()
            );
        }
    }
}

#[test]
fn validity_is_exactly_contract_coverage() {
    // A map is clean iff its keys are the required set, with the stamp
    // optional.
    let registry = ThemeRegistry::new();
    let resolved = compute_token_map(&registry, Mode::Light, "ember", None).unwrap();
    let mut tokens = resolved.tokens().clone();
    assert!(validate_theme(&tokens).is_valid());

    tokens.shift_remove(CONTRACT_TOKEN);
    assert!(validate_theme(&tokens).is_valid());
    assert_eq!(tokens.len(), contract::required_tokens().count());

    tokens.insert("--tm-stranger".into(), "1".into());
    assert!(!validate_theme(&tokens).is_valid());
    tokens.shift_remove("--tm-stranger");

    tokens.shift_remove("--tm-border");
    assert!(!validate_theme(&tokens).is_valid());
}

#[test]
fn fresh_registries_resolve_identically() {
    for builtin in BuiltinPalette::all() {
        for mode in Mode::all() {
            let a = compute_token_map(&ThemeRegistry::new(), *mode, builtin.id(), None).unwrap();
            let b = compute_token_map(&ThemeRegistry::new(), *mode, builtin.id(), None).unwrap();
            let pairs_a: Vec<_> = a.iter().collect();
            let pairs_b: Vec<_> = b.iter().collect();
            assert_eq!(pairs_a, pairs_b, "{} {mode} should be reproducible", builtin.id());
        }
    }
}

#[test]
fn rendered_css_parses_back_to_the_same_map() {
    let registry = ThemeRegistry::new();
    for builtin in BuiltinPalette::all() {
        for mode in Mode::all() {
            let resolved = compute_token_map(&registry, *mode, builtin.id(), None).unwrap();
            let selector = format!(":root[data-theme=\"{}\"]", resolved.theme_id());
            let css = resolved.css_rule(&selector);

            let artifact = ThemeArtifact::parse(&css)
                .unwrap_or_else(|e| panic!("{} {mode} emit should parse: {e}", builtin.id()));
            assert_eq!(artifact.declared_id.as_deref(), Some(resolved.theme_id().as_str()));
            assert_eq!(
                &artifact.tokens,
                resolved.tokens(),
                "{} {mode} should round-trip through css",
                builtin.id()
            );
        }
    }
}
