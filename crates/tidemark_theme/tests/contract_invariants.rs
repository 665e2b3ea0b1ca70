//! Laws that tie the contract, grammar, and catalog together.

use tidemark_theme::{
    contract, is_valid_palette_name, is_valid_theme_id, parse_theme_id, BuiltinPalette, Mode,
    CONTRACT_TOKEN, TOKEN_PREFIX,
};

#[test]
fn contract_names_satisfy_the_token_grammar() {
    for spec in contract::CONTRACT {
        let word = spec
            .name
            .strip_prefix(TOKEN_PREFIX)
            .unwrap_or_else(|| panic!("{} lacks the reserved prefix", spec.name));
        assert!(
            is_valid_palette_name(word),
            "{} is not a grammatical token name",
            spec.name
        );
    }
    assert!(is_valid_palette_name(
        CONTRACT_TOKEN.strip_prefix(TOKEN_PREFIX).unwrap()
    ));
}

#[test]
fn builtin_theme_ids_round_trip() {
    for builtin in BuiltinPalette::all() {
        for mode in Mode::all() {
            let id = format!("{}-{mode}", builtin.id());
            assert!(is_valid_theme_id(&id), "{id} should be a valid theme id");
            let parsed = parse_theme_id(&id)
                .unwrap_or_else(|| panic!("{id} should decompose into palette and mode"));
            assert_eq!(parsed.palette, builtin.id());
            assert_eq!(parsed.mode, *mode);
        }
    }
}

#[test]
fn pairing_targets_exist_in_every_builtin() {
    for builtin in BuiltinPalette::all() {
        let palette = builtin.palette();
        for mode in Mode::all() {
            let layer = palette.layer(*mode);
            for (token, foreground) in contract::foreground_pairs() {
                let has = |name: &str| palette.base.contains_key(name) || layer.contains_key(name);
                assert!(
                    !has(token) || has(foreground),
                    "{} {mode}: {token} is declared without {foreground}",
                    builtin.id()
                );
            }
        }
    }
}

#[test]
fn deprecated_names_never_appear_in_builtins() {
    for builtin in BuiltinPalette::all() {
        let palette = builtin.palette();
        for layer in [&palette.base, &palette.light, &palette.dark] {
            for (retired, _) in contract::deprecated_tokens() {
                assert!(
                    !layer.contains_key(retired),
                    "{} ships retired token {retired}",
                    builtin.id()
                );
            }
        }
    }
}
