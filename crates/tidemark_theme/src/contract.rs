//! The canonical token contract.
//!
//! Every Tidemark surface is painted from the same closed set of CSS
//! custom properties, all prefixed `--tm-`. This module is the single
//! source of truth for that set: which tokens exist, which are
//! required, which background tokens must travel with a foreground
//! sibling, and which names are deprecated. The resolver fills the
//! contract, the validator and parity checker audit artifacts against
//! it.

use std::sync::OnceLock;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// Bump when tokens are added, removed, or renamed.
pub const CONTRACT_VERSION: u32 = 4;

/// Stamp token injected into every resolved map and emitted artifact.
/// Always permitted in an artifact, never required, never extra.
pub const CONTRACT_TOKEN: &str = "--tm-contract";

/// Value of [`CONTRACT_TOKEN`], a quoted CSS string.
pub const CONTRACT_VALUE: &str = "\"4\"";

/// Prefix reserved for every token in the contract.
pub const TOKEN_PREFIX: &str = "--tm-";

/// Ordered token name to CSS value map. Insertion order is the order
/// declarations appear in emitted CSS, so it must stay deterministic.
pub type TokenMap = IndexMap<String, String>;

/// One row of the contract table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSpec {
    /// Full token name including the `--tm-` prefix.
    pub name: &'static str,
    /// Required tokens must be present in every complete theme.
    pub required: bool,
    /// Foreground sibling that must accompany this token wherever it
    /// appears. Usually `<name>-foreground`; stored explicitly because
    /// `--tm-selection-bg` pairs with `--tm-selection-foreground`.
    pub foreground: Option<&'static str>,
    /// Set for retired names. The note says what replaced them.
    pub deprecated: Option<&'static str>,
}

impl TokenSpec {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            foreground: None,
            deprecated: None,
        }
    }

    const fn paired(name: &'static str, foreground: &'static str) -> Self {
        Self {
            name,
            required: true,
            foreground: Some(foreground),
            deprecated: None,
        }
    }

    const fn retired(name: &'static str, note: &'static str) -> Self {
        Self {
            name,
            required: false,
            foreground: None,
            deprecated: Some(note),
        }
    }
}

/// The contract table, in canonical emission order.
///
/// Required rows come first, retired names last. The order here is the
/// order tokens appear in resolved maps and emitted CSS.
pub const CONTRACT: &[TokenSpec] = &[
    TokenSpec::required("--tm-background"),
    TokenSpec::required("--tm-foreground"),
    TokenSpec::paired("--tm-card", "--tm-card-foreground"),
    TokenSpec::required("--tm-card-foreground"),
    TokenSpec::paired("--tm-popover", "--tm-popover-foreground"),
    TokenSpec::required("--tm-popover-foreground"),
    TokenSpec::paired("--tm-primary", "--tm-primary-foreground"),
    TokenSpec::required("--tm-primary-foreground"),
    TokenSpec::paired("--tm-secondary", "--tm-secondary-foreground"),
    TokenSpec::required("--tm-secondary-foreground"),
    TokenSpec::paired("--tm-muted", "--tm-muted-foreground"),
    TokenSpec::required("--tm-muted-foreground"),
    TokenSpec::paired("--tm-accent", "--tm-accent-foreground"),
    TokenSpec::required("--tm-accent-foreground"),
    TokenSpec::paired("--tm-destructive", "--tm-destructive-foreground"),
    TokenSpec::required("--tm-destructive-foreground"),
    TokenSpec::paired("--tm-success", "--tm-success-foreground"),
    TokenSpec::required("--tm-success-foreground"),
    TokenSpec::paired("--tm-warning", "--tm-warning-foreground"),
    TokenSpec::required("--tm-warning-foreground"),
    TokenSpec::paired("--tm-info", "--tm-info-foreground"),
    TokenSpec::required("--tm-info-foreground"),
    TokenSpec::required("--tm-border"),
    TokenSpec::required("--tm-input"),
    TokenSpec::required("--tm-ring"),
    TokenSpec::paired("--tm-selection-bg", "--tm-selection-foreground"),
    TokenSpec::required("--tm-selection-foreground"),
    TokenSpec::required("--tm-overlay"),
    TokenSpec::required("--tm-shadow-color"),
    TokenSpec::required("--tm-radius"),
    TokenSpec::required("--tm-font-sans"),
    TokenSpec::required("--tm-font-mono"),
    TokenSpec::required("--tm-chart-1"),
    TokenSpec::required("--tm-chart-2"),
    TokenSpec::required("--tm-chart-3"),
    TokenSpec::required("--tm-chart-4"),
    TokenSpec::required("--tm-chart-5"),
    TokenSpec::retired(
        "--tm-selection",
        "split into --tm-selection-bg and --tm-selection-foreground in contract v3",
    ),
    TokenSpec::retired("--tm-focus-ring", "renamed to --tm-ring in contract v2"),
];

/// Name index over [`CONTRACT`], built on first use.
fn index() -> &'static FxHashMap<&'static str, &'static TokenSpec> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static TokenSpec>> = OnceLock::new();
    INDEX.get_or_init(|| CONTRACT.iter().map(|spec| (spec.name, spec)).collect())
}

/// Look up the contract row for a token name.
pub fn spec_for(name: &str) -> Option<&'static TokenSpec> {
    index().get(name).copied()
}

/// Names every complete theme must define, in canonical order.
pub fn required_tokens() -> impl Iterator<Item = &'static str> {
    CONTRACT.iter().filter(|s| s.required).map(|s| s.name)
}

/// Whether `name` is one of the required contract tokens.
pub fn is_required_token(name: &str) -> bool {
    spec_for(name).is_some_and(|s| s.required)
}

/// Whether `name` lives in the reserved `--tm-` namespace at all.
/// Broader than contract membership: a misspelled `--tm-primry` is a
/// core token (ours to police) without being a contract token.
pub fn is_core_token(name: &str) -> bool {
    name.starts_with(TOKEN_PREFIX)
}

/// Whether `name` belongs to the contract. Covers required rows,
/// retired rows, and the stamp token itself.
pub fn is_contract_token(name: &str) -> bool {
    name == CONTRACT_TOKEN || spec_for(name).is_some()
}

/// Migration note for a retired name, or `None` if the name is current.
pub fn deprecation(name: &str) -> Option<&'static str> {
    spec_for(name).and_then(|s| s.deprecated)
}

/// Foreground sibling `name` must travel with, if the contract pairs it.
pub fn foreground_token(name: &str) -> Option<&'static str> {
    spec_for(name).and_then(|s| s.foreground)
}

/// Retired names with their replacement notes.
pub fn deprecated_tokens() -> impl Iterator<Item = (&'static str, &'static str)> {
    CONTRACT
        .iter()
        .filter_map(|s| s.deprecated.map(|note| (s.name, note)))
}

/// `(background, foreground)` sibling pairs enforced by the validator.
pub fn foreground_pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    CONTRACT
        .iter()
        .filter_map(|s| s.foreground.map(|fg| (s.name, fg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stamp_value_matches_version() {
        let quoted: u32 = CONTRACT_VALUE
            .trim_matches('"')
            .parse()
            .expect("stamp holds a number");
        assert_eq!(quoted, CONTRACT_VERSION);
    }

    #[test]
    fn required_set_is_stable() {
        assert_eq!(required_tokens().count(), 37);
        assert_eq!(deprecated_tokens().count(), 2);
        assert_eq!(CONTRACT.len(), 39);
    }

    #[test]
    fn every_token_carries_the_prefix() {
        for spec in CONTRACT {
            assert!(is_core_token(spec.name), "{}", spec.name);
        }
        assert!(is_core_token(CONTRACT_TOKEN));
    }

    #[test]
    fn no_duplicate_rows() {
        assert_eq!(index().len(), CONTRACT.len());
    }

    #[test]
    fn foreground_siblings_are_required_rows() {
        for (bg, fg) in foreground_pairs() {
            assert!(
                is_required_token(fg),
                "{bg} pairs with {fg}, which must be a required row"
            );
        }
    }

    #[test]
    fn pairing_follows_the_suffix_convention_with_one_exception() {
        for (bg, fg) in foreground_pairs() {
            if bg == "--tm-selection-bg" {
                assert_eq!(fg, "--tm-selection-foreground");
            } else {
                assert_eq!(fg, format!("{bg}-foreground"));
            }
        }
        assert_eq!(foreground_pairs().count(), 11);
    }

    #[test]
    fn retired_names_are_known_but_not_required() {
        for (name, note) in deprecated_tokens() {
            assert!(!is_required_token(name), "{name} must not be required");
            assert!(is_contract_token(name), "{name} stays a known name");
            assert_eq!(deprecation(name), Some(note));
        }
        assert_eq!(deprecation("--tm-primary"), None);
    }

    #[test]
    fn lookup_answers_match_the_table() {
        assert_eq!(
            foreground_token("--tm-selection-bg"),
            Some("--tm-selection-foreground")
        );
        assert_eq!(foreground_token("--tm-primary"), Some("--tm-primary-foreground"));
        assert_eq!(foreground_token("--tm-background"), None);
        assert!(is_required_token("--tm-chart-5"));
        assert!(!is_required_token("--tm-selection"));
        assert!(!is_required_token("--tm-sidebar"));
    }

    #[test]
    fn membership_covers_stamp_and_rejects_strangers() {
        assert!(is_contract_token(CONTRACT_TOKEN));
        assert!(is_contract_token("--tm-primary"));
        assert!(is_contract_token("--tm-focus-ring"));
        assert!(!is_contract_token("--tm-sidebar"));
        assert!(!is_contract_token("--primary"));
        assert!(is_core_token("--tm-sidebar"));
        assert!(!is_core_token("--primary"));
    }
}
