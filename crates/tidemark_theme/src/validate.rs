//! Contract validation.
//!
//! `validate_theme` audits one token map against the contract and
//! reports findings instead of failing: policy (fail the build, warn,
//! ignore) belongs to the caller. The version stamp is neither required
//! nor extra, and deprecated names are known names, so they are flagged
//! for migration rather than reported as strangers.

use serde::Serialize;

use crate::contract::{self, TokenMap};

/// A retired token found in the map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeprecatedUse {
    /// The retired name as it appeared.
    pub token: String,
    /// Migration note from the contract table.
    pub note: String,
}

/// A pairing rule whose foreground side is absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForegroundViolation {
    /// Token the contract pairs.
    pub token: String,
    /// The absent sibling.
    pub expected: String,
}

/// Outcome of validating one token map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Required tokens absent from the map, in contract order.
    pub missing: Vec<String>,
    /// Map tokens outside the contract, in map order.
    pub extra: Vec<String>,
    /// Retired names present in the map, in map order.
    pub deprecated: Vec<DeprecatedUse>,
    /// Pairing rules with an absent foreground side, in contract order.
    pub unpaired: Vec<ForegroundViolation>,
}

impl ValidationReport {
    /// `true` iff the map satisfies the contract outright.
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
            && self.extra.is_empty()
            && self.deprecated.is_empty()
            && self.unpaired.is_empty()
    }

    /// Total number of findings across all four lists.
    pub fn finding_count(&self) -> usize {
        self.missing.len() + self.extra.len() + self.deprecated.len() + self.unpaired.len()
    }
}

/// Audit `tokens` against the contract.
pub fn validate_theme(tokens: &TokenMap) -> ValidationReport {
    let missing = contract::required_tokens()
        .filter(|name| !tokens.contains_key(*name))
        .map(str::to_string)
        .collect();

    let extra = tokens
        .keys()
        .filter(|name| !contract::is_contract_token(name))
        .cloned()
        .collect();

    let deprecated = tokens
        .keys()
        .filter_map(|name| {
            contract::deprecation(name).map(|note| DeprecatedUse {
                token: name.clone(),
                note: note.to_string(),
            })
        })
        .collect();

    // The pairing rule reads on the map as a whole: an absent
    // foreground side is a finding whether or not the token that
    // demands it is itself present.
    let unpaired = contract::foreground_pairs()
        .filter(|(_, fg)| !tokens.contains_key(*fg))
        .map(|(token, expected)| ForegroundViolation {
            token: token.to_string(),
            expected: expected.to_string(),
        })
        .collect();

    ValidationReport {
        missing,
        extra,
        deprecated,
        unpaired,
    }
}
