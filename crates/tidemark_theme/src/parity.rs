//! Cross-theme parity checking.
//!
//! Every shipped theme must carry the same token set: a token that
//! exists in one mode or palette but not another shows up as themes
//! that "lose" styling when switched. `check_parity` validates each
//! artifact against the contract and, independently, compares its key
//! set against the union of all artifacts. An artifact can satisfy the
//! contract and still diverge from the union (a sibling ships an extra
//! token), or vice versa.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::contract::{TokenMap, CONTRACT_TOKEN};
use crate::validate::{validate_theme, ValidationReport};

/// Findings for one artifact in a parity run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParityEntry {
    /// Caller-supplied label, usually the file name or theme id.
    pub label: String,
    /// Contract audit of this artifact alone.
    pub report: ValidationReport,
    /// Union tokens this artifact lacks, sorted.
    pub divergent: Vec<String>,
}

/// Outcome of a parity run over a set of labeled artifacts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParityReport {
    /// One entry per artifact, in input order.
    pub entries: Vec<ParityEntry>,
}

impl ParityReport {
    /// `true` iff every artifact passes the contract and none diverges
    /// from the union. An empty run passes: nothing to validate.
    pub fn passing(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.report.is_valid() && entry.divergent.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check a labeled set of token maps for contract and key-set parity.
pub fn check_parity(artifacts: &IndexMap<String, TokenMap>) -> ParityReport {
    // The stamp travels with every emitted artifact but is not part of
    // any theme's token set, so it never counts toward divergence.
    let union: BTreeSet<&str> = artifacts
        .values()
        .flat_map(|tokens| tokens.keys())
        .map(String::as_str)
        .filter(|name| *name != CONTRACT_TOKEN)
        .collect();

    let entries = artifacts
        .iter()
        .map(|(label, tokens)| {
            let divergent = union
                .iter()
                .filter(|name| !tokens.contains_key(**name))
                .map(|name| name.to_string())
                .collect();
            ParityEntry {
                label: label.clone(),
                report: validate_theme(tokens),
                divergent,
            }
        })
        .collect();

    ParityReport { entries }
}
