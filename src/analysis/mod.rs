//! Grammar analyses
//!
//! The four classical static analyses over a frozen grammar — EMPTY,
//! FIRST, FOLLOW, and PREDICT — form a dependency chain in that order.
//! Each is computed at most once per grammar, on first demand, by the
//! constructor registered for its [`AnalysisKind`]; querying a dependency
//! through the owning [`Grammar`] transparently triggers that dependency's
//! own one-time computation first. Every fixed-point loop runs to
//! exhaustion over fully-resolved dependency values, so analyses never
//! interleave mid-fixpoint.
//!
//! Dispatch is over the closed [`AnalysisKind`] tag set rather than open
//! inheritance; the [`Analysis`] enum carries the finished result tables.

mod empty;
mod first;
mod follow;
mod predict;

pub use empty::EmptyAnalysis;
pub use first::FirstAnalysis;
pub use follow::FollowAnalysis;
pub use predict::{Ll1Conflict, PredictAnalysis};

pub(crate) use first::first_of_form;
pub(crate) use predict::predict_set;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grammar::Grammar;

/// The closed set of analysis kinds a grammar can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisKind {
    /// Nullability: which symbols derive the empty string
    Empty,
    /// Terminals that can begin a derivation of a symbol
    First,
    /// Terminals that can immediately follow a nonterminal
    Follow,
    /// LL(1) lookahead sets per rule
    Predict,
}

impl AnalysisKind {
    /// All kinds, in dependency order
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::Empty,
        AnalysisKind::First,
        AnalysisKind::Follow,
        AnalysisKind::Predict,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            AnalysisKind::Empty => 0,
            AnalysisKind::First => 1,
            AnalysisKind::Follow => 2,
            AnalysisKind::Predict => 3,
        }
    }
}

impl std::fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisKind::Empty => write!(f, "empty"),
            AnalysisKind::First => write!(f, "first"),
            AnalysisKind::Follow => write!(f, "follow"),
            AnalysisKind::Predict => write!(f, "predict"),
        }
    }
}

/// A finished analysis result, tagged by kind
#[derive(Debug, Clone)]
pub enum Analysis {
    /// EMPTY result tables
    Empty(EmptyAnalysis),
    /// FIRST result tables
    First(FirstAnalysis),
    /// FOLLOW result tables
    Follow(FollowAnalysis),
    /// PREDICT lookahead tables
    Predict(PredictAnalysis),
}

impl Analysis {
    /// The kind this result belongs to
    #[must_use]
    pub fn kind(&self) -> AnalysisKind {
        match self {
            Analysis::Empty(_) => AnalysisKind::Empty,
            Analysis::First(_) => AnalysisKind::First,
            Analysis::Follow(_) => AnalysisKind::Follow,
            Analysis::Predict(_) => AnalysisKind::Predict,
        }
    }

    /// The EMPTY tables, if this is an EMPTY result
    #[must_use]
    pub fn as_empty(&self) -> Option<&EmptyAnalysis> {
        match self {
            Analysis::Empty(a) => Some(a),
            _ => None,
        }
    }

    /// The FIRST tables, if this is a FIRST result
    #[must_use]
    pub fn as_first(&self) -> Option<&FirstAnalysis> {
        match self {
            Analysis::First(a) => Some(a),
            _ => None,
        }
    }

    /// The FOLLOW tables, if this is a FOLLOW result
    #[must_use]
    pub fn as_follow(&self) -> Option<&FollowAnalysis> {
        match self {
            Analysis::Follow(a) => Some(a),
            _ => None,
        }
    }

    /// The PREDICT tables, if this is a PREDICT result
    #[must_use]
    pub fn as_predict(&self) -> Option<&PredictAnalysis> {
        match self {
            Analysis::Predict(a) => Some(a),
            _ => None,
        }
    }
}

/// Constructor for one analysis kind, invoked on first demand
pub type Constructor = fn(&Grammar) -> Result<Analysis>;

/// The standard constructor for a kind
#[must_use]
pub fn standard_constructor(kind: AnalysisKind) -> Constructor {
    match kind {
        AnalysisKind::Empty => empty::compute,
        AnalysisKind::First => first::compute,
        AnalysisKind::Follow => follow::compute,
        AnalysisKind::Predict => predict::compute,
    }
}

/// Per-grammar memoization of analysis results
///
/// One slot per kind. `OnceLock` makes the first-access check-and-compute
/// mutually exclusive when the grammar is shared across threads; after
/// first computation reads are lock-free, and a failed computation is
/// replayed to every later caller.
#[derive(Debug)]
pub(crate) struct AnalysisCache {
    registry: HashMap<AnalysisKind, Constructor>,
    slots: [OnceLock<Result<Analysis>>; 4],
}

impl AnalysisCache {
    pub(crate) fn new(registry: HashMap<AnalysisKind, Constructor>) -> Self {
        Self {
            registry,
            slots: [const { OnceLock::new() }; 4],
        }
    }

    /// The memoized result for `kind`, computing it on first access
    pub(crate) fn get_or_compute(&self, grammar: &Grammar, kind: AnalysisKind) -> Result<&Analysis> {
        let constructor = *self
            .registry
            .get(&kind)
            .ok_or(Error::UnregisteredAnalysis(kind))?;

        match self.slots[kind.index()].get_or_init(|| constructor(grammar)) {
            Ok(analysis) => Ok(analysis),
            Err(err) => Err(err.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        let names: Vec<String> = AnalysisKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["empty", "first", "follow", "predict"]);
    }

    #[test]
    fn test_kind_indices_are_dense() {
        for (expected, kind) in AnalysisKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), expected);
        }
    }

    #[test]
    fn test_standard_constructors_cover_all_kinds() {
        // Pointer inequality across kinds guards against a copy-paste mixup.
        let ctors: Vec<Constructor> = AnalysisKind::ALL
            .into_iter()
            .map(standard_constructor)
            .collect();
        for i in 0..ctors.len() {
            for j in i + 1..ctors.len() {
                assert_ne!(ctors[i] as usize, ctors[j] as usize);
            }
        }
    }
}
