//! PREDICT analysis: LL(1) lookahead sets per rule
//!
//! Unlike the other analyses, PREDICT is not a fixpoint — it is a direct
//! query over finished EMPTY/FIRST/FOLLOW results. For a rule `X -> α`,
//! `Predict = First(α)`, extended with `Follow(X)` when α is nullable. An
//! LL(1) parser picks the production for X whose predict set contains the
//! lookahead terminal; two rules for the same X with overlapping predict
//! sets are an LL(1) conflict, surfaced by [`PredictAnalysis::conflicts`].

use std::collections::BTreeMap;

use crate::error::Result;
use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::set::Set;
use crate::symbol::Symbol;

use super::{first_of_form, Analysis};

/// Finished PREDICT tables: one lookahead set per rule of the grammar
#[derive(Debug, Clone)]
pub struct PredictAnalysis {
    sets: BTreeMap<Rule, Set<Symbol>>,
}

/// Two same-head rules whose predict sets overlap
///
/// The grammar is not LL(1) under such a pair: on any lookahead in
/// `overlap` a table-driven parser cannot choose between the two rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ll1Conflict {
    /// The nonterminal both rules rewrite
    pub head: Symbol,
    /// The conflicting pair
    pub rules: (Rule, Rule),
    /// The shared lookahead terminals
    pub overlap: Set<Symbol>,
}

impl PredictAnalysis {
    /// The lookahead set for one of the grammar's rules
    #[must_use]
    pub fn of(&self, rule: &Rule) -> Option<&Set<Symbol>> {
        self.sets.get(rule)
    }

    /// Iterate every (rule, predict set) pair
    pub fn iter(&self) -> impl Iterator<Item = (&Rule, &Set<Symbol>)> {
        self.sets.iter()
    }

    /// Every pair of same-head rules with overlapping predict sets
    ///
    /// An empty result means the grammar is LL(1) under these rules.
    #[must_use]
    pub fn conflicts(&self) -> Vec<Ll1Conflict> {
        let rules: Vec<&Rule> = self.sets.keys().collect();
        let mut conflicts = Vec::new();

        for (i, left) in rules.iter().enumerate() {
            for right in &rules[i + 1..] {
                if left.head() != right.head() {
                    continue;
                }

                let overlap = self.sets[*left].intersect(&self.sets[*right]);
                if overlap.is_empty() {
                    continue;
                }

                conflicts.push(Ll1Conflict {
                    head: left.head().clone(),
                    rules: ((*left).clone(), (*right).clone()),
                    overlap,
                });
            }
        }

        conflicts
    }
}

/// The predict formula for a single rule, over the grammar's finished analyses
pub(crate) fn predict_set(grammar: &Grammar, rule: &Rule) -> Result<Set<Symbol>> {
    let empty = grammar.empty_analysis()?;
    let first = grammar.first_analysis()?;

    let begins = first_of_form(first, empty, rule.body());
    if empty.of_form(rule.body()).is_empty() {
        return Ok(begins);
    }

    let follow = grammar.follow_analysis()?;
    Ok(begins.union(&follow.of(rule.head())))
}

pub(crate) fn compute(grammar: &Grammar) -> Result<Analysis> {
    let mut sets = BTreeMap::new();
    for rule in grammar.rules() {
        sets.insert(rule.clone(), predict_set(grammar, rule)?);
    }

    Ok(Analysis::Predict(PredictAnalysis { sets }))
}
