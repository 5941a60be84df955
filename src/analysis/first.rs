//! FIRST analysis: terminals that can begin a derivation
//!
//! `First(terminal)` is the terminal itself; nonterminals start at `∅` and
//! rules are swept to a fixpoint. For a rule `X -> s1 s2 … sn` the body is
//! scanned left to right, unioning `First(si)` into `First(X)` and stopping
//! at the first non-nullable symbol — symbols behind it can never begin the
//! string. The epsilon sentinel is never added to a FIRST set; nullability
//! lives exclusively in the EMPTY analysis.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::form::SententialForm;
use crate::grammar::Grammar;
use crate::set::Set;
use crate::symbol::Symbol;

use super::{Analysis, EmptyAnalysis};

/// Finished FIRST tables: per-symbol sets of begin terminals
#[derive(Debug, Clone)]
pub struct FirstAnalysis {
    sets: BTreeMap<Symbol, Set<Symbol>>,
}

impl FirstAnalysis {
    /// `First(symbol)`; `∅` for symbols outside the grammar
    #[must_use]
    pub fn of(&self, symbol: &Symbol) -> Set<Symbol> {
        self.sets.get(symbol).cloned().unwrap_or_default()
    }
}

/// The left-to-right scan-and-stop over an arbitrary form
///
/// Returns `∅` for the empty form. Shared by the FIRST fixpoint itself and
/// by the FOLLOW and PREDICT computations.
pub(crate) fn first_of_form(
    first: &FirstAnalysis,
    empty: &EmptyAnalysis,
    form: &SententialForm,
) -> Set<Symbol> {
    let mut result = Set::new();

    for symbol in form {
        result = result.union(&first.of(symbol));
        if !empty.is_nullable(symbol) {
            break;
        }
    }

    result
}

pub(crate) fn compute(grammar: &Grammar) -> Result<Analysis> {
    let empty = grammar.empty_analysis()?;

    let mut sets: BTreeMap<Symbol, Set<Symbol>> = grammar
        .terminals()
        .iter()
        .map(|t| (t.clone(), Set::singleton(t.clone())))
        .chain(
            grammar
                .nonterminals()
                .iter()
                .map(|n| (n.clone(), Set::new())),
        )
        .collect();

    let mut changed = true;
    while changed {
        changed = false;

        for rule in grammar.rules() {
            let current = sets.get(rule.head()).cloned().unwrap_or_default();
            let mut next = current.clone();

            for symbol in rule.body() {
                if let Some(first_of_symbol) = sets.get(symbol) {
                    next = next.union(first_of_symbol);
                }
                if !empty.is_nullable(symbol) {
                    break;
                }
            }

            if next != current {
                sets.insert(rule.head().clone(), next);
                changed = true;
            }
        }
    }

    Ok(Analysis::First(FirstAnalysis { sets }))
}
