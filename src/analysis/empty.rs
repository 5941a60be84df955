//! EMPTY analysis: which symbols can derive the empty string
//!
//! `Empty(X)` is a subset of `{ε}`: `{ε}` when X can derive the empty
//! string, `∅` otherwise. Every symbol starts at `∅`; rules are swept until
//! a full pass changes nothing, unioning `Empty(α)` into `Empty(X)` for
//! each rule `X -> α`. Sets only ever grow, and the symbol universe is
//! finite, so the fixpoint terminates.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::form::SententialForm;
use crate::grammar::Grammar;
use crate::set::Set;
use crate::symbol::Symbol;

use super::Analysis;

/// Finished EMPTY tables: per-symbol nullability sets
#[derive(Debug, Clone)]
pub struct EmptyAnalysis {
    sets: BTreeMap<Symbol, Set<Symbol>>,
}

impl EmptyAnalysis {
    /// `Empty(symbol)`: `{ε}` iff the symbol can derive the empty string
    ///
    /// Symbols outside the grammar yield `∅`.
    #[must_use]
    pub fn of(&self, symbol: &Symbol) -> Set<Symbol> {
        self.sets.get(symbol).cloned().unwrap_or_default()
    }

    /// `Empty(form)`: `{ε}` iff the form is empty or every symbol in it is nullable
    #[must_use]
    pub fn of_form(&self, form: &SententialForm) -> Set<Symbol> {
        if self.is_nullable_form(form) {
            Set::singleton(Symbol::epsilon())
        } else {
            Set::new()
        }
    }

    /// Whether the symbol can derive the empty string
    #[must_use]
    pub fn is_nullable(&self, symbol: &Symbol) -> bool {
        self.sets
            .get(symbol)
            .is_some_and(|set| set.contains(&Symbol::epsilon()))
    }

    /// Whether every symbol of the form is nullable (trivially true when empty)
    #[must_use]
    pub fn is_nullable_form(&self, form: &SententialForm) -> bool {
        form.iter().all(|symbol| self.is_nullable(symbol))
    }
}

pub(crate) fn compute(grammar: &Grammar) -> Result<Analysis> {
    let mut sets: BTreeMap<Symbol, Set<Symbol>> = grammar
        .terminals()
        .iter()
        .chain(grammar.nonterminals().iter())
        .map(|symbol| (symbol.clone(), Set::new()))
        .collect();

    let epsilon = Symbol::epsilon();

    let mut changed = true;
    while changed {
        changed = false;

        for rule in grammar.rules() {
            let head_nullable = sets
                .get(rule.head())
                .is_some_and(|s| s.contains(&epsilon));
            if head_nullable {
                continue;
            }

            let body_nullable = rule
                .body()
                .iter()
                .all(|symbol| sets.get(symbol).is_some_and(|s| s.contains(&epsilon)));

            if body_nullable {
                let entry = sets
                    .entry(rule.head().clone())
                    .or_insert_with(Set::default);
                *entry = entry.union(&Set::singleton(epsilon.clone()));
                changed = true;
            }
        }
    }

    Ok(Analysis::Empty(EmptyAnalysis { sets }))
}
