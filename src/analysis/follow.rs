//! FOLLOW analysis: terminals that can appear immediately after a nonterminal
//!
//! `Follow(X)` contains every terminal (and the end-of-input sentinel) that
//! can stand directly to the right of X in some derivation from the start
//! symbol. The start symbol is seeded with `{$}`; then for every rule
//! `X -> s1 … sn` and every nonterminal occurrence `si = A`, the suffix `y`
//! after position i contributes `First(y)`, and `Follow(X)` flows into
//! `Follow(A)` whenever `y` is empty or fully nullable — what follows X can
//! then also follow A.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::grammar::Grammar;
use crate::set::Set;
use crate::symbol::Symbol;

use super::{first_of_form, Analysis};

/// Finished FOLLOW tables: per-nonterminal follower sets
#[derive(Debug, Clone)]
pub struct FollowAnalysis {
    sets: BTreeMap<Symbol, Set<Symbol>>,
}

impl FollowAnalysis {
    /// `Follow(nonterminal)`; `∅` for symbols outside the grammar
    #[must_use]
    pub fn of(&self, symbol: &Symbol) -> Set<Symbol> {
        self.sets.get(symbol).cloned().unwrap_or_default()
    }
}

pub(crate) fn compute(grammar: &Grammar) -> Result<Analysis> {
    let empty = grammar.empty_analysis()?;
    let first = grammar.first_analysis()?;

    let mut sets: BTreeMap<Symbol, Set<Symbol>> = grammar
        .nonterminals()
        .iter()
        .map(|n| (n.clone(), Set::new()))
        .collect();
    sets.insert(
        grammar.start().clone(),
        Set::singleton(Symbol::end_of_input()),
    );

    let mut changed = true;
    while changed {
        changed = false;

        for rule in grammar.rules() {
            for (i, symbol) in rule.body().iter().enumerate() {
                if !grammar.nonterminals().contains(symbol) {
                    continue;
                }

                let suffix = rule.body().suffix_after(i);
                let current = sets.get(symbol).cloned().unwrap_or_default();
                let mut next = current.clone();

                if !suffix.is_empty() {
                    next = next.union(&first_of_form(first, empty, &suffix));
                }
                if empty.is_nullable_form(&suffix) {
                    let head_follow = sets.get(rule.head()).cloned().unwrap_or_default();
                    next = next.union(&head_follow);
                }

                if next != current {
                    sets.insert(symbol.clone(), next);
                    changed = true;
                }
            }
        }
    }

    Ok(Analysis::Follow(FollowAnalysis { sets }))
}
