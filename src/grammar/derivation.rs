//! Leftmost-derivation exploration
//!
//! One-step rewriting of the leftmost nonterminal occurrence, plus two
//! breadth-first views over the derivation graph: the exact depth-n
//! frontier, and an unbounded lazy sequence of `(form, depth)` pairs. The
//! lazy sequence performs no cycle or duplicate detection — on a recursive
//! grammar it never ends, and its only stop mechanism is the caller
//! ceasing to pull.

use std::collections::VecDeque;

use crate::form::SententialForm;

use super::Grammar;

impl Grammar {
    /// All one-step leftmost rewrites of `form`
    ///
    /// Finds the leftmost nonterminal occurrence and produces one successor
    /// per rule of that nonterminal, with the occurrence replaced by the
    /// rule's body. A form without nonterminals has no successors.
    #[must_use]
    pub fn derive_left(&self, form: &SententialForm) -> Vec<SententialForm> {
        let Some(index) = form.first_index_of(|s| self.nonterminals().contains(s)) else {
            return Vec::new();
        };

        let before = form.slice(0..index);
        let after = form.slice(index + 1..form.len());

        self.rules_by_head
            .get(&form.at(index))
            .into_iter()
            .flatten()
            .map(|rule| before.clone() + rule.body().clone() + after.clone())
            .collect()
    }

    /// The forms reachable in exactly `depth` leftmost steps
    ///
    /// Depth 0 is the input form itself. The frontier is expanded
    /// breadth-first; forms whose expansion dies out before `depth` are
    /// dropped.
    #[must_use]
    pub fn derive_left_to_depth(&self, form: &SententialForm, depth: usize) -> Vec<SententialForm> {
        let mut frontier = vec![form.clone()];

        for _ in 0..depth {
            frontier = frontier
                .iter()
                .flat_map(|f| self.derive_left(f))
                .collect();
            if frontier.is_empty() {
                break;
            }
        }

        frontier
    }

    /// Unbounded lazy breadth-first traversal of the derivation graph
    ///
    /// Yields `(form, depth)` pairs in non-decreasing depth order, starting
    /// with `(form, 0)`.
    pub fn derive_left_iter(&self, form: SententialForm) -> LeftDerivations<'_> {
        let mut queue = VecDeque::new();
        queue.push_back((form, 0));
        LeftDerivations {
            grammar: self,
            queue,
        }
    }
}

/// Lazy breadth-first iterator over leftmost derivations
///
/// Created by [`Grammar::derive_left_iter`].
#[derive(Debug)]
pub struct LeftDerivations<'g> {
    grammar: &'g Grammar,
    queue: VecDeque<(SententialForm, usize)>,
}

impl Iterator for LeftDerivations<'_> {
    type Item = (SententialForm, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (form, depth) = self.queue.pop_front()?;

        for successor in self.grammar.derive_left(&form) {
            self.queue.push_back((successor, depth + 1));
        }

        Some((form, depth))
    }
}
