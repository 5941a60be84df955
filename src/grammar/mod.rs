//! Frozen context-free grammars
//!
//! A [`Grammar`] is the immutable aggregate at the center of the library:
//! terminal set, nonterminal set (exactly the rule heads), per-nonterminal
//! rule groups, a start symbol, and a lazily-populated cache of analysis
//! results. Grammars are assembled mutably in a [`GrammarBuilder`],
//! validated and frozen as a whole by a [`GrammarFactory`], and never
//! mutated afterwards.
//!
//! Permanent invariants, enforced at freeze time:
//! 1. Terminals and nonterminals are disjoint.
//! 2. Every symbol in every rule body is a terminal or a rule head.
//! 3. The start symbol is a nonterminal with at least one rule.
//! 4. Every nonterminal owns a non-empty rule set.

mod builder;
mod derivation;
mod factory;

pub use builder::GrammarBuilder;
pub use derivation::LeftDerivations;
pub use factory::GrammarFactory;

use std::collections::{BTreeMap, HashMap};

use crate::analysis::{
    predict_set, Analysis, AnalysisCache, AnalysisKind, Constructor, EmptyAnalysis, FirstAnalysis,
    FollowAnalysis, Ll1Conflict,
};
use crate::error::{Error, Result};
use crate::form::SententialForm;
use crate::rule::Rule;
use crate::set::Set;
use crate::symbol::Symbol;

/// An immutable, validated context-free grammar
///
/// ```
/// use derivar::grammar::{GrammarBuilder, GrammarFactory};
/// use derivar::symbol::Symbol;
///
/// let mut builder = GrammarBuilder::new();
/// builder.add_terminal("a")?.add_terminal("b")?;
/// builder.add_rule("S -> a S b")?.add_rule("S -> ε")?;
/// builder.set_start("S")?;
/// let grammar = builder.build(&GrammarFactory::standard())?;
///
/// assert_eq!(grammar.first(&Symbol::new("S"))?.to_string(), "{a}");
/// # Ok::<(), derivar::error::Error>(())
/// ```
#[derive(Debug)]
pub struct Grammar {
    start: Symbol,
    terminals: Set<Symbol>,
    nonterminals: Set<Symbol>,
    rules_by_head: BTreeMap<Symbol, Set<Rule>>,
    rules: Set<Rule>,
    cache: AnalysisCache,
}

impl Grammar {
    pub(crate) fn new(
        terminals: Set<Symbol>,
        rules_by_head: BTreeMap<Symbol, Set<Rule>>,
        start: Symbol,
        registry: HashMap<AnalysisKind, Constructor>,
    ) -> Self {
        let nonterminals = rules_by_head.keys().cloned().collect();
        let rules = Set::union_all(rules_by_head.values().cloned());

        Self {
            start,
            terminals,
            nonterminals,
            rules_by_head,
            rules,
            cache: AnalysisCache::new(registry),
        }
    }

    /// The start symbol
    #[must_use]
    pub fn start(&self) -> &Symbol {
        &self.start
    }

    /// The declared terminal symbols
    #[must_use]
    pub fn terminals(&self) -> &Set<Symbol> {
        &self.terminals
    }

    /// The nonterminal symbols — exactly the rule heads
    #[must_use]
    pub fn nonterminals(&self) -> &Set<Symbol> {
        &self.nonterminals
    }

    /// Every rule of the grammar
    #[must_use]
    pub fn rules(&self) -> &Set<Rule> {
        &self.rules
    }

    /// The rules owned by `nonterminal`
    ///
    /// # Errors
    ///
    /// [`Error::UnknownNonTerminal`] when the symbol heads no rules.
    pub fn rules_of(&self, nonterminal: &Symbol) -> Result<&Set<Rule>> {
        self.rules_by_head
            .get(nonterminal)
            .ok_or_else(|| Error::UnknownNonTerminal(nonterminal.clone()))
    }

    /// The memoized analysis of the given kind
    ///
    /// The first request for a kind runs its registered constructor to
    /// completion (transparently computing dependency kinds the same way);
    /// every later request returns the same cached result.
    ///
    /// # Errors
    ///
    /// [`Error::UnregisteredAnalysis`] when no constructor is registered
    /// for `kind`, or whatever error the one-time computation produced.
    pub fn analysis(&self, kind: AnalysisKind) -> Result<&Analysis> {
        self.cache.get_or_compute(self, kind)
    }

    pub(crate) fn empty_analysis(&self) -> Result<&EmptyAnalysis> {
        self.analysis(AnalysisKind::Empty)?
            .as_empty()
            .ok_or(Error::UnregisteredAnalysis(AnalysisKind::Empty))
    }

    pub(crate) fn first_analysis(&self) -> Result<&FirstAnalysis> {
        self.analysis(AnalysisKind::First)?
            .as_first()
            .ok_or(Error::UnregisteredAnalysis(AnalysisKind::First))
    }

    pub(crate) fn follow_analysis(&self) -> Result<&FollowAnalysis> {
        self.analysis(AnalysisKind::Follow)?
            .as_follow()
            .ok_or(Error::UnregisteredAnalysis(AnalysisKind::Follow))
    }

    /// `Empty(symbol)`: `{ε}` iff the symbol can derive the empty string
    pub fn empty(&self, symbol: &Symbol) -> Result<Set<Symbol>> {
        Ok(self.empty_analysis()?.of(symbol))
    }

    /// `Empty(form)`: `{ε}` iff the form is empty or fully nullable
    pub fn empty_form(&self, form: &SententialForm) -> Result<Set<Symbol>> {
        Ok(self.empty_analysis()?.of_form(form))
    }

    /// `First(symbol)`: terminals that can begin a derivation of the symbol
    pub fn first(&self, symbol: &Symbol) -> Result<Set<Symbol>> {
        Ok(self.first_analysis()?.of(symbol))
    }

    /// `First(form)`: the left-to-right scan over an arbitrary form
    pub fn first_form(&self, form: &SententialForm) -> Result<Set<Symbol>> {
        let empty = self.empty_analysis()?;
        let first = self.first_analysis()?;
        Ok(crate::analysis::first_of_form(first, empty, form))
    }

    /// `Follow(nonterminal)`: terminals (and `$`) that can follow it
    pub fn follow(&self, symbol: &Symbol) -> Result<Set<Symbol>> {
        Ok(self.follow_analysis()?.of(symbol))
    }

    /// `Predict(rule)`: the LL(1) lookahead set for choosing this rule
    ///
    /// Rules of the grammar are served from the precomputed PREDICT tables;
    /// a foreign rule is evaluated directly against the cached
    /// EMPTY/FIRST/FOLLOW results.
    pub fn predict(&self, rule: &Rule) -> Result<Set<Symbol>> {
        let analysis = self.analysis(AnalysisKind::Predict)?;
        let predict = analysis
            .as_predict()
            .ok_or(Error::UnregisteredAnalysis(AnalysisKind::Predict))?;

        if let Some(set) = predict.of(rule) {
            return Ok(set.clone());
        }
        predict_set(self, rule)
    }

    /// Every pair of same-head rules with overlapping predict sets
    pub fn ll1_conflicts(&self) -> Result<Vec<Ll1Conflict>> {
        let analysis = self.analysis(AnalysisKind::Predict)?;
        let predict = analysis
            .as_predict()
            .ok_or(Error::UnregisteredAnalysis(AnalysisKind::Predict))?;
        Ok(predict.conflicts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced_grammar() -> Grammar {
        let mut builder = GrammarBuilder::new();
        builder.add_terminal("a").unwrap().add_terminal("b").unwrap();
        builder
            .add_rule("S -> a S b")
            .unwrap()
            .add_rule("S -> ε")
            .unwrap();
        builder.set_start("S").unwrap();
        builder.build(&GrammarFactory::standard()).unwrap()
    }

    #[test]
    fn test_terminals_and_nonterminals_are_disjoint() {
        let grammar = balanced_grammar();
        assert!(grammar
            .terminals()
            .intersect(grammar.nonterminals())
            .is_empty());
    }

    #[test]
    fn test_nonterminals_are_rule_heads() {
        let grammar = balanced_grammar();
        assert_eq!(
            grammar.nonterminals(),
            &Set::singleton(Symbol::new("S"))
        );
    }

    #[test]
    fn test_rules_of_known_nonterminal() {
        let grammar = balanced_grammar();
        let rules = grammar.rules_of(&Symbol::new("S")).unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_rules_of_unknown_symbol_fails() {
        let grammar = balanced_grammar();
        assert_eq!(
            grammar.rules_of(&Symbol::new("a")).unwrap_err(),
            Error::UnknownNonTerminal(Symbol::new("a"))
        );
    }

    #[test]
    fn test_analysis_is_memoized_per_kind() {
        let grammar = balanced_grammar();
        let a = grammar.analysis(AnalysisKind::First).unwrap() as *const Analysis;
        let b = grammar.analysis(AnalysisKind::First).unwrap() as *const Analysis;
        assert_eq!(a, b);
    }

    #[test]
    fn test_unregistered_analysis_kind_fails() {
        let mut builder = GrammarBuilder::new();
        builder.add_terminal("a").unwrap();
        builder.add_rule("S -> a").unwrap();
        builder.set_start("S").unwrap();
        let grammar = builder.build(&GrammarFactory::new()).unwrap();

        assert_eq!(
            grammar.analysis(AnalysisKind::Empty).unwrap_err(),
            Error::UnregisteredAnalysis(AnalysisKind::Empty)
        );
    }

    #[test]
    fn test_dependency_chain_computes_transparently() {
        // Asking for PREDICT first must pull in EMPTY, FIRST, and FOLLOW.
        let grammar = balanced_grammar();
        let rule: Rule = "S -> ε".parse().unwrap();
        let predict = grammar.predict(&rule).unwrap();
        assert_eq!(predict.to_string(), "{$ b}");
    }

    #[test]
    fn test_grammar_shared_across_threads() {
        let grammar = std::sync::Arc::new(balanced_grammar());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let grammar = std::sync::Arc::clone(&grammar);
                std::thread::spawn(move || {
                    grammar.first(&Symbol::new("S")).unwrap().to_string()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "{a}");
        }
    }
}
