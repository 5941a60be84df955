//! Whole-grammar validation and freezing
//!
//! [`GrammarFactory`] validates a staged builder's contents as a whole and
//! constructs the immutable [`Grammar`], wiring in the registry of
//! analysis constructors. The registry is the factory's extension point:
//! registering a constructor for a kind overwrites any prior registration
//! for that kind.

use std::collections::{BTreeMap, HashMap};

use crate::analysis::{standard_constructor, AnalysisKind, Constructor};
use crate::error::{Error, Result};
use crate::rule::Rule;
use crate::set::Set;
use crate::symbol::Symbol;

use super::Grammar;

/// Validates staged grammars and owns the analysis-constructor registry
#[derive(Debug, Clone)]
pub struct GrammarFactory {
    registry: HashMap<AnalysisKind, Constructor>,
}

impl GrammarFactory {
    /// A factory with no registered analyses
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    /// A factory with the four standard analyses registered
    #[must_use]
    pub fn standard() -> Self {
        let mut factory = Self::new();
        for kind in AnalysisKind::ALL {
            factory.register(kind, standard_constructor(kind));
        }
        factory
    }

    /// Register (or overwrite) the constructor for an analysis kind
    pub fn register(&mut self, kind: AnalysisKind, constructor: Constructor) -> &mut Self {
        self.registry.insert(kind, constructor);
        self
    }

    /// Validate the staged contents and freeze them into a [`Grammar`]
    ///
    /// # Errors
    ///
    /// - [`Error::ReservedHead`] when a rule's head is a declared terminal.
    /// - [`Error::UndefinedSymbol`] when a rule body references a symbol
    ///   that is neither a terminal nor any rule's head.
    /// - [`Error::InvalidStart`] when the start symbol heads no rules.
    pub fn create(
        &self,
        terminals: Set<Symbol>,
        rules: Vec<Rule>,
        start: Symbol,
    ) -> Result<Grammar> {
        let mut groups: BTreeMap<Symbol, Set<Rule>> = rules
            .iter()
            .map(|rule| (rule.head().clone(), Set::new()))
            .collect();

        if !groups.contains_key(&start) {
            return Err(Error::InvalidStart(start));
        }

        for rule in rules {
            if terminals.contains(rule.head()) {
                return Err(Error::ReservedHead(rule.head().clone()));
            }

            if let Some(symbol) = rule
                .body()
                .iter()
                .find(|s| !groups.contains_key(s) && !terminals.contains(s))
            {
                return Err(Error::UndefinedSymbol {
                    rule: rule.to_string(),
                    symbol: symbol.clone(),
                });
            }

            let head = rule.head().clone();
            if let Some(group) = groups.get_mut(&head) {
                *group = group.union(&Set::singleton(rule));
            }
        }

        Ok(Grammar::new(terminals, groups, start, self.registry.clone()))
    }
}

impl Default for GrammarFactory {
    /// The standard factory, analyses included
    fn default() -> Self {
        Self::standard()
    }
}
