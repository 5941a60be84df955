//! Incremental grammar staging
//!
//! [`GrammarBuilder`] collects terminals, rules, and a start symbol while
//! enforcing the incremental naming invariants (terminals and rule heads
//! never collide). It is a staging area only: whole-grammar validation
//! happens in the factory, and `build` consumes the builder so nothing can
//! be mutated after the freeze.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::rule::Rule;
use crate::symbol::Symbol;

use super::{Grammar, GrammarFactory};

/// Mutable staging area for an unfrozen grammar
///
/// ```
/// use derivar::grammar::{GrammarBuilder, GrammarFactory};
///
/// let mut builder = GrammarBuilder::new();
/// builder.add_terminal("a")?;
/// builder.add_rule("S -> a")?.add_rule("S -> ε")?;
/// builder.set_start("S")?;
/// let grammar = builder.build(&GrammarFactory::standard())?;
/// assert_eq!(grammar.rules().len(), 2);
/// # Ok::<(), derivar::error::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    terminals: BTreeSet<Symbol>,
    heads: BTreeSet<Symbol>,
    rules: Vec<Rule>,
    start: Option<Symbol>,
}

impl GrammarBuilder {
    /// An empty staging area
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a terminal symbol
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateDeclaration`] when the name is already a terminal
    /// or already heads a rule.
    pub fn add_terminal(&mut self, name: impl Into<Symbol>) -> Result<&mut Self> {
        let symbol = name.into();
        if self.heads.contains(&symbol) || !self.terminals.insert(symbol.clone()) {
            return Err(Error::DuplicateDeclaration(symbol));
        }
        Ok(self)
    }

    /// Parse and add a rule from its text form
    ///
    /// # Errors
    ///
    /// [`Error::MalformedRule`] when the text does not match the rule
    /// syntax, or any error of [`add`](Self::add).
    pub fn add_rule(&mut self, text: &str) -> Result<&mut Self> {
        self.add(text.parse()?)
    }

    /// Add an already-constructed rule
    ///
    /// Rules sharing a head accumulate in insertion order.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateDeclaration`] when the rule's head was declared as
    /// a terminal.
    pub fn add(&mut self, rule: Rule) -> Result<&mut Self> {
        if self.terminals.contains(rule.head()) {
            return Err(Error::DuplicateDeclaration(rule.head().clone()));
        }

        self.heads.insert(rule.head().clone());
        self.rules.push(rule);
        Ok(self)
    }

    /// Choose the start symbol
    ///
    /// # Errors
    ///
    /// [`Error::InvalidStart`] when the symbol is a declared terminal.
    pub fn set_start(&mut self, symbol: impl Into<Symbol>) -> Result<&mut Self> {
        let symbol = symbol.into();
        if self.terminals.contains(&symbol) {
            return Err(Error::InvalidStart(symbol));
        }

        self.start = Some(symbol);
        Ok(self)
    }

    /// Freeze the staged contents into a validated [`Grammar`]
    ///
    /// Consumes the builder; the factory performs whole-grammar validation.
    ///
    /// # Errors
    ///
    /// [`Error::MissingStart`] when no start symbol was set, or any
    /// validation error of [`GrammarFactory::create`].
    pub fn build(self, factory: &GrammarFactory) -> Result<Grammar> {
        let start = self.start.ok_or(Error::MissingStart)?;
        factory.create(self.terminals.into_iter().collect(), self.rules, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_terminal_fails() {
        let mut builder = GrammarBuilder::new();
        builder.add_terminal("a").unwrap();
        assert_eq!(
            builder.add_terminal("a").unwrap_err(),
            Error::DuplicateDeclaration(Symbol::new("a"))
        );
    }

    #[test]
    fn test_terminal_clashing_with_rule_head_fails() {
        let mut builder = GrammarBuilder::new();
        builder.add_terminal("a").unwrap();
        builder.add_rule("S -> a").unwrap();
        assert_eq!(
            builder.add_terminal("S").unwrap_err(),
            Error::DuplicateDeclaration(Symbol::new("S"))
        );
    }

    #[test]
    fn test_rule_head_clashing_with_terminal_fails() {
        let mut builder = GrammarBuilder::new();
        builder.add_terminal("a").unwrap();
        builder.add_terminal("A").unwrap();
        assert_eq!(
            builder.add_rule("A -> a").unwrap_err(),
            Error::DuplicateDeclaration(Symbol::new("A"))
        );
    }

    #[test]
    fn test_malformed_rule_text_fails() {
        let mut builder = GrammarBuilder::new();
        assert_eq!(
            builder.add_rule("not a rule!").unwrap_err(),
            Error::MalformedRule("not a rule!".to_string())
        );
    }

    #[test]
    fn test_terminal_start_fails() {
        let mut builder = GrammarBuilder::new();
        builder.add_terminal("a").unwrap();
        assert_eq!(
            builder.set_start("a").unwrap_err(),
            Error::InvalidStart(Symbol::new("a"))
        );
    }

    #[test]
    fn test_build_without_start_fails() {
        let mut builder = GrammarBuilder::new();
        builder.add_rule("S -> ε").unwrap();
        assert_eq!(
            builder.build(&GrammarFactory::standard()).unwrap_err(),
            Error::MissingStart
        );
    }

    #[test]
    fn test_rules_accumulate_in_insertion_order() {
        let mut builder = GrammarBuilder::new();
        builder.add_terminal("a").unwrap().add_terminal("b").unwrap();
        builder
            .add_rule("S -> a")
            .unwrap()
            .add_rule("S -> b")
            .unwrap()
            .add_rule("S -> ε")
            .unwrap();
        let texts: Vec<String> = builder.rules.iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["S -> a", "S -> b", "S -> ε"]);
    }

    #[test]
    fn test_chained_construction() {
        let mut builder = GrammarBuilder::new();
        builder
            .add_terminal("a")
            .unwrap()
            .add_terminal("b")
            .unwrap();
        builder.add_rule("S -> a S b").unwrap().add_rule("S -> ε").unwrap();
        builder.set_start("S").unwrap();
        assert!(builder.build(&GrammarFactory::standard()).is_ok());
    }
}
