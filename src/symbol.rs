//! Grammar symbols
//!
//! A [`Symbol`] is the atomic unit of a grammar: a terminal name, a
//! nonterminal name, or one of the two reserved sentinels (the empty-string
//! marker `ε` and the end-of-input marker `$`). Symbols are immutable and
//! compared, ordered, and hashed by name alone; whether a name denotes a
//! terminal or a nonterminal is a property of the grammar, not of the
//! symbol.

use serde::{Deserialize, Serialize};

/// The empty-string sentinel name.
pub const EPSILON: &str = "ε";

/// The end-of-input sentinel name.
pub const END_OF_INPUT: &str = "$";

/// An atomic grammar symbol, identified by its name
///
/// ```
/// use derivar::symbol::Symbol;
///
/// let s = Symbol::new("S");
/// assert_eq!(s.name(), "S");
/// assert_eq!(s, Symbol::from("S"));
/// assert!(Symbol::epsilon().is_epsilon());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    /// Create a symbol with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The empty-string sentinel `ε`
    #[must_use]
    pub fn epsilon() -> Self {
        Self::new(EPSILON)
    }

    /// The end-of-input sentinel `$`
    #[must_use]
    pub fn end_of_input() -> Self {
        Self::new(END_OF_INPUT)
    }

    /// The symbol's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this symbol is the empty-string sentinel
    #[must_use]
    pub fn is_epsilon(&self) -> bool {
        self.name == EPSILON
    }

    /// Whether this symbol is the end-of-input sentinel
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.name == END_OF_INPUT
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
