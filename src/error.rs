//! Error types for derivar
//!
//! Every error here is a construction- or validation-time failure surfaced
//! immediately at the offending operation; nothing is retried or batched.
//! Once a grammar is frozen, only the lookup variants remain reachable.

use thiserror::Error;

use crate::analysis::AnalysisKind;
use crate::symbol::Symbol;

/// Result type alias for derivar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, validating, or querying a grammar
///
/// All variants are `Clone` and `PartialEq`: the analysis cache stores the
/// outcome of each one-time computation and replays a stored failure to
/// later callers, and tests assert on concrete kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A terminal or rule head was declared twice
    #[error("duplicate declaration of `{0}`")]
    DuplicateDeclaration(Symbol),

    /// Rule text does not match the rule syntax
    #[error("malformed rule `{0}`")]
    MalformedRule(String),

    /// A rule head is also a declared terminal
    #[error("rule head `{0}` is declared as a terminal")]
    ReservedHead(Symbol),

    /// A rule body references a symbol that is neither a terminal nor a rule head
    #[error("rule `{rule}` references undefined symbol `{symbol}`")]
    UndefinedSymbol {
        /// Canonical text of the offending rule
        rule: String,
        /// The dangling symbol
        symbol: Symbol,
    },

    /// The start symbol is a terminal or has no rules
    #[error("invalid start symbol `{0}`")]
    InvalidStart(Symbol),

    /// The builder was never given a start symbol
    #[error("no start symbol was set")]
    MissingStart,

    /// Rule lookup for a symbol that heads no rules
    #[error("`{0}` is not a nonterminal of this grammar")]
    UnknownNonTerminal(Symbol),

    /// Analysis requested with no registered constructor for its kind
    #[error("no analysis registered for kind `{0}`")]
    UnregisteredAnalysis(AnalysisKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_symbol() {
        let err = Error::DuplicateDeclaration(Symbol::new("a"));
        assert_eq!(err.to_string(), "duplicate declaration of `a`");
    }

    #[test]
    fn test_undefined_symbol_display() {
        let err = Error::UndefinedSymbol {
            rule: "S -> a Q".to_string(),
            symbol: Symbol::new("Q"),
        };
        assert_eq!(
            err.to_string(),
            "rule `S -> a Q` references undefined symbol `Q`"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(Error::MissingStart, Error::MissingStart);
        assert_ne!(
            Error::InvalidStart(Symbol::new("S")),
            Error::InvalidStart(Symbol::new("T"))
        );
    }
}
