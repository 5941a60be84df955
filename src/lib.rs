//! Derivar - Context-Free Grammar Analysis
//!
//! Derivar models context-free grammars as symbols and production rules,
//! validates their structure, and computes the classical static analyses
//! (EMPTY, FIRST, FOLLOW, PREDICT) needed to build a deterministic
//! top-down LL(1) parse table, plus a lazy leftmost-derivation explorer.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        DERIVAR CORE                        │
//! ├────────────────────────────────────────────────────────────┤
//! │  Builder   →   Factory    →   Grammar    →   Analyses      │
//! │  staging       validation     frozen CFG     EMPTY/FIRST/  │
//! │                + freeze       + rule groups  FOLLOW/PREDICT│
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! A caller stages terminals, rules, and a start symbol in a
//! [`grammar::GrammarBuilder`], freezes them through a
//! [`grammar::GrammarFactory`] (validation happens exactly there), and then
//! queries the immutable [`grammar::Grammar`] for rule sets, analysis
//! results, and leftmost derivations. Analyses are computed at most once
//! per grammar, on first demand, in dependency order.
//!
//! # Quick Start
//!
//! ```rust
//! use derivar::prelude::*;
//!
//! let mut builder = GrammarBuilder::new();
//! builder.add_terminal("a")?.add_terminal("b")?;
//! builder.add_rule("S -> a S b")?.add_rule("S -> ε")?;
//! builder.set_start("S")?;
//! let grammar = builder.build(&GrammarFactory::standard())?;
//!
//! let rule: Rule = "S -> ε".parse()?;
//! assert_eq!(grammar.predict(&rule)?.to_string(), "{$ b}");
//! assert!(grammar.ll1_conflicts()?.is_empty());
//! # Ok::<(), derivar::error::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`symbol`] - Atomic grammar symbols and the ε/$ sentinels
//! - [`set`] - Immutable-value mathematical sets, the analysis currency
//! - [`form`] - Sentential forms (epsilon-free symbol sequences)
//! - [`rule`] - Production rules and their canonical text syntax
//! - [`grammar`] - Builder, factory, frozen grammar, derivation explorer
//! - [`analysis`] - EMPTY/FIRST/FOLLOW/PREDICT computation and caching
//! - [`error`] - Error and result types

#![forbid(unsafe_code)]

pub mod analysis;
pub mod error;
pub mod form;
pub mod grammar;
pub mod rule;
pub mod set;
pub mod symbol;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::analysis::{Analysis, AnalysisKind, Ll1Conflict};
    pub use crate::form::SententialForm;
    pub use crate::grammar::{Grammar, GrammarBuilder, GrammarFactory};
    pub use crate::rule::Rule;
    pub use crate::set::Set;
    pub use crate::symbol::Symbol;
    pub use crate::{Error, Result};
}
