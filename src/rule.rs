//! Production rules
//!
//! A [`Rule`] is one rewrite rule `HEAD -> s1 s2 … sn` (or `HEAD -> ε` for
//! an empty body). Rules parse from and render to a canonical text syntax:
//! the head matches `[A-Z][A-Z0-9'_-]*`, the body is whitespace-separated
//! tokens matching `[a-zA-Z0-9'_-]+`, or the single epsilon glyph.
//! Rendering a parsed rule reproduces the canonical input exactly.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::form::SententialForm;
use crate::symbol::Symbol;

static RULE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<head>[A-Z][A-Z0-9'_-]*)\s*->\s*(?<body>ε|[a-zA-Z0-9'_ -]+)$")
        .expect("rule pattern is a valid regex")
});

/// A single rewrite rule: a head symbol and an epsilon-free body
///
/// ```
/// use derivar::rule::Rule;
///
/// let rule: Rule = "S -> a S b".parse().unwrap();
/// assert_eq!(rule.head().name(), "S");
/// assert_eq!(rule.to_string(), "S -> a S b");
///
/// let empty: Rule = "S -> ε".parse().unwrap();
/// assert!(empty.body().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rule {
    head: Symbol,
    body: SententialForm,
}

impl Rule {
    /// Create a rule; epsilon symbols in the body are stripped
    pub fn new(head: Symbol, body: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            head,
            body: SententialForm::new(body),
        }
    }

    /// The rule's head symbol
    #[must_use]
    pub fn head(&self) -> &Symbol {
        &self.head
    }

    /// The rule's body; empty for an epsilon rule
    #[must_use]
    pub fn body(&self) -> &SententialForm {
        &self.body
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let captures = RULE_PATTERN
            .captures(input)
            .ok_or_else(|| Error::MalformedRule(input.to_string()))?;

        let head = Symbol::new(&captures["head"]);
        let body = captures["body"]
            .split_whitespace()
            .map(Symbol::new)
            .collect::<SententialForm>();

        Ok(Self { head, body })
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.head, self.body)
    }
}
