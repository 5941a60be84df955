//! Sentential forms
//!
//! A [`SententialForm`] is an immutable ordered sequence of symbols over
//! terminals ∪ nonterminals, the strings a derivation rewrites. Epsilon
//! symbols are filtered out at construction, so the canonical empty form
//! has length 0 no matter how many epsilons were concatenated into it, and
//! two forms are equal iff their non-epsilon symbol sequences match in
//! order.
//!
//! Indexing and slicing out of bounds clamp (to the epsilon symbol and the
//! empty form respectively) rather than failing; that keeps suffix
//! computations at rule boundaries free of edge-case branches.

use std::ops::{Add, Range};

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// An ordered, epsilon-free sequence of grammar symbols
///
/// ```
/// use derivar::form::SententialForm;
/// use derivar::symbol::Symbol;
///
/// let form = SententialForm::new(["a".into(), Symbol::epsilon(), "S".into()]);
/// assert_eq!(form.len(), 2);
/// assert_eq!(form.to_string(), "a S");
/// assert_eq!(SententialForm::empty().to_string(), "ε");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SententialForm {
    symbols: Vec<Symbol>,
}

impl SententialForm {
    /// Build a form from symbols, dropping every epsilon
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            symbols: symbols.into_iter().filter(|s| !s.is_epsilon()).collect(),
        }
    }

    /// The canonical empty form
    #[must_use]
    pub fn empty() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Number of symbols in the form
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether this is the empty form
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol at `index`, or the epsilon sentinel when out of bounds
    #[must_use]
    pub fn at(&self, index: usize) -> Symbol {
        self.symbols
            .get(index)
            .cloned()
            .unwrap_or_else(Symbol::epsilon)
    }

    /// The sub-form over `range`, clamped to the form's bounds
    ///
    /// A range that is empty after clamping (including one that starts past
    /// the end) yields the empty form.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        let start = range.start.min(self.symbols.len());
        let end = range.end.min(self.symbols.len());
        if start >= end {
            return Self::empty();
        }

        Self {
            symbols: self.symbols[start..end].to_vec(),
        }
    }

    /// The suffix of symbols strictly after `index`
    #[must_use]
    pub fn suffix_after(&self, index: usize) -> Self {
        self.slice(index.saturating_add(1)..self.symbols.len())
    }

    /// Concatenate any number of forms into one
    pub fn concat(forms: impl IntoIterator<Item = Self>) -> Self {
        Self::new(forms.into_iter().flat_map(|f| f.symbols))
    }

    /// Iterate the symbols in order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Index of the first symbol matching `predicate`
    pub fn first_index_of(&self, predicate: impl Fn(&Symbol) -> bool) -> Option<usize> {
        self.symbols.iter().position(predicate)
    }
}

impl Add for SententialForm {
    type Output = SententialForm;

    fn add(mut self, rhs: SententialForm) -> SententialForm {
        self.symbols.extend(rhs.symbols);
        self
    }
}

impl Add<Symbol> for SententialForm {
    type Output = SententialForm;

    fn add(mut self, rhs: Symbol) -> SententialForm {
        if !rhs.is_epsilon() {
            self.symbols.push(rhs);
        }
        self
    }
}

impl FromIterator<Symbol> for SententialForm {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a SententialForm {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl std::fmt::Display for SententialForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.symbols.is_empty() {
            return f.write_str("ε");
        }

        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
