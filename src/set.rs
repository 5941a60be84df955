//! Mathematical value sets
//!
//! [`Set`] is the uniform currency type for every analysis result: an
//! unordered, deduplicated container with content-based equality and pure
//! `union`/`intersect` operations that return new sets. It is backed by a
//! `BTreeSet` so iteration and rendering are deterministic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An immutable-value mathematical set
///
/// Equality is set equality: insertion order and duplicate insertion are
/// irrelevant. The empty set renders as `∅`, everything else as a brace
/// group, e.g. `{a b}`.
///
/// ```
/// use derivar::set::Set;
///
/// let ab: Set<&str> = ["a", "b", "a"].into_iter().collect();
/// let ba: Set<&str> = ["b", "a"].into_iter().collect();
/// assert_eq!(ab, ba);
/// assert_eq!(ab.to_string(), "{a b}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Set<T: Ord> {
    items: BTreeSet<T>,
}

impl<T: Ord> Set<T> {
    /// The empty set
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }

    /// A set holding exactly one value
    pub fn singleton(value: T) -> Self {
        Self {
            items: BTreeSet::from_iter([value]),
        }
    }

    /// Number of distinct elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this is the empty set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Membership test
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Iterate the elements in their natural order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Ord + Clone> Set<T> {
    /// The union of this set and `other`, as a new set
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            items: self.items.union(&other.items).cloned().collect(),
        }
    }

    /// The intersection of this set and `other`, as a new set
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            items: self.items.intersection(&other.items).cloned().collect(),
        }
    }

    /// The union of every set produced by `sets`
    pub fn union_all(sets: impl IntoIterator<Item = Self>) -> Self {
        Self {
            items: sets.into_iter().flat_map(|s| s.items).collect(),
        }
    }
}

impl<T: Ord> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::collections::btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::collections::btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Ord + std::fmt::Display> std::fmt::Display for Set<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.items.is_empty() {
            return f.write_str("∅");
        }

        f.write_str("{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}
