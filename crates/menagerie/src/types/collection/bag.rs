use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Bag
///
/// Multiset over value-equal elements: a mapping from distinct value to
/// occurrence count. Iteration follows the value ordering, so output
/// built from a bag is deterministic.
///
/// Counts are always >= 1; the insert surface is append-only.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bag<T: Ord>(BTreeMap<T, usize>);

impl<T: Ord> Bag<T> {
    /// Create an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        *self.0.entry(value).or_insert(0) += 1;
    }

    /// Occurrences of `value` currently in the bag.
    #[must_use]
    pub fn occurrences_of(&self, value: &T) -> usize {
        self.0.get(value).copied().unwrap_or(0)
    }

    /// Total cardinality, counting every occurrence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of distinct values.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bag holds no occurrences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sub-bag of the values occurring at least twice.
    #[must_use]
    pub fn duplicates(&self) -> Self
    where
        T: Clone,
    {
        Self(
            self.0
                .iter()
                .filter(|(_, count)| **count >= 2)
                .map(|(value, count)| (value.clone(), *count))
                .collect(),
        )
    }

    /// Iterate `(value, count)` pairs in value order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.0.iter().map(|(value, count)| (value, *count))
    }
}

impl<T: Ord> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        for value in iter {
            bag.insert(value);
        }
        bag
    }
}

///
/// TESTS
///
