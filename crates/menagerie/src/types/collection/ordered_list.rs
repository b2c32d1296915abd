use derive_more::Deref;
use serde::{Deserialize, Serialize};

///
/// OrderedList
///
/// Ordered, duplicate-friendly list used for many-cardinality fields.
/// Preserves insertion order and serializes identically to `Vec<T>`.
///
/// Mutation is append-only; `OrderedList` does not expose `DerefMut`
/// to avoid accidental bypass of list semantics.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OrderedList<T>(Vec<T>);

impl<T> OrderedList<T> {
    /// Create an empty ordered list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build an ordered list from an existing vector.
    #[must_use]
    pub const fn from_vec(values: Vec<T>) -> Self {
        Self(values)
    }

    /// Return the number of items in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over the list.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Return the item at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Append an item to the list.
    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T> From<OrderedList<T>> for Vec<T> {
    fn from(values: OrderedList<T>) -> Self {
        values.0
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

///
/// TESTS
///
