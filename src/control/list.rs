//! List type - an ordered, homogeneous sequence.
//!
//! `List<T>` is a thin wrapper over `Vec<T>` that speaks the same vocabulary
//! as the other containers. Insertion order is significant and duplicates
//! are allowed. Operations take `self` and return a new list.
//!
//! # Examples
//!
//! ```rust
//! use forkable::control::{List, Maybe};
//!
//! let words = List::from_vec(vec!["a", "bb", "ccc"]);
//! let total = words.clone().map(str::len).fold(0, |sum, n| sum + n);
//! assert_eq!(total, 6);
//!
//! assert_eq!(words.head(), Maybe::present("a"));
//! assert_eq!(words.tail().extract(), vec!["bb", "ccc"]);
//! ```

use super::maybe::Maybe;

/// An ordered sequence of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<T> {
    elements: Vec<T>,
}

impl<T> List<T> {
    /// A single-element list.
    #[inline]
    pub fn of(value: T) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// The empty list.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Wraps an existing vector, keeping its order.
    #[inline]
    pub const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Transforms every element.
    pub fn map<U, F>(self, function: F) -> List<U>
    where
        F: FnMut(T) -> U,
    {
        List::from_vec(self.elements.into_iter().map(function).collect())
    }

    /// Maps every element to a list and concatenates the results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::List;
    ///
    /// let pairs = List::from_vec(vec![1, 2]).chain(|n| List::from_vec(vec![n, n * 10]));
    /// assert_eq!(pairs.extract(), vec![1, 10, 2, 20]);
    /// ```
    pub fn chain<U, F>(self, mut function: F) -> List<U>
    where
        F: FnMut(T) -> List<U>,
    {
        List::from_vec(
            self.elements
                .into_iter()
                .flat_map(|element| function(element).elements)
                .collect(),
        )
    }

    /// Left fold from `initial`.
    pub fn fold<U, F>(self, initial: U, function: F) -> U
    where
        F: FnMut(U, T) -> U,
    {
        self.elements.into_iter().fold(initial, function)
    }

    /// Returns the underlying vector.
    #[inline]
    pub fn extract(self) -> Vec<T> {
        self.elements
    }

    /// Same as [`List::extract`].
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Borrows the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a new list with `value` added at the end.
    pub fn append(mut self, value: T) -> Self {
        self.elements.push(value);
        self
    }

    /// Iterates over borrowed elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Clone> List<T> {
    /// The first element, if any.
    pub fn head(&self) -> Maybe<T> {
        Maybe::from_nullable(self.elements.first().cloned())
    }

    /// Everything after the first element; empty for an empty list.
    pub fn tail(&self) -> Self {
        Self::from_vec(self.elements.iter().skip(1).cloned().collect())
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
