//! Maybe type - a value or its absence.
//!
//! `Maybe<T>` is either `Present(T)` or `Absent`. Absence carries no
//! diagnostic payload: use it where "missing" is an expected outcome, and
//! reach for [`Outcome`](super::Outcome) when the cause of a failure matters.
//!
//! The only way to get a value out is to handle both variants, either with a
//! `match` or with [`Maybe::fold`].
//!
//! # Examples
//!
//! ```rust
//! use forkable::control::Maybe;
//!
//! let missing: Maybe<i32> = Maybe::from_nullable(None);
//! assert_eq!(missing.fold(|| 0, |x| x), 0);
//!
//! let total = Maybe::present(3)
//!     .map(|x| x * 2)
//!     .chain(|x| if x > 5 { Maybe::present(x + 1) } else { Maybe::absent() });
//! assert_eq!(total, Maybe::present(7));
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that may be absent.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Maybe::of(a).chain(f) == f(a)`
/// 2. **Right Identity**: `m.chain(Maybe::of) == m`
/// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value.
    #[default]
    Absent,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Wraps a value. Same as [`Maybe::present`].
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// The empty container.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Converts a possibly-missing value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(1)), Maybe::present(1));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::absent());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Present)
    }

    /// Runs `function`, yielding `Absent` if it panics.
    ///
    /// The panic payload is discarded. Use
    /// [`Outcome::attempt`](super::Outcome::attempt) when the cause matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Maybe;
    ///
    /// assert_eq!(Maybe::attempt(|| 42), Maybe::present(42));
    /// assert_eq!(Maybe::<i32>::attempt(|| panic!("boom")), Maybe::absent());
    /// ```
    pub fn attempt<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        catch_unwind(AssertUnwindSafe(function)).map_or(Self::Absent, Self::Present)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Present`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` for `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the present value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Feeds the present value into a function that may itself be absent.
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Collapses the container. Exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Maybe;
    ///
    /// let label = Maybe::present(3).fold(|| "none".to_string(), |n| n.to_string());
    /// assert_eq!(label, "3");
    /// ```
    #[inline]
    pub fn fold<U, A, P>(self, on_absent: A, on_present: P) -> U
    where
        A: FnOnce() -> U,
        P: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Returns `self` when present, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).alt(Maybe::present(2)), Maybe::present(1));
    /// assert_eq!(Maybe::absent().alt(Maybe::present(2)), Maybe::present(2));
    /// ```
    #[inline]
    pub fn alt(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns the present value or computes a fallback.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Returns the present value or `default`.
    #[inline]
    pub fn with_default(self, default: T) -> T {
        self.get_or_else(|| default)
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.fold(|| None, Some)
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Turns a sequence of `Maybe`s into a `Maybe` of all their values.
    ///
    /// Scanning stops at the first `Absent`; elements after it are never
    /// pulled from the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Maybe;
    ///
    /// let all = Maybe::combine_all(vec![Maybe::present(1), Maybe::present(2)]);
    /// assert_eq!(all, Maybe::present(vec![1, 2]));
    ///
    /// let gap = Maybe::combine_all(vec![Maybe::present(1), Maybe::absent()]);
    /// assert_eq!(gap, Maybe::absent());
    /// ```
    pub fn combine_all<I>(items: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        for item in items {
            match item {
                Self::Present(value) => values.push(value),
                Self::Absent => return Maybe::Absent,
            }
        }
        Maybe::Present(values)
    }

    /// Maps every input through `function` and combines the results.
    pub fn traverse<A, I, F>(items: I, function: F) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        Self::combine_all(items.into_iter().map(function))
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Maybe::Present(b), Maybe::Present(c)) => {
                Maybe::Present(function(a, b, c))
            }
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.chain(function)
    }
}
