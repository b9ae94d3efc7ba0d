//! Outcome type - a computed value or the error that prevented it.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. It plays the same
//! role as `std::result::Result` but exposes the vocabulary shared by every
//! container in this crate (`map`, `chain`, `fold`, `alt`, `combine_all`),
//! and it converts to and from `Result` for free.
//!
//! The error parameter defaults to [`Error`](super::Error). Errors supplied by
//! the caller are never wrapped or rewritten.
//!
//! # Examples
//!
//! ```rust
//! use forkable::control::{Error, Outcome};
//!
//! let parsed: Outcome<i32> = Outcome::try_catch(|| {
//!     "42".parse::<i32>().map_err(|error| Error::message(error.to_string()))
//! });
//! assert_eq!(parsed.map(|n| n + 1), Outcome::success(43));
//!
//! let combined = Outcome::combine_all(vec![
//!     Outcome::success(3),
//!     Outcome::failure("bad"),
//!     Outcome::success(6),
//! ]);
//! assert_eq!(combined, Outcome::failure("bad"));
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::error::Error;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value or an error.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error, [`Error`] unless stated otherwise
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Outcome::of(a).chain(f) == f(a)`
/// 2. **Right Identity**: `m.chain(Outcome::of) == m`
/// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E = Error> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a value. Same as [`Outcome::success`].
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Converts a possibly-missing value, failing with [`Error::Missing`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::<i32>::from_nullable(Some(2)), Outcome::success(2));
    /// assert_eq!(Outcome::<i32>::from_nullable(None), Outcome::failure(Error::Missing));
    /// ```
    pub fn from_nullable(value: Option<T>) -> Self
    where
        E: From<Error>,
    {
        value.map_or_else(|| Self::Failure(E::from(Error::Missing)), Self::Success)
    }

    /// Runs `function`, converting a panic into [`Error::Panicked`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::{Error, Outcome};
    ///
    /// let caught: Outcome<i32> = Outcome::attempt(|| panic!("boom"));
    /// assert_eq!(caught, Outcome::failure(Error::Panicked("boom".to_string())));
    /// ```
    pub fn attempt<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
        E: From<Error>,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(E::from(Error::from_panic(payload.as_ref()))),
        }
    }

    /// Runs a fallible closure; an `Err` becomes `Failure` untouched.
    #[inline]
    pub fn try_catch<F>(function: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        function().into()
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the success value; failures pass through unchanged.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the error; successes pass through unchanged.
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Feeds the success value into a function that may itself fail.
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Collapses the container. Exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::{Error, Outcome};
    ///
    /// let failed: Outcome<i32> = Outcome::failure(Error::message("nope"));
    /// assert_eq!(failed.fold(|error| error.to_string(), |n| n.to_string()), "nope");
    /// ```
    #[inline]
    pub fn fold<U, L, R>(self, on_failure: L, on_success: R) -> U
    where
        L: FnOnce(E) -> U,
        R: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns `self` when successful, otherwise `other`.
    #[inline]
    pub fn alt(self, other: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => other,
        }
    }

    /// Returns the success value or computes a fallback from the error.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn with_default(self, default: T) -> T {
        self.get_or_else(|_| default)
    }

    /// Converts into `std::result::Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.fold(Err, Ok)
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Turns a sequence of outcomes into an outcome of all their values.
    ///
    /// Scanning is in order and stops at the first failure, which is returned
    /// as is; later elements are never pulled from the iterator.
    pub fn combine_all<I>(items: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = Vec::new();
        for item in items {
            match item {
                Self::Success(value) => values.push(value),
                Self::Failure(error) => return Outcome::Failure(error),
            }
        }
        Outcome::Success(values)
    }

    /// Maps every input through `function` and combines the results.
    pub fn traverse<A, I, F>(items: I, function: F) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        Self::combine_all(items.into_iter().map(function))
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<B, E>,
        third: Outcome<C, E>,
        function: F,
    ) -> Outcome<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Outcome::Success(b), Outcome::Success(c)) => {
                Outcome::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (_, Outcome::Failure(error), _)
            | (_, _, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.chain(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct Tagged(u32);

    #[rstest]
    fn combine_all_returns_first_failure_untouched() {
        let combined = Outcome::combine_all(vec![
            Outcome::success(3),
            Outcome::success(4),
            Outcome::failure(Tagged(1)),
            Outcome::success(6),
            Outcome::failure(Tagged(2)),
        ]);
        assert_eq!(combined, Outcome::Failure(Tagged(1)));
    }

    #[rstest]
    fn combine_all_collects_in_order() {
        let combined: Outcome<Vec<i32>, Tagged> =
            Outcome::combine_all((1..=4).map(Outcome::success));
        assert_eq!(combined, Outcome::Success(vec![1, 2, 3, 4]));
    }

    #[rstest]
    fn from_nullable_fails_with_missing() {
        let outcome: Outcome<i32> = Outcome::from_nullable(None);
        assert_eq!(outcome, Outcome::Failure(Error::Missing));
    }

    #[rstest]
    fn attempt_wraps_panic_message() {
        let outcome: Outcome<i32> = Outcome::attempt(|| panic!("{}", "formatted"));
        assert_eq!(outcome, Outcome::Failure(Error::Panicked("formatted".to_string())));
    }

    #[rstest]
    fn try_catch_keeps_caller_error() {
        let outcome: Outcome<i32, Tagged> = Outcome::try_catch(|| Err(Tagged(9)));
        assert_eq!(outcome, Outcome::Failure(Tagged(9)));
    }

    #[rstest]
    fn chain_never_calls_function_after_failure() {
        let failed: Outcome<i32, Tagged> = Outcome::failure(Tagged(0));
        let result = failed.chain(|_| -> Outcome<i32, Tagged> { panic!("must not run") });
        assert_eq!(result, Outcome::Failure(Tagged(0)));
    }

    #[rstest]
    fn map_err_only_touches_failures() {
        let failed: Outcome<i32, u32> = Outcome::failure(2);
        assert_eq!(failed.map_err(|code| code * 10), Outcome::Failure(20));
        let succeeded: Outcome<i32, u32> = Outcome::success(1);
        assert_eq!(succeeded.map_err(|code| code * 10), Outcome::Success(1));
    }

    #[rstest]
    #[case(Outcome::Success(1), Outcome::Success(2), Outcome::Success(1))]
    #[case(Outcome::Failure("a"), Outcome::Success(2), Outcome::Success(2))]
    #[case(Outcome::Failure("a"), Outcome::Failure("b"), Outcome::Failure("b"))]
    fn alt_prefers_self_when_successful(
        #[case] left: Outcome<i32, &'static str>,
        #[case] right: Outcome<i32, &'static str>,
        #[case] expected: Outcome<i32, &'static str>,
    ) {
        assert_eq!(left.alt(right), expected);
    }

    #[rstest]
    fn map2_reports_leftmost_failure() {
        let left: Outcome<i32, &str> = Outcome::failure("left");
        let right: Outcome<i32, &str> = Outcome::failure("right");
        assert_eq!(left.map2(right, |a, b| a + b), Outcome::Failure("left"));
    }

    #[rstest]
    fn result_conversions() {
        let outcome: Outcome<i32, &str> = Ok(1).into();
        assert_eq!(outcome, Outcome::Success(1));
        let result: Result<i32, &str> = Outcome::Failure("x").into();
        assert_eq!(result, Err("x"));
    }

    #[rstest]
    fn fallbacks() {
        let failed: Outcome<usize, &str> = Outcome::failure("four");
        assert_eq!(failed.get_or_else(str::len), 4);
        assert_eq!(Outcome::<usize, &str>::failure("x").with_default(7), 7);
        assert!(Outcome::<usize, &str>::success(1).is_success());
    }
}
