//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with the ability to lift a plain value into
//! the context (`pure`) and to combine several independent contexts
//! (`map2`, `map3`, `apply`). Combination is left-biased: when more than one
//! input is empty or failed, the leftmost one decides the result.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                        // identity
//! pure(f).apply(pure(x)) == pure(f(x))             // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)      // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use forkable::control::Maybe;
//! use forkable::typeclass::Applicative;
//!
//! let sum = Maybe::present(1).map2(Maybe::present(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::present(3));
//!
//! let missing = Maybe::present(1).map2(Maybe::<i32>::absent(), |x, y| x + y);
//! assert_eq!(missing, Maybe::absent());
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Maybe;
    /// use forkable::typeclass::Applicative;
    ///
    /// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(lifted, Maybe::present(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in the context to a value held in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Outcome;
    /// use forkable::typeclass::Applicative;
    ///
    /// let function: Outcome<fn(i32) -> i32> = Outcome::Success(|x| x + 1);
    /// assert_eq!(function.apply(Outcome::success(5)), Outcome::success(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}
