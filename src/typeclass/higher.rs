//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] uses a GAT to name "the same container, holding a
//! different type", which is what `fmap`, `flat_map` and friends return.
//!
//! # Example
//!
//! ```rust
//! use forkable::control::Maybe;
//! use forkable::typeclass::TypeConstructor;
//!
//! fn absent_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Maybe<String> = absent_like(Maybe::present(42));
//! assert!(absent.is_absent());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Outcome<i32, E>`, `WithType<String>` is `Outcome<String, E>`; the
    /// error parameter is carried along unchanged.
    type WithType<B>: TypeConstructor<Inner = B>;
}
