//! Type class traits shared by the containers of this crate.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing dependent computations
//!
//! [`Maybe`](crate::control::Maybe) and [`Outcome`](crate::control::Outcome)
//! implement all four. `Task` mirrors the same operations as inherent methods
//! because its closures carry `Send + Sync` bounds the traits cannot state.
//!
//! # Examples
//!
//! ```rust
//! use forkable::control::Outcome;
//! use forkable::typeclass::{Applicative, Functor, Monad};
//!
//! let total: Outcome<i32> = Outcome::success(2)
//!     .fmap(|n| n * 10)
//!     .flat_map(|n| Outcome::success(n + 1))
//!     .map2(Outcome::success(100), |a, b| a + b);
//! assert_eq!(total, Outcome::success(121));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
