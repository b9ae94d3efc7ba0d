//! # forkable
//!
//! Cold, forkable tasks and the small value containers they compose with.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe), [`Outcome`](control::Outcome)
//!   and [`List`](control::List), immutable and eagerly evaluated
//! - **Tasks**: [`Task`](effect::Task), a deferred computation that runs
//!   only when forked and runs afresh on every fork
//! - **Type Classes**: Functor, Applicative and Monad for the containers
//! - **Bridges**: from nullable values, panicking closures, callbacks and
//!   futures into tasks, and from tasks back into futures
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe`, `Outcome`, `List` and the library `Error`
//! - `effect`: `Task` and its synchronous bridges
//! - `async`: Future bridges backed by tokio (enabled by default)
//! - `serde`: Serialize and deserialize the containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use forkable::prelude::*;
//!
//! let lookup = |id: u32| -> Task<String> {
//!     Task::from_nullable((id == 7).then(|| "seven".to_string()))
//! };
//!
//! let found = Task::resolve(7).chain(lookup).map(|name| name.len());
//! assert_eq!(found.fork_now(), ForkState::Succeeded(5));
//!
//! let missing = Task::resolve(8).chain(lookup);
//! assert_eq!(missing.fork_now(), ForkState::Failed(Error::Missing));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use forkable::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
