//! Deferred, forkable computations.
//!
//! - [`Task`]: A cold computation that succeeds with `T` or fails with `E`
//! - [`Settle`]: The one-shot continuation a task's operation settles
//! - [`Done`]: The `(error, value)` handle used by [`Task::from_callback`]
//! - [`ForkState`]: What [`Task::fork_now`] observed
//! - [`TaskFuture`]: A fork of a task viewed as a Rust future (feature `async`)
//!
//! # Bridges
//!
//! | Source                 | Into a task               |
//! |------------------------|---------------------------|
//! | `Option<T>`            | [`Task::from_nullable`]   |
//! | panicking closure      | [`Task::attempt`]         |
//! | `Fn() -> Result<T, E>` | [`Task::try_catch`]       |
//! | side effect            | [`Task::lift_sync`]       |
//! | `Maybe<T>`             | [`Task::from_maybe`]      |
//! | `Outcome<T, E>`        | [`Task::from_outcome`]    |
//! | callback API           | [`Task::from_callback`]   |
//! | future factory         | `Task::from_future`       |
//!
//! Going the other way, a task is awaited directly (`task.await`) or
//! observed synchronously with [`Task::fork_now`].
//!
//! # Examples
//!
//! ```rust
//! use forkable::effect::{ForkState, Task};
//!
//! let parsed: Task<Vec<u8>> = Task::traverse(["1", "2", "3"], |text| {
//!     Task::try_catch(move || text.parse::<u8>().map_err(|error| error.to_string().into()))
//! });
//! assert_eq!(parsed.fork_now(), ForkState::Succeeded(vec![1, 2, 3]));
//! ```

mod task;

#[cfg(feature = "async")]
pub mod runtime;

pub use task::{Done, ForkState, Settle, Task};

#[cfg(feature = "async")]
pub use task::TaskFuture;

pub use crate::control::Error;
