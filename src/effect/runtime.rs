//! Locating the runtime that future-backed tasks are spawned onto.
//!
//! The library never starts a runtime or a worker thread of its own.
//! [`Task::from_future`](super::Task::from_future) spawns onto the tokio
//! runtime that is current on the forking thread, so tracing context and
//! runtime settings are inherited. Forking such a task on a thread with no
//! runtime fails the fork with [`Error::NoRuntime`].
//!
//! # Examples
//!
//! ```rust
//! use forkable::control::Error;
//! use forkable::effect::runtime;
//!
//! assert_eq!(runtime::current().err(), Some(Error::NoRuntime));
//!
//! let owned = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let _guard = owned.enter();
//! assert!(runtime::current().is_ok());
//! ```

use tokio::runtime::Handle;

use crate::control::Error;

/// Returns the handle of the runtime current on this thread.
///
/// # Errors
///
/// Returns [`Error::NoRuntime`] when the thread is not inside a tokio
/// runtime.
#[inline]
pub fn current() -> Result<Handle, Error> {
    Handle::try_current().map_err(|_| {
        tracing::warn!("task forked outside a tokio runtime");
        Error::NoRuntime
    })
}
