//! Bridge from error-first callback APIs.

use super::{Settle, Task};
use crate::control::Error;

/// The completion handle passed to a [`Task::from_callback`] operation.
///
/// Mirrors the `(error, value)` convention of callback-style APIs: an error
/// wins over a value, and a call carrying neither fails with
/// [`Error::EmptyCallback`].
pub struct Done<T, E> {
    settle: Settle<T, E>,
}

impl<T, E> Done<T, E>
where
    E: From<Error>,
{
    /// Completes the fork from an `(error, value)` pair.
    pub fn call(self, error: Option<E>, value: Option<T>) {
        match (error, value) {
            (Some(error), _) => self.settle.fail(error),
            (None, Some(value)) => self.settle.succeed(value),
            (None, None) => {
                tracing::debug!("callback completed without an error or a value");
                self.settle.fail(E::from(Error::EmptyCallback));
            }
        }
    }

    /// Completes the fork with a value.
    #[inline]
    pub fn ok(self, value: T) {
        self.settle.succeed(value);
    }

    /// Completes the fork with an error.
    #[inline]
    pub fn err(self, error: E) {
        self.settle.fail(error);
    }

    /// Completes the fork from a `Result`.
    #[inline]
    pub fn complete(self, result: Result<T, E>) {
        self.settle.complete(result);
    }
}

impl<T, E> std::fmt::Debug for Done<T, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Done").finish_non_exhaustive()
    }
}

impl<T: Send + 'static, E: Send + From<Error> + 'static> Task<T, E> {
    /// Builds a task from a function that reports through a [`Done`] handle.
    ///
    /// `operation` runs once per fork. The handle can be moved to another
    /// thread and completed there; the fork stays pending until it is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Error;
    /// use forkable::effect::{ForkState, Task};
    ///
    /// let answered: Task<i32> = Task::from_callback(|done| done.call(None, Some(42)));
    /// assert_eq!(answered.fork_now(), ForkState::Succeeded(42));
    ///
    /// let silent: Task<i32> = Task::from_callback(|done| done.call(None, None));
    /// assert_eq!(silent.fork_now(), ForkState::Failed(Error::EmptyCallback));
    /// ```
    pub fn from_callback<F>(operation: F) -> Self
    where
        F: Fn(Done<T, E>) + Send + Sync + 'static,
    {
        Self::new(move |settle| operation(Done { settle }))
    }
}
