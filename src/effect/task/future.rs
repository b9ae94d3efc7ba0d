//! Bridges between tasks and Rust futures.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use pin_project_lite::pin_project;

use super::{Settle, Task};
use crate::control::Error;
use crate::effect::runtime;

pin_project! {
    /// A future that resolves to the settlement of one fork of a task.
    ///
    /// Created by awaiting a [`Task`] or by [`Task::to_future`]. The fork
    /// starts when the future is created, not when it is first polled.
    /// If the fork drops its continuation without settling, the future
    /// resolves to [`Error::Abandoned`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct TaskFuture<T, E> {
        #[pin]
        receiver: oneshot::Receiver<Result<T, E>>,
    }
}

impl<T, E: From<Error>> Future for TaskFuture<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().receiver.poll(context) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(oneshot::Canceled)) => {
                tracing::warn!("task fork dropped its continuation without settling");
                Poll::Ready(Err(E::from(Error::Abandoned)))
            }
        }
    }
}

impl<T: Send + 'static, E: Send + 'static> Task<T, E> {
    /// Builds a task from a future factory.
    ///
    /// Every fork calls `factory` for a fresh future and spawns it on the
    /// tokio runtime current on the forking thread; the future's output
    /// settles the fork. Building the task creates no future.
    ///
    /// A fork on a thread with no runtime fails with [`Error::NoRuntime`]
    /// and never calls `factory`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Error;
    /// use forkable::effect::{ForkState, Task};
    ///
    /// let task: Task<u32> = Task::from_future(|| async { Ok::<_, Error>(7) }).map(|x| x * 6);
    /// assert_eq!(task.fork_now(), ForkState::Failed(Error::NoRuntime));
    ///
    /// let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// assert_eq!(runtime.block_on(async { task.await }), Ok(42));
    /// ```
    pub fn from_future<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: From<Error>,
    {
        Self::new(move |settle: Settle<T, E>| match runtime::current() {
            Ok(handle) => {
                let future = factory();
                tracing::trace!("spawning future for task fork");
                drop(handle.spawn(async move {
                    settle.complete(future.await);
                }));
            }
            Err(error) => settle.fail(E::from(error)),
        })
    }

    /// Forks a clone of this task and returns a future of its settlement.
    ///
    /// The task itself stays usable; awaiting the task directly is the same
    /// operation when it is no longer needed.
    pub fn to_future(&self) -> TaskFuture<T, E>
    where
        E: From<Error>,
    {
        self.clone().into_future()
    }
}

impl<T: Send + 'static, E: From<Error> + Send + 'static> IntoFuture for Task<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = TaskFuture<T, E>;

    /// Forks the task once, settling the returned future exactly once.
    fn into_future(self) -> Self::IntoFuture {
        let (sender, receiver) = oneshot::channel();
        self.run(Settle::new(move |result| {
            if sender.send(result).is_err() {
                tracing::trace!("task settled after its future was dropped");
            }
        }));
        TaskFuture { receiver }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::ForkState;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[rstest]
    #[tokio::test]
    async fn awaiting_resolves_with_value() {
        let task: Task<i32> = Task::resolve(1).map(|x| x + 1);
        assert_eq!(task.await, Ok(2));
    }

    #[rstest]
    #[tokio::test]
    async fn awaiting_rejects_with_error() {
        let task: Task<i32> = Task::reject(Error::message("nope"));
        assert_eq!(task.await, Err(Error::message("nope")));
    }

    #[rstest]
    #[tokio::test]
    async fn abandoned_fork_reports_abandoned() {
        let task: Task<i32> = Task::new(drop);
        assert_eq!(task.await, Err(Error::Abandoned));
    }

    #[rstest]
    #[tokio::test]
    async fn from_future_is_cold_and_refreshes_per_fork() {
        let created = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&created);
        let task: Task<usize> = Task::from_future(move || {
            let index = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                tokio::time::sleep(Duration::from_millis(1)).await;
                Ok(index)
            }
        });

        assert_eq!(created.load(Ordering::SeqCst), 0);
        assert_eq!(task.to_future().await, Ok(0));
        assert_eq!(task.to_future().await, Ok(1));
        assert_eq!(created.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn from_future_failure_passes_through() {
        let task: Task<i32> = Task::from_future(|| async { Err(Error::message("refused")) });
        assert_eq!(task.await, Err(Error::message("refused")));
    }

    #[rstest]
    fn fork_without_runtime_fails_and_skips_factory() {
        let created = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&created);
        let task: Task<i32> = Task::from_future(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(1) }
        });

        assert_eq!(task.fork_now(), ForkState::Failed(Error::NoRuntime));
        assert_eq!(created.load(Ordering::SeqCst), 0);
    }
}
