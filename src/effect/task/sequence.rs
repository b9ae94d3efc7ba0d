//! Sequential combination of many tasks.
//!
//! The driver forks one task at a time. A task that settles before its
//! operation returns does not recurse into the next fork; the loop in
//! [`Driver::drive`] picks it up instead, so a long run of synchronous
//! tasks uses constant stack. A task that settles later (on another thread
//! or from a runtime) restarts the loop from its own continuation.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Settle, Task};

/// Whether the continuation or the loop is responsible for the next fork.
enum Step {
    /// The operation of the current task has not returned yet.
    Forking,
    /// The current task settled successfully before its operation returned.
    SettledInline,
    /// The loop has returned; the continuation drives the next fork.
    Detached,
}

struct Progress<T, E> {
    next: usize,
    values: Vec<T>,
    settle: Option<Settle<Vec<T>, E>>,
}

struct Driver<T, E> {
    tasks: Arc<[Task<T, E>]>,
    progress: Mutex<Progress<T, E>>,
}

impl<T: Send + 'static, E: Send + 'static> Driver<T, E> {
    fn start(tasks: Arc<[Task<T, E>]>, settle: Settle<Vec<T>, E>) {
        let driver = Arc::new(Self {
            progress: Mutex::new(Progress {
                next: 0,
                values: Vec::with_capacity(tasks.len()),
                settle: Some(settle),
            }),
            tasks,
        });
        Self::drive(&driver);
    }

    fn drive(driver: &Arc<Self>) {
        loop {
            let task = {
                let mut progress = driver.progress.lock();
                if let Some(task) = driver.tasks.get(progress.next) {
                    progress.next += 1;
                    task.clone()
                } else {
                    let values = std::mem::take(&mut progress.values);
                    let settle = progress.settle.take();
                    drop(progress);
                    if let Some(settle) = settle {
                        settle.succeed(values);
                    }
                    return;
                }
            };

            let step = Arc::new(Mutex::new(Step::Forking));
            let continuation_step = Arc::clone(&step);
            let continuation_driver = Arc::clone(driver);
            task.run(Settle::new(move |result: Result<T, E>| match result {
                Ok(value) => {
                    continuation_driver.progress.lock().values.push(value);
                    let mut step = continuation_step.lock();
                    if matches!(*step, Step::Forking) {
                        *step = Step::SettledInline;
                    } else {
                        drop(step);
                        Self::drive(&continuation_driver);
                    }
                }
                Err(error) => {
                    let settle = continuation_driver.progress.lock().settle.take();
                    if let Some(settle) = settle {
                        settle.fail(error);
                    }
                }
            }));

            let mut phase = step.lock();
            if matches!(*phase, Step::SettledInline) {
                continue;
            }
            *phase = Step::Detached;
            return;
        }
    }
}

impl<T: Send + 'static, E: Send + 'static> Task<T, E> {
    /// Runs the given tasks one after another and collects their values.
    ///
    /// Task N+1 is forked only after task N has succeeded. The first failure
    /// fails the whole task and the remaining tasks are never forked. An
    /// empty input succeeds with an empty vector. Synchronous inputs of any
    /// length are combined without growing the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::effect::{ForkState, Task};
    ///
    /// let all: Task<Vec<i32>> = Task::combine_all((1..=3).map(Task::resolve));
    /// assert_eq!(all.fork_now(), ForkState::Succeeded(vec![1, 2, 3]));
    /// ```
    pub fn combine_all<I>(tasks: I) -> Task<Vec<T>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        let tasks: Arc<[Self]> = tasks.into_iter().collect();
        Task::new(move |settle| Driver::start(Arc::clone(&tasks), settle))
    }

    /// Maps every item to a task and combines them with [`Task::combine_all`].
    ///
    /// `function` is applied to all items up front; only the forks are
    /// sequential.
    pub fn traverse<A, I, F>(items: I, function: F) -> Task<Vec<T>, E>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        Self::combine_all(items.into_iter().map(function))
    }
}
