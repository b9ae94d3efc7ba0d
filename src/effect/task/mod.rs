//! Task - a cold, continuation-based deferred computation.
//!
//! A [`Task<T, E>`] describes an operation that will eventually either
//! succeed with a `T` or fail with an `E`. Building a task performs no work.
//! Work happens only when the task is *forked*, and every fork is an
//! independent execution: nothing is memoized or shared between forks.
//!
//! # Representation
//!
//! A task is an immutable description: primitive operations that receive a
//! [`Settle`] handle, joined by the binds that `map`, `chain`, `fold` and
//! friends add. `Settle` owns one boxed `FnOnce(Result<T, E>)`, so a fork
//! can settle at most once and can never report both a success and a
//! failure. Every constructor in this crate settles exactly once per fork.
//!
//! Forking interprets the description with a loop, so pipelines hundreds of
//! thousands of steps deep (built in a loop or recursively) run in constant
//! stack.
//!
//! ```text
//! NotForked --fork--> Pending --settle--> Succeeded(T) | Failed(E)
//! ```
//!
//! Forking the same task again starts over from `NotForked`.
//!
//! # Composition
//!
//! `map`, `chain` and `fold` return a new task immediately and never run
//! anything. Within one pipeline, step N+1 starts only after step N has
//! settled, and a failure skips every remaining success handler until a
//! `fold` or `alt` recovers it.
//!
//! Combinators do not catch panics raised by the closures they are given.
//! [`Task::attempt`] is the opt-in bridge that turns a panic into a failure.
//!
//! # Examples
//!
//! ```rust
//! use forkable::effect::{ForkState, Task};
//!
//! let task: Task<i32> = Task::resolve(3)
//!     .chain(|x| Task::resolve(x * 2))
//!     .chain(|x| Task::resolve(x + 1));
//!
//! assert_eq!(task.fork_now(), ForkState::Succeeded(7));
//! ```
//!
//! ## Cold Evaluation
//!
//! ```rust
//! use forkable::effect::Task;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&runs);
//! let task: Task<usize> = Task::lift_sync(move || counter.fetch_add(1, Ordering::SeqCst) + 1);
//!
//! assert_eq!(runs.load(Ordering::SeqCst), 0);
//! task.fork(|_| {}, |_| {});
//! task.fork(|_| {}, |_| {});
//! assert_eq!(runs.load(Ordering::SeqCst), 2);
//! ```

mod callback;
mod sequence;
mod step;

#[cfg(feature = "async")]
mod future;

use std::fmt;
use std::marker::PhantomData;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::control::{Error, Maybe, Outcome};
use crate::typeclass::TypeConstructor;
use step::{Bound, ErasedResult, Node};

pub use callback::Done;

#[cfg(feature = "async")]
pub use future::TaskFuture;

/// The continuation a fork eventually settles.
type Continuation<T, E> = Box<dyn FnOnce(Result<T, E>) + Send>;

// =============================================================================
// Settle
// =============================================================================

/// The one-shot continuation handed to a task's operation on each fork.
///
/// Calling any of its methods consumes it, so a fork settles at most once.
/// Dropping it without calling anything leaves that fork pending forever.
///
/// # Examples
///
/// ```rust
/// use forkable::effect::{ForkState, Task};
///
/// let even: Task<u32, String> = Task::new(|settle| {
///     let value = 4;
///     if value % 2 == 0 {
///         settle.succeed(value);
///     } else {
///         settle.fail(format!("{value} is odd"));
///     }
/// });
/// assert_eq!(even.fork_now(), ForkState::Succeeded(4));
/// ```
pub struct Settle<T, E> {
    continuation: Continuation<T, E>,
}

impl<T, E> Settle<T, E> {
    pub(crate) fn new<F>(continuation: F) -> Self
    where
        F: FnOnce(Result<T, E>) + Send + 'static,
    {
        Self {
            continuation: Box::new(continuation),
        }
    }

    /// Settles the fork with a value.
    #[inline]
    pub fn succeed(self, value: T) {
        (self.continuation)(Ok(value));
    }

    /// Settles the fork with an error.
    #[inline]
    pub fn fail(self, error: E) {
        (self.continuation)(Err(error));
    }

    /// Settles the fork from a `Result`.
    #[inline]
    pub fn complete(self, result: Result<T, E>) {
        (self.continuation)(result);
    }
}

impl<T, E> fmt::Debug for Settle<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Settle").finish_non_exhaustive()
    }
}

// =============================================================================
// ForkState
// =============================================================================

/// The state of one fork, as observed by [`Task::fork_now`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForkState<T, E> {
    /// The operation returned without settling; it may settle later.
    Pending,
    /// The fork settled with a value.
    Succeeded(T),
    /// The fork settled with an error.
    Failed(E),
}

impl<T, E> ForkState<T, E> {
    /// Returns `true` once the fork has settled either way.
    #[inline]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// The settlement as a `Result`, or `None` while pending.
    #[inline]
    pub fn into_result(self) -> Option<Result<T, E>> {
        match self {
            Self::Pending => None,
            Self::Succeeded(value) => Some(Ok(value)),
            Self::Failed(error) => Some(Err(error)),
        }
    }
}

// =============================================================================
// Task
// =============================================================================

/// A cold, single-shot-per-fork deferred computation.
///
/// # Type Parameters
///
/// - `T`: The success value.
/// - `E`: The failure value, [`Error`] unless stated otherwise.
///
/// # Sharing
///
/// Cloning a task clones a reference to its immutable description. Clones
/// can be forked from any thread; each fork runs the description afresh.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Task::of(a).chain(f) == f(a)`
/// 2. **Right Identity**: `m.chain(Task::of) == m`
/// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
///
/// where `==` compares the settlements of a fork of each side.
pub struct Task<T, E = Error> {
    node: Arc<Node>,
    marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E> Clone for Task<T, E> {
    fn clone(&self) -> Self {
        Self::from_node(Arc::clone(&self.node))
    }
}

impl<T, E> Task<T, E> {
    const fn from_node(node: Arc<Node>) -> Self {
        Self {
            node,
            marker: PhantomData,
        }
    }
}

static_assertions::assert_impl_all!(Task<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Settle<String, Error>: Send);

impl<T: Send + 'static, E: Send + 'static> Task<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a task from an operation that settles the given [`Settle`].
    ///
    /// The operation runs once per fork. It must eventually settle the
    /// handle exactly once; dropping it leaves the fork pending.
    pub fn new<F>(operation: F) -> Self
    where
        F: Fn(Settle<T, E>) + Send + Sync + 'static,
    {
        Self::from_node(Arc::new(Node::Primitive(Arc::new(
            move |settle: Settle<step::Erased, step::Erased>| {
                operation(Settle::new(move |result: Result<T, E>| {
                    settle.complete(result.map(step::erase).map_err(step::erase));
                }));
            },
        ))))
    }

    /// A task whose every fork succeeds with a clone of `value`.
    pub fn resolve(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move |settle| settle.succeed(value.clone()))
    }

    /// Same as [`Task::resolve`].
    #[inline]
    pub fn of(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::resolve(value)
    }

    /// A task whose every fork fails with a clone of `error`.
    pub fn reject(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move |settle| settle.fail(error.clone()))
    }

    /// Resolves a present value, or fails with [`Error::Missing`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Error;
    /// use forkable::effect::{ForkState, Task};
    ///
    /// let missing: Task<i32> = Task::from_nullable(None);
    /// assert_eq!(missing.fork_now(), ForkState::Failed(Error::Missing));
    /// ```
    pub fn from_nullable(value: Option<T>) -> Self
    where
        T: Clone + Sync,
        E: From<Error>,
    {
        match value {
            Some(value) => Self::resolve(value),
            None => Self::new(|settle| settle.fail(E::from(Error::Missing))),
        }
    }

    /// Runs `function` on every fork; a panic becomes [`Error::Panicked`].
    ///
    /// This is the synchronous bridge into the task world. The closure is
    /// not called when the task is built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Error;
    /// use forkable::effect::{ForkState, Task};
    ///
    /// let task: Task<i32> = Task::attempt(|| panic!("boom"));
    /// assert_eq!(task.fork_now(), ForkState::Failed(Error::Panicked("boom".to_string())));
    /// ```
    pub fn attempt<F>(function: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        E: From<Error>,
    {
        Self::new(move |settle| match catch_unwind(AssertUnwindSafe(&function)) {
            Ok(value) => settle.succeed(value),
            Err(payload) => settle.fail(E::from(Error::from_panic(payload.as_ref()))),
        })
    }

    /// Runs a fallible closure on every fork; `Err` fails the fork untouched.
    pub fn try_catch<F>(function: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self::new(move |settle| settle.complete(function()))
    }

    /// Wraps a side-effecting synchronous function so that it runs on fork.
    ///
    /// Use it to sequence logging, clock reads and similar effects into a
    /// pipeline instead of running them while the pipeline is being built.
    pub fn lift_sync<F>(function: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::new(move |settle| settle.succeed(function()))
    }

    /// Present resolves; absent fails with [`Error::Absent`].
    pub fn from_maybe(maybe: Maybe<T>) -> Self
    where
        T: Clone + Sync,
        E: From<Error>,
    {
        maybe.fold(
            || Self::new(|settle| settle.fail(E::from(Error::Absent))),
            Self::resolve,
        )
    }

    /// Success resolves; failure rejects with the carried error as is.
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self
    where
        T: Clone + Sync,
        E: Clone + Sync,
    {
        outcome.fold(Self::reject, Self::resolve)
    }

    // =========================================================================
    // Forking
    // =========================================================================

    fn run(&self, settle: Settle<T, E>) {
        step::start(
            Arc::clone(&self.node),
            Settle::new(move |result: ErasedResult| {
                settle.complete(result.map(step::unerase).map_err(step::unerase));
            }),
        );
    }

    /// Appends a continuation that receives every settlement of this task.
    fn bind<U, G, F>(self, next: F) -> Task<U, G>
    where
        F: Fn(Result<T, E>) -> Bound + Send + Sync + 'static,
    {
        Task::from_node(Arc::new(Node::Bind {
            source: self.node,
            next: Arc::new(move |result: ErasedResult| {
                next(result.map(step::unerase).map_err(step::unerase))
            }),
        }))
    }

    /// Forks this task from inside a continuation, handing its settlement to
    /// a continuation that runs once.
    fn bind_once<F>(&self, next: F) -> Bound
    where
        F: FnOnce(Result<T, E>) -> Bound + Send + 'static,
    {
        Bound::Then(
            Arc::clone(&self.node),
            Box::new(move |result: ErasedResult| {
                next(result.map(step::unerase).map_err(step::unerase))
            }),
        )
    }

    fn into_bound(self) -> Bound {
        Bound::Continue(self.node)
    }

    /// Runs the task, calling exactly one of the two continuations once it
    /// settles.
    pub fn fork<L, R>(&self, on_failure: L, on_success: R)
    where
        L: FnOnce(E) + Send + 'static,
        R: FnOnce(T) + Send + 'static,
    {
        self.run(Settle::new(move |result| match result {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }));
    }

    /// Forks the task and reports the state of that fork when the operation
    /// returns.
    ///
    /// Tasks built only from synchronous constructors always report a
    /// settled state. A task waiting on a future or a callback reports
    /// [`ForkState::Pending`]; its eventual settlement is discarded.
    pub fn fork_now(&self) -> ForkState<T, E> {
        let slot = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&slot);
        self.run(Settle::new(move |result| {
            *sink.lock() = Some(result);
        }));
        let settled = slot.lock().take();
        match settled {
            None => ForkState::Pending,
            Some(Ok(value)) => ForkState::Succeeded(value),
            Some(Err(error)) => ForkState::Failed(error),
        }
    }

    // =========================================================================
    // Functor / Bifunctor
    // =========================================================================

    /// Transforms the success value. Failures pass through unchanged.
    pub fn map<U, F>(self, function: F) -> Task<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.bind(move |result| step::settled(result.map(&function)))
    }

    /// Transforms the failure value. Successes pass through unchanged.
    pub fn map_err<G, F>(self, function: F) -> Task<T, G>
    where
        G: Send + 'static,
        F: Fn(E) -> G + Send + Sync + 'static,
    {
        self.bind(move |result| step::settled(result.map_err(&function)))
    }

    // =========================================================================
    // Monad
    // =========================================================================

    /// Sequences a dependent task.
    ///
    /// On success the value is passed to `function` and the returned task is
    /// forked with this fork's continuation. On failure `function` is never
    /// called.
    pub fn chain<U, F>(self, function: F) -> Task<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> Task<U, E> + Send + Sync + 'static,
    {
        self.bind(move |result| match result {
            Ok(value) => function(value).into_bound(),
            Err(error) => step::settled(Err::<U, E>(error)),
        })
    }

    /// Alias for [`Task::chain`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Task<U, E>
    where
        U: Send + 'static,
        F: Fn(T) -> Task<U, E> + Send + Sync + 'static,
    {
        self.chain(function)
    }

    /// Runs `next` after this task succeeds, discarding this task's value.
    pub fn then<U>(self, next: Task<U, E>) -> Task<U, E>
    where
        U: Send + 'static,
    {
        self.chain(move |_| next.clone())
    }

    /// Continues with a new task on either branch.
    ///
    /// Unlike [`Task::chain`] this also turns a failure into a task, which
    /// is how a pipeline recovers. The resulting error type is free to
    /// differ from `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Error;
    /// use forkable::effect::{ForkState, Task};
    ///
    /// let recovered: Task<String> = Task::<i32>::reject(Error::message("offline"))
    ///     .fold(
    ///         |error| Task::resolve(format!("fallback after {error}")),
    ///         |value| Task::resolve(value.to_string()),
    ///     );
    /// assert_eq!(
    ///     recovered.fork_now(),
    ///     ForkState::Succeeded("fallback after offline".to_string())
    /// );
    /// ```
    pub fn fold<U, G, L, R>(self, on_failure: L, on_success: R) -> Task<U, G>
    where
        U: Send + 'static,
        G: Send + 'static,
        L: Fn(E) -> Task<U, G> + Send + Sync + 'static,
        R: Fn(T) -> Task<U, G> + Send + Sync + 'static,
    {
        self.bind(move |result| match result {
            Ok(value) => on_success(value).into_bound(),
            Err(error) => on_failure(error).into_bound(),
        })
    }

    /// Falls back to `other` when this task fails.
    ///
    /// A success keeps this task's value and `other` is never forked.
    pub fn alt(self, other: Self) -> Self {
        self.bind(move |result| match result {
            Ok(value) => step::settled(Ok::<T, E>(value)),
            Err(_) => other.clone().into_bound(),
        })
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Combines this task with `other`, forking them one after the other.
    ///
    /// `other` is forked only once this task has succeeded, so a failure of
    /// this task is reported without `other` ever running.
    pub fn map2<B, C, F>(self, other: Task<B, E>, function: F) -> Task<C, E>
    where
        B: Send + 'static,
        C: Send + 'static,
        F: Fn(T, B) -> C + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        self.bind(move |first| match first {
            Ok(left) => {
                let function = Arc::clone(&function);
                other.bind_once(move |second| {
                    step::settled(second.map(|right| function(left, right)))
                })
            }
            Err(error) => step::settled(Err::<C, E>(error)),
        })
    }

    /// Combines three tasks, forked left to right.
    pub fn map3<B, C, D, F>(self, second: Task<B, E>, third: Task<C, E>, function: F) -> Task<D, E>
    where
        B: Send + 'static,
        C: Send + 'static,
        D: Send + 'static,
        F: Fn(T, B, C) -> D + Send + Sync + 'static,
    {
        self.map2(second, |first, second| (first, second))
            .map2(third, move |(first, second), third| function(first, second, third))
    }

    /// Pairs the values of two tasks, forked left to right.
    pub fn product<B>(self, other: Task<B, E>) -> Task<(T, B), E>
    where
        B: Send + 'static,
    {
        self.map2(other, |left, right| (left, right))
    }
}

impl<F: Send + 'static, E: Send + 'static> Task<F, E> {
    /// Applies the function produced by this task to the value of `input`.
    ///
    /// The function task is forked first; `input` is forked only after it
    /// succeeds. The first failure encountered is the one reported.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::effect::{ForkState, Task};
    ///
    /// let increment = Task::<fn(i32) -> i32>::resolve(|x| x + 1);
    /// assert_eq!(increment.ap(Task::resolve(41)).fork_now(), ForkState::Succeeded(42));
    /// ```
    pub fn ap<T, U>(self, input: Task<T, E>) -> Task<U, E>
    where
        F: FnOnce(T) -> U,
        T: Send + 'static,
        U: Send + 'static,
    {
        self.bind(move |result| match result {
            Ok(function) => input.bind_once(move |value| step::settled(value.map(function))),
            Err(error) => step::settled(Err::<U, E>(error)),
        })
    }
}

// =============================================================================
// Display / Debug
// =============================================================================

impl<T, E> fmt::Display for Task<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Task>")
    }
}

impl<T, E> fmt::Debug for Task<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Task").finish_non_exhaustive()
    }
}

// =============================================================================
// TypeConstructor Implementation
// =============================================================================

impl<T, E> TypeConstructor for Task<T, E> {
    type Inner = T;
    type WithType<B> = Task<B, E>;
}

// NOTE: Task does not implement Functor, Applicative or Monad. Its closures
// must be `Fn + Send + Sync` (they run once per fork, possibly on another
// thread) and the trait methods only promise `FnOnce`. The inherent `map`,
// `chain`, `map2` and `ap` provide the same operations.
