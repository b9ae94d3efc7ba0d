//! Fork-time interpreter for task descriptions.
//!
//! A task is a graph of [`Node`]s: primitive operations that settle a
//! [`Settle`] handle, and binds that feed the settlement of a source node to
//! a continuation. Values cross the graph type-erased as `Box<dyn Any>` and
//! are downcast back by the typed wrappers in the parent module.
//!
//! Forking walks the graph with a loop and an explicit stack of pending
//! continuations instead of nesting one continuation inside the next. A
//! primitive that settles before its operation returns hands the result
//! back to the loop; one that settles later resumes the loop from its own
//! continuation. Either way the call stack stays flat however deep the
//! description is.

use std::any::Any;
use std::mem;
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;

use super::Settle;

pub(super) type Erased = Box<dyn Any + Send>;
pub(super) type ErasedResult = Result<Erased, Erased>;

pub(super) type Primitive = dyn Fn(Settle<Erased, Erased>) + Send + Sync;
pub(super) type Next = dyn Fn(ErasedResult) -> Bound + Send + Sync;
pub(super) type Once = Box<dyn FnOnce(ErasedResult) -> Bound + Send>;

/// A node of a task description.
pub(super) enum Node {
    /// An operation forked directly.
    Primitive(Arc<Primitive>),
    /// Runs `source`, then passes its settlement to `next`.
    Bind { source: Arc<Node>, next: Arc<Next> },
}

/// What a continuation asks the interpreter to do next.
pub(super) enum Bound {
    /// The continuation settled without forking anything.
    Settled(ErasedResult),
    /// Fork this node; its settlement flows to the remaining continuations.
    Continue(Arc<Node>),
    /// Fork this node and pass its settlement to a one-shot continuation.
    Then(Arc<Node>, Once),
}

#[inline]
pub(super) fn erase<A: Send + 'static>(value: A) -> Erased {
    Box::new(value)
}

#[inline]
pub(super) fn unerase<A: 'static>(value: Erased) -> A {
    *value
        .downcast::<A>()
        .expect("Type mismatch in task step")
}

/// Erases a typed settlement for [`Bound::Settled`].
#[inline]
pub(super) fn settled<T: Send + 'static, E: Send + 'static>(result: Result<T, E>) -> Bound {
    Bound::Settled(result.map(erase).map_err(erase))
}

/// Placeholder swapped into a bind while its source is dropped iteratively.
static LEAF: LazyLock<Arc<Node>> =
    LazyLock::new(|| Arc::new(Node::Primitive(Arc::new(drop::<Settle<Erased, Erased>>))));

impl Drop for Node {
    fn drop(&mut self) {
        let mut sources = Vec::new();
        if let Self::Bind { source, .. } = self {
            sources.push(mem::replace(source, Arc::clone(&LEAF)));
        }
        while let Some(source) = sources.pop() {
            if let Ok(mut node) = Arc::try_unwrap(source) {
                if let Self::Bind { source, .. } = &mut node {
                    sources.push(mem::replace(source, Arc::clone(&LEAF)));
                }
            }
        }
    }
}

enum Pending {
    Shared(Arc<Next>),
    Once(Once),
}

impl Pending {
    fn call(self, result: ErasedResult) -> Bound {
        match self {
            Self::Shared(next) => next(result),
            Self::Once(next) => next(result),
        }
    }
}

/// The state of one fork: continuations still to run and the final handle.
struct Run {
    pending: Vec<Pending>,
    settle: Settle<Erased, Erased>,
}

/// Whether the interpreter loop or a primitive's continuation owns the run.
enum Handoff {
    /// The primitive's operation has not returned yet.
    Forking,
    /// The primitive settled before its operation returned.
    Inline(ErasedResult),
    /// The loop has returned; the continuation resumes the run.
    Detached(Run),
}

/// Forks `node`, eventually settling `settle` exactly once.
pub(super) fn start(node: Arc<Node>, settle: Settle<Erased, Erased>) {
    evaluate(
        Run {
            pending: Vec::new(),
            settle,
        },
        node,
    );
}

fn evaluate(mut run: Run, mut node: Arc<Node>) {
    loop {
        let operation = loop {
            match &*node {
                Node::Primitive(operation) => break Arc::clone(operation),
                Node::Bind { source, next } => {
                    run.pending.push(Pending::Shared(Arc::clone(next)));
                    node = Arc::clone(source);
                }
            }
        };

        let handoff = Arc::new(Mutex::new(Handoff::Forking));
        let shared = Arc::clone(&handoff);
        operation(Settle::new(move |result: ErasedResult| {
            let mut state = shared.lock();
            if let Handoff::Detached(run) = mem::replace(&mut *state, Handoff::Forking) {
                drop(state);
                resume(run, result);
            } else {
                *state = Handoff::Inline(result);
            }
        }));

        let mut state = handoff.lock();
        if let Handoff::Inline(result) = mem::replace(&mut *state, Handoff::Forking) {
            drop(state);
            match advance(run, result) {
                Some((resumed, next)) => {
                    run = resumed;
                    node = next;
                }
                None => return,
            }
        } else {
            *state = Handoff::Detached(run);
            return;
        }
    }
}

fn resume(run: Run, result: ErasedResult) {
    tracing::trace!(pending = run.pending.len(), "task fork resumed after a deferred settlement");
    if let Some((run, node)) = advance(run, result) {
        evaluate(run, node);
    }
}

/// Feeds `result` through pending continuations until one asks for a fork.
fn advance(mut run: Run, mut result: ErasedResult) -> Option<(Run, Arc<Node>)> {
    while let Some(pending) = run.pending.pop() {
        match pending.call(result) {
            Bound::Settled(settled) => result = settled,
            Bound::Continue(node) => return Some((run, node)),
            Bound::Then(node, next) => {
                run.pending.push(Pending::Once(next));
                return Some((run, node));
            }
        }
    }
    run.settle.complete(result);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn leaf(value: i32) -> Arc<Node> {
        Arc::new(Node::Primitive(Arc::new(move |settle: Settle<Erased, Erased>| {
            settle.succeed(erase(value));
        })))
    }

    fn increment(source: Arc<Node>) -> Arc<Node> {
        Arc::new(Node::Bind {
            source,
            next: Arc::new(|result: ErasedResult| {
                settled(
                    result
                        .map(|value| unerase::<i32>(value) + 1)
                        .map_err(unerase::<i32>),
                )
            }),
        })
    }

    fn collect(node: Arc<Node>) -> Option<Result<i32, i32>> {
        let slot = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&slot);
        start(
            node,
            Settle::new(move |result: ErasedResult| {
                *sink.lock() = Some(result.map(unerase).map_err(unerase));
            }),
        );
        slot.lock().take()
    }

    #[rstest]
    fn binds_run_innermost_first() {
        assert_eq!(collect(increment(increment(leaf(1)))), Some(Ok(3)));
    }

    #[rstest]
    fn one_shot_continuation_runs_after_its_node() {
        let node = Arc::new(Node::Bind {
            source: leaf(2),
            next: Arc::new(|first: ErasedResult| {
                let first: i32 = unerase(first.unwrap_or_else(|error| error));
                Bound::Then(
                    leaf(10),
                    Box::new(move |second: ErasedResult| {
                        settled(
                            second
                                .map(|value| unerase::<i32>(value) * first)
                                .map_err(unerase::<i32>),
                        )
                    }),
                )
            }),
        });
        assert_eq!(collect(node), Some(Ok(20)));
    }

    #[rstest]
    fn dropping_a_deep_description_does_not_recurse() {
        let mut node = leaf(0);
        for _ in 0..200_000 {
            node = increment(node);
        }
        drop(node);
    }

    #[rstest]
    fn dropped_settle_leaves_run_unsettled() {
        let node = increment(Arc::new(Node::Primitive(Arc::new(drop::<Settle<Erased, Erased>>))));
        assert_eq!(collect(node), None);
    }
}
