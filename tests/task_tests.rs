//! Behaviour tests for forking, sequencing and single settlement.

use forkable::control::Error;
use forkable::effect::{ForkState, Settle, Task};
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Records every continuation call made by one or more forks.
#[derive(Default, Clone)]
struct Recorder<T> {
    successes: Arc<Mutex<Vec<T>>>,
    failures: Arc<Mutex<Vec<Error>>>,
}

impl<T: Send + 'static> Recorder<T> {
    fn fork(&self, task: &Task<T>) {
        let successes = Arc::clone(&self.successes);
        let failures = Arc::clone(&self.failures);
        task.fork(
            move |error| failures.lock().unwrap().push(error),
            move |value| successes.lock().unwrap().push(value),
        );
    }

    fn successes(&self) -> usize {
        self.successes.lock().unwrap().len()
    }

    fn failures(&self) -> Vec<Error> {
        self.failures.lock().unwrap().clone()
    }
}

// =============================================================================
// Single settlement
// =============================================================================

#[rstest]
#[case::resolve(Task::resolve(1), 1, 0)]
#[case::reject(Task::reject(Error::Missing), 0, 1)]
#[case::attempt_ok(Task::attempt(|| 1), 1, 0)]
#[case::attempt_panic(Task::attempt(|| panic!("X")), 0, 1)]
fn library_constructors_settle_exactly_once(
    #[case] task: Task<i32>,
    #[case] successes: usize,
    #[case] failures: usize,
) {
    let recorder = Recorder::default();
    recorder.fork(&task);
    assert_eq!(recorder.successes(), successes);
    assert_eq!(recorder.failures().len(), failures);
}

#[rstest]
fn attempt_reports_the_panic_once() {
    let recorder = Recorder::<i32>::default();
    recorder.fork(&Task::attempt(|| panic!("X")));

    assert_eq!(recorder.failures(), vec![Error::Panicked("X".to_string())]);
    assert_eq!(recorder.successes(), 0);
}

#[rstest]
fn forking_twice_settles_twice() {
    let recorder = Recorder::default();
    let task = Task::resolve(3).map(|x| x + 1);
    recorder.fork(&task);
    recorder.fork(&task);
    assert_eq!(*recorder.successes.lock().unwrap(), vec![4, 4]);
}

// =============================================================================
// Sequencing
// =============================================================================

#[rstest]
fn chained_pipeline_yields_seven() {
    let task: Task<i32> = Task::resolve(3)
        .chain(|x| Task::resolve(x * 2))
        .chain(|x| Task::resolve(x + 1));
    assert_eq!(task.fork_now(), ForkState::Succeeded(7));
}

#[rstest]
fn combine_all_stops_at_first_rejection() {
    let fourth_runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fourth_runs);
    let fourth: Task<i32> = Task::new(move |settle: Settle<i32, Error>| {
        counter.fetch_add(1, Ordering::SeqCst);
        settle.succeed(6);
    });
    let error = Error::message("E");

    let all = Task::combine_all(vec![
        Task::resolve(3),
        Task::resolve(4),
        Task::reject(error.clone()),
        fourth,
    ]);

    let recorder = Recorder::default();
    recorder.fork(&all);

    assert_eq!(recorder.failures(), vec![error]);
    assert_eq!(recorder.successes(), 0);
    assert_eq!(fourth_runs.load(Ordering::SeqCst), 0);
}

#[rstest]
fn pipeline_steps_run_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let step = |name: &'static str| {
        let log = Arc::clone(&log);
        Task::<()>::lift_sync(move || log.lock().unwrap().push(name))
    };

    let pipeline = step("open")
        .then(step("read"))
        .then(step("close"));

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(pipeline.fork_now(), ForkState::Succeeded(()));
    assert_eq!(*log.lock().unwrap(), vec!["open", "read", "close"]);
}

#[rstest]
fn fold_recovers_a_failed_step() {
    let task: Task<i32> = Task::<i32>::from_nullable(None)
        .fold(
            |error| match error {
                Error::Missing => Task::resolve(0),
                other => Task::reject(other),
            },
            Task::resolve,
        )
        .map(|x| x + 1);
    assert_eq!(task.fork_now(), ForkState::Succeeded(1));
}

#[rstest]
fn user_errors_pass_through_untouched() {
    #[derive(Debug, Clone, PartialEq)]
    enum Denied {
        Forbidden(u16),
    }

    let task: Task<String, Denied> = Task::resolve(1)
        .chain(|_: i32| Task::reject(Denied::Forbidden(403)))
        .map(|value: i32| value.to_string());
    assert_eq!(task.fork_now(), ForkState::Failed(Denied::Forbidden(403)));
}
