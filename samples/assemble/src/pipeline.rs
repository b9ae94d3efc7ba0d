//! The task pipeline behind the `assemble` binary.

use std::path::PathBuf;

use forkable::control::Error;
use forkable::effect::{Task, runtime};

/// Failures of an assembly run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssembleError {
    /// Nothing to join.
    #[error("no input files were given")]
    NoInputs,

    /// An input could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The input that failed.
        path: PathBuf,
        /// The underlying I/O failure.
        source: Error,
    },

    /// The output could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// The output that failed.
        path: PathBuf,
        /// The underlying I/O failure.
        source: Error,
    },

    /// A failure invented by the task library itself.
    #[error(transparent)]
    Library(#[from] Error),
}

/// What to join and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// Inputs, joined in this order.
    pub inputs: Vec<PathBuf>,
    /// Destination file; overwritten if it exists.
    pub output: PathBuf,
    /// Text placed between two parts.
    pub separator: String,
}

/// The result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of inputs joined.
    pub parts: usize,
    /// Bytes written to the output.
    pub bytes: usize,
}

fn log_step(message: String) -> Task<(), AssembleError> {
    Task::lift_sync(move || tracing::info!("{message}"))
}

fn read_part(path: PathBuf) -> Task<String, AssembleError> {
    Task::from_future(move || {
        let path = path.clone();
        async move {
            tracing::debug!(path = %path.display(), "reading part");
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|error| AssembleError::Read {
                    path,
                    source: error.into(),
                })
        }
    })
}

fn write_output(path: PathBuf, contents: String) -> Task<usize, AssembleError> {
    Task::from_callback(move |done| {
        let path = path.clone();
        let contents = contents.clone();
        let handle = match runtime::current() {
            Ok(handle) => handle,
            Err(error) => return done.call(Some(error.into()), None),
        };
        drop(handle.spawn_blocking(move || {
            match std::fs::write(&path, contents.as_bytes()) {
                Ok(()) => done.call(None, Some(contents.len())),
                Err(error) => done.call(
                    Some(AssembleError::Write {
                        path,
                        source: error.into(),
                    }),
                    None,
                ),
            }
        }));
    })
}

fn join_parts(contents: Vec<String>, separator: String) -> Task<String, AssembleError> {
    Task::attempt(move || contents.join(separator.as_str()))
}

/// Describes a full assembly run. Nothing happens until the task is forked.
///
/// # Examples
///
/// ```rust,no_run
/// use assemble::{Assembly, assemble};
///
/// # async fn run() {
/// let task = assemble(Assembly {
///     inputs: vec!["intro.txt".into(), "body.txt".into()],
///     output: "book.txt".into(),
///     separator: "\n".to_string(),
/// });
/// let summary = task.await;
/// # }
/// ```
pub fn assemble(assembly: Assembly) -> Task<Summary, AssembleError> {
    if assembly.inputs.is_empty() {
        return Task::reject(AssembleError::NoInputs);
    }

    let Assembly {
        inputs,
        output,
        separator,
    } = assembly;
    let parts = inputs.len();

    log_step(format!("reading {parts} parts"))
        .then(Task::traverse(inputs, read_part))
        .chain(move |contents| join_parts(contents, separator.clone()))
        .chain(move |joined| write_output(output.clone(), joined))
        .chain(move |bytes| {
            let summary = Summary { parts, bytes };
            log_step(format!("wrote {bytes} bytes from {parts} parts")).map(move |()| summary.clone())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use forkable::effect::ForkState;
    use rstest::rstest;
    use std::path::Path;

    fn scratch(name: &str) -> PathBuf {
        let directory = std::env::temp_dir().join(format!("assemble-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&directory).unwrap();
        directory
    }

    fn write(directory: &Path, name: &str, contents: &str) -> PathBuf {
        let path = directory.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[rstest]
    #[tokio::test]
    async fn joins_inputs_in_order() {
        let directory = scratch("ordered");
        let inputs = vec![
            write(&directory, "a.txt", "alpha"),
            write(&directory, "b.txt", "beta"),
            write(&directory, "c.txt", "gamma"),
        ];
        let output = directory.join("out.txt");

        let summary = assemble(Assembly {
            inputs,
            output: output.clone(),
            separator: "+".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "alpha+beta+gamma");
        assert_eq!(summary, Summary { parts: 3, bytes: 16 });
    }

    #[rstest]
    #[tokio::test]
    async fn missing_input_fails_without_writing() {
        let directory = scratch("missing");
        let output = directory.join("out.txt");
        let missing = directory.join("nope.txt");

        let result = assemble(Assembly {
            inputs: vec![write(&directory, "a.txt", "alpha"), missing.clone()],
            output: output.clone(),
            separator: String::new(),
        })
        .await;

        match result {
            Err(AssembleError::Read { path, source }) => {
                assert_eq!(path, missing);
                assert!(matches!(source, Error::Io { kind: std::io::ErrorKind::NotFound, .. }));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!output.exists());
    }

    #[rstest]
    #[tokio::test]
    async fn empty_input_list_is_rejected() {
        let result = assemble(Assembly {
            inputs: Vec::new(),
            output: PathBuf::from("unused"),
            separator: String::new(),
        })
        .await;
        assert_eq!(result, Err(AssembleError::NoInputs));
    }

    #[rstest]
    fn building_the_task_touches_nothing() {
        let directory = scratch("cold");
        let output = directory.join("out.txt");
        let _task = assemble(Assembly {
            inputs: vec![write(&directory, "a.txt", "alpha")],
            output: output.clone(),
            separator: String::new(),
        });
        assert!(!output.exists());
    }

    #[rstest]
    fn join_parts_uses_separator() {
        let joined = join_parts(vec!["a".to_string(), "b".to_string()], ", ".to_string());
        assert_eq!(joined.fork_now(), ForkState::Succeeded("a, b".to_string()));
    }

    #[rstest]
    fn forking_outside_a_runtime_reports_library_failure() {
        let directory = scratch("no-runtime");
        let task = assemble(Assembly {
            inputs: vec![write(&directory, "a.txt", "alpha")],
            output: directory.join("out.txt"),
            separator: String::new(),
        });
        assert_eq!(
            task.fork_now(),
            ForkState::Failed(AssembleError::Library(Error::NoRuntime))
        );
    }
}
