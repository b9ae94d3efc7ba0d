//! Error type used when a container has to invent a failure of its own.
//!
//! User supplied errors always pass through the containers untouched. This
//! type only appears when a conversion entry point has nothing to forward:
//! a missing value, an absent [`Maybe`](super::Maybe), a panic caught by
//! `attempt`, or an errback that reported neither an error nor a value.
//!
//! Entry points that may produce one of these require `E: From<Error>`, so
//! callers with their own error enum can embed it.
//!
//! # Examples
//!
//! ```rust
//! use forkable::control::{Error, Outcome};
//!
//! let missing: Outcome<i32> = Outcome::from_nullable(None);
//! assert_eq!(missing, Outcome::failure(Error::Missing));
//! assert_eq!(Error::Missing.to_string(), "value was null");
//! ```

use std::fmt;
use std::io;

/// Failures produced by the library itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A possibly-missing value turned out to be missing.
    Missing,
    /// An absent `Maybe` was converted into a failing container.
    Absent,
    /// An errback was invoked with neither an error nor a value.
    EmptyCallback,
    /// A fork dropped its continuation without settling.
    Abandoned,
    /// A future-backed task was forked on a thread with no tokio runtime.
    NoRuntime,
    /// A closure wrapped by `attempt` panicked; carries the panic message.
    Panicked(String),
    /// An I/O error, flattened so that it can be cloned and compared.
    Io {
        /// The kind reported by the operating system.
        kind: io::ErrorKind,
        /// The rendered error message.
        message: String,
    },
    /// A free-form failure description.
    Message(String),
}

impl Error {
    /// Creates a free-form error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forkable::control::Error;
    ///
    /// assert_eq!(Error::message("boom").to_string(), "boom");
    /// ```
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Builds a [`Error::Panicked`] from the payload returned by `catch_unwind`.
    pub(crate) fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self::Panicked(message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(formatter, "value was null"),
            Self::Absent => write!(formatter, "value was absent"),
            Self::EmptyCallback => {
                write!(formatter, "callback supplied neither an error nor a value")
            }
            Self::Abandoned => write!(formatter, "task was dropped before it settled"),
            Self::NoRuntime => write!(formatter, "no tokio runtime is running on this thread"),
            Self::Panicked(message) => write!(formatter, "panicked: {message}"),
            Self::Io { kind, message } => write!(formatter, "i/o error ({kind}): {message}"),
            Self::Message(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}
