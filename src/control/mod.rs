//! Plain value containers.
//!
//! - [`Maybe`]: A value or its absence
//! - [`Outcome`]: A value or the error that prevented it
//! - [`List`]: An ordered sequence of values
//! - [`Error`]: Failures the library produces on its own
//!
//! All three containers are immutable once built; every operation consumes
//! the container and returns a new one.
//!
//! # Examples
//!
//! ```rust
//! use forkable::control::{Error, Maybe, Outcome};
//!
//! let settings = Maybe::from_nullable(std::env::var("FORKABLE_UNSET_VARIABLE").ok());
//! let port: Outcome<u16> = settings
//!     .fold(|| Outcome::failure(Error::Absent), Outcome::success)
//!     .chain(|text| Outcome::try_catch(|| {
//!         text.parse::<u16>().map_err(|error| Error::message(error.to_string()))
//!     }));
//! assert_eq!(port.with_default(8080), 8080);
//! ```

mod error;
mod list;
mod maybe;
mod outcome;

pub use error::Error;
pub use list::List;
pub use maybe::Maybe;
pub use outcome::Outcome;
