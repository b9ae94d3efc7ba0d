//! Assemble sample application.
//!
//! Joins a list of text files into one output file. The whole run is
//! described as a single [`Task`](forkable::effect::Task) that `main` forks
//! exactly once:
//!
//! 1. a progress line, sequenced with `lift_sync`
//! 2. every input read with `from_future`, strictly in order
//! 3. the parts joined inside `Task::attempt`, so a panic becomes a failure
//! 4. the joined text written through an errback-style `from_callback`
//! 5. a closing progress line

pub mod pipeline;

pub use pipeline::{AssembleError, Assembly, Summary, assemble};
