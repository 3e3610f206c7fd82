//! Concurrent fan-out of fetch tasks and collection of their results.
mod runner;
mod types;


pub use runner::run;
pub use types::{ProbeResult, ProbeResultSet, ProbeRun};
