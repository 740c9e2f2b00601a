//! External process plumbing.

mod runner;

pub use runner::{CommandOutput, CommandRunner, ProcessRunner, RunnerError};
