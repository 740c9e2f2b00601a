//! Command runner for external process execution.
//!
//! Every external tool (ffprobe, ffmpeg) is invoked through the
//! [`CommandRunner`] trait so the orchestrator's control flow stays linear
//! and the tools can be substituted by mocks in tests. Invocations are
//! synchronous: the caller blocks until the process exits.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Captured output of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Error spawning or waiting on an external process.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Blocking external-process invocation with captured stdout/stderr.
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion and return its captured output.
    ///
    /// A non-zero exit status is not an error at this layer; callers
    /// inspect `success`/`exit_code` and decide.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, RunnerError>;
}

/// Production runner that spawns real processes.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, RunnerError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RunnerError::Spawn {
                program: program.to_string(),
                source: e,
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            success: output.status.success(),
        })
    }
}
