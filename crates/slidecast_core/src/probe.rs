//! Audio duration probing using ffprobe.

use std::path::Path;

use thiserror::Error;

use crate::io::{CommandRunner, RunnerError};

/// Error probing a file's duration.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("ffprobe failed with exit code {exit_code}: {message}")]
    CommandFailed { exit_code: i32, message: String },

    #[error("could not parse ffprobe duration output {output:?}")]
    UnparsableDuration { output: String },

    #[error(transparent)]
    Runner(#[from] RunnerError),
}

/// Result type for probe operations.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Get a file's playback duration in whole milliseconds (truncated).
///
/// Invokes ffprobe once per call; no filesystem writes.
pub fn probe_duration_ms(runner: &dyn CommandRunner, path: &Path) -> ProbeResult<u64> {
    let args = vec![
        "-v".to_string(),
        "error".to_string(),
        "-show_entries".to_string(),
        "format=duration".to_string(),
        "-of".to_string(),
        "default=noprint_wrappers=1:nokey=1".to_string(),
        path.to_string_lossy().to_string(),
    ];

    tracing::debug!("probing duration of {}", path.display());

    let output = runner.run("ffprobe", &args)?;
    if !output.success {
        return Err(ProbeError::CommandFailed {
            exit_code: output.exit_code,
            message: output.stderr.trim().to_string(),
        });
    }

    parse_duration_ms(&output.stdout)
}

/// Parse ffprobe's decimal-seconds output into truncated milliseconds.
fn parse_duration_ms(raw: &str) -> ProbeResult<u64> {
    let secs: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ProbeError::UnparsableDuration {
            output: raw.trim().to_string(),
        })?;

    if !secs.is_finite() || secs < 0.0 {
        return Err(ProbeError::UnparsableDuration {
            output: raw.trim().to_string(),
        });
    }

    Ok((secs * 1000.0) as u64)
}
