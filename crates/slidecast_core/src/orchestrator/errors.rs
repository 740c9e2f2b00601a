//! Error types for the conversion pipeline.
//!
//! All errors raised during a run propagate to the top of
//! [`super::Orchestrator::run`] and are handled once there; nothing is
//! retried and no partial outputs are cleaned up.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::io::RunnerError;
use crate::probe::ProbeError;
use crate::render::RenderError;

/// Top-level pipeline error.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The supplied source path does not exist.
    #[error("source path not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Merge mode found zero usable audio files.
    #[error("no qualifying audio files in {}", dir.display())]
    NoQualifyingFiles { dir: PathBuf },

    /// The transcoder exited non-zero.
    #[error("ffmpeg failed with exit code {exit_code}: {message}")]
    Transcode { exit_code: i32, message: String },

    /// File I/O error with operation context.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },

    /// Duration probing failed.
    #[error(transparent)]
    Probe(#[from] ProbeError),

    /// Title image generation failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// An external process could not be spawned.
    #[error(transparent)]
    Runner(#[from] RunnerError),
}

impl PipelineError {
    /// Create an I/O error with context.
    pub fn io_error(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
