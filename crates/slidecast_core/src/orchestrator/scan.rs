//! Directory scanning for qualifying audio files.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{PipelineError, PipelineResult};

/// List audio files in `dir` matching `extension` (case-insensitive).
///
/// Non-recursive; sub-directories are skipped with a logged notice and
/// non-matching files are ignored. Results are sorted by name so runs are
/// deterministic regardless of readdir order.
pub fn qualifying_files(dir: &Path, extension: &str) -> PipelineResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| PipelineError::io_error(format!("reading directory {}", dir.display()), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| PipelineError::io_error("reading directory entry".to_string(), e))?;
        let path = entry.path();

        if path.is_dir() {
            tracing::info!("skipping sub-directory {}", path.display());
            continue;
        }

        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(extension))
            .unwrap_or(false);

        if matches {
            files.push(path);
        } else {
            tracing::debug!("ignoring non-audio file {}", path.display());
        }
    }

    files.sort();
    tracing::debug!("{} qualifying files in {}", files.len(), dir.display());
    Ok(files)
}
