//! Media structures.

use std::path::{Path, PathBuf};

/// One audio input file with its derived display name and probed duration.
///
/// Created by the duration prober and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Location of the audio file.
    pub path: PathBuf,
    /// Display name (file name without extension).
    pub name: String,
    /// Playback duration in whole milliseconds (truncated).
    pub duration_ms: u64,
}

impl Track {
    /// Create a track, deriving the display name from the file stem.
    pub fn new(path: impl Into<PathBuf>, duration_ms: u64) -> Self {
        let path = path.into();
        let name = display_name(&path);
        Self {
            path,
            name,
            duration_ms,
        }
    }
}

/// Derive a display name from a path (file stem, lossy).
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
