//! Chapter table built from a sequence of track durations.

use crate::models::Track;

/// A named time range within the merged output video, corresponding to one
/// original track. Offsets are in milliseconds on a 1/1000 timebase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    /// Start offset. Starts are 1-indexed: the first chapter begins at 1 ms
    /// and every later chapter at the previous end plus 1, so no chapter
    /// opens with a zero-length leading gap.
    pub start_ms: u64,
    /// End offset: the cumulative duration including this track.
    pub end_ms: u64,
    /// Chapter title (the track's display name).
    pub title: String,
}

/// Ordered chapter entries plus the running total of all track durations.
///
/// Built incrementally in input order; entries are contiguous and
/// non-overlapping apart from the 1 ms start convention.
#[derive(Debug, Clone, Default)]
pub struct ChapterTable {
    entries: Vec<ChapterEntry>,
    total_runtime_ms: u64,
}

impl ChapterTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from tracks in input order.
    pub fn from_tracks(tracks: &[Track]) -> Self {
        let mut table = Self::new();
        for track in tracks {
            table.push(&track.name, track.duration_ms);
        }
        table
    }

    /// Append a chapter and advance the running total by its duration.
    pub fn push(&mut self, title: &str, duration_ms: u64) {
        let entry = ChapterEntry {
            start_ms: self.total_runtime_ms + 1,
            end_ms: self.total_runtime_ms + duration_ms,
            title: title.to_string(),
        };
        self.total_runtime_ms += duration_ms;
        self.entries.push(entry);
    }

    /// Chapter entries in input order.
    pub fn entries(&self) -> &[ChapterEntry] {
        &self.entries
    }

    /// Sum of all track durations in milliseconds.
    pub fn total_runtime_ms(&self) -> u64 {
        self.total_runtime_ms
    }

    /// Number of chapters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no chapters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
