//! Serializers for the two chapter documents.
//!
//! The ffmetadata document uses the 1 ms-offset START convention from the
//! chapter table; the YouTube list derives its timestamps from its own
//! running accumulator (start-of-track cumulative seconds, truncated). The
//! two derivations are intentionally kept separate.

use super::table::ChapterTable;
use super::timestamps::format_timestamp;

/// Magic first line of an ffmetadata document.
pub const METADATA_HEADER: &str = ";FFMETADATA1";

/// Decorative first line of the human-readable chapter list.
pub const YOUTUBE_HEADER: &str = "========== Youtube Chapters ==========";

/// Render the chapter-metadata document embedded into the output video.
///
/// One `[CHAPTER]` block per track on a 1/1000 timebase. An empty table
/// yields just the header.
pub fn render_metadata(table: &ChapterTable) -> String {
    let mut doc = String::from(METADATA_HEADER);
    doc.push('\n');

    for entry in table.entries() {
        doc.push_str("[CHAPTER]\n");
        doc.push_str("TIMEBASE=1/1000\n");
        doc.push_str(&format!("START={}\n", entry.start_ms));
        doc.push_str(&format!("END={}\n", entry.end_ms));
        doc.push_str(&format!("title={}\n", escape_metadata_value(&entry.title)));
    }

    doc
}

/// Render the human-readable chapter list (`<timestamp> - <title>` lines).
pub fn render_youtube_list(table: &ChapterTable) -> String {
    let mut doc = String::from(YOUTUBE_HEADER);
    doc.push('\n');

    // Start-of-track offsets, accumulated independently of the table's
    // 1 ms START convention.
    let mut elapsed_ms = 0u64;
    for entry in table.entries() {
        doc.push_str(&format!(
            "{} - {}\n",
            format_timestamp(elapsed_ms / 1000),
            entry.title
        ));
        elapsed_ms = entry.end_ms;
    }

    doc
}

/// Escape characters that are special in ffmetadata values.
fn escape_metadata_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '=' | ';' | '#' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
