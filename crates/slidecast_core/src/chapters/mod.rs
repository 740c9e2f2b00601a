//! Chapter synthesis for merged album videos.
//!
//! Accumulates per-track durations into a chapter table and serializes it
//! into the two textual forms the tool emits:
//! - an ffmetadata chapter document embedded into the output video
//! - a human-readable timestamped list for pasting into a video description

mod render;
mod table;
mod timestamps;

pub use render::{render_metadata, render_youtube_list, METADATA_HEADER, YOUTUBE_HEADER};
pub use table::{ChapterEntry, ChapterTable};
pub use timestamps::{format_timestamp, format_timestamp_str};
