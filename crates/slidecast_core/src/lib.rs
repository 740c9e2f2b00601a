//! slidecast core - backend logic for the slidecast converter.
//!
//! This crate contains all business logic with zero CLI dependencies:
//! duration probing, chapter-table synthesis, ffmpeg command building
//! and the conversion orchestrator. The actual media work is delegated
//! to external ffmpeg/ffprobe binaries.

pub mod chapters;
pub mod config;
pub mod io;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod probe;
pub mod render;
pub mod transcode;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
