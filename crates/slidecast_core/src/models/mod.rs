//! Data models for slidecast.
//!
//! This module contains the core data structures used throughout the crate:
//! - Run mode and invocation options
//! - Media structures (tracks)
//! - Job structures (render jobs handed to the transcoder)

mod enums;
mod jobs;
mod media;

pub use enums::Mode;
pub use jobs::{Options, RenderJob};
pub use media::{display_name, Track};
