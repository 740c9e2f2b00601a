//! Configuration for slidecast.
//!
//! Settings are organized into logical sections that map to TOML tables in
//! an optional `slidecast.toml`. Every field has a default, so a missing or
//! partial file always yields a usable configuration.
//!
//! Invocation state (source path, mode, image override) is *not* part of
//! the settings; it lives in [`crate::models::Options`] and is passed
//! explicitly into the orchestrator.

mod settings;

pub use settings::{
    ConfigError, ConfigResult, EncodeSettings, ScanSettings, Settings, TitleSettings,
};
