//! Settings struct with TOML-based sections.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Directory scanning settings.
    #[serde(default)]
    pub scan: ScanSettings,

    /// Video encoding settings.
    #[serde(default)]
    pub encode: EncodeSettings,

    /// Title-card rendering settings.
    #[serde(default)]
    pub title: TitleSettings,
}

/// Settings for selecting qualifying audio files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Audio file extension to match, without the dot (case-insensitive).
    #[serde(default = "default_audio_extension")]
    pub audio_extension: String,
}

fn default_audio_extension() -> String {
    "mp3".to_string()
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            audio_extension: default_audio_extension(),
        }
    }
}

/// Fixed encoding profile handed to ffmpeg.
///
/// The defaults reproduce the single codec/preset/quality profile the tool
/// always used: libx264 tuned for a still image, audio copied unmodified,
/// 1920x1080 output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeSettings {
    #[serde(default = "default_video_codec")]
    pub video_codec: String,

    #[serde(default = "default_preset")]
    pub preset: String,

    #[serde(default = "default_crf")]
    pub crf: u32,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Frame rate of the looped still-image stream.
    #[serde(default = "default_framerate")]
    pub framerate: u32,
}

fn default_video_codec() -> String {
    "libx264".to_string()
}

fn default_preset() -> String {
    "ultrafast".to_string()
}

fn default_crf() -> u32 {
    23
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

fn default_framerate() -> u32 {
    25
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            video_codec: default_video_codec(),
            preset: default_preset(),
            crf: default_crf(),
            width: default_width(),
            height: default_height(),
            framerate: default_framerate(),
        }
    }
}

/// Appearance of generated title cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleSettings {
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Background color name or hex value understood by ffmpeg.
    #[serde(default = "default_background")]
    pub background: String,

    /// Text color name or hex value understood by ffmpeg.
    #[serde(default = "default_foreground")]
    pub foreground: String,
}

fn default_font_size() -> u32 {
    46
}

fn default_background() -> String {
    "black".to_string()
}

fn default_foreground() -> String {
    "white".to_string()
}

impl Default for TitleSettings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            background: default_background(),
            foreground: default_foreground(),
        }
    }
}

/// Error loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl Settings {
    /// Load settings from a TOML file, or fall back to defaults when the
    /// file does not exist.
    ///
    /// An unreadable or malformed file is an error; silently ignoring it
    /// would mask typos in a user-supplied config.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings = toml::from_str(&raw)?;
        tracing::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_reproduce_fixed_profile() {
        let settings = Settings::default();
        assert_eq!(settings.encode.video_codec, "libx264");
        assert_eq!(settings.encode.width, 1920);
        assert_eq!(settings.encode.height, 1080);
        assert_eq!(settings.scan.audio_extension, "mp3");
        assert_eq!(settings.title.font_size, 46);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/slidecast.toml")).unwrap();
        assert_eq!(settings.encode.preset, "ultrafast");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[encode]\npreset = \"slow\"\ncrf = 18").unwrap();

        let settings = Settings::load_or_default(file.path()).unwrap();
        assert_eq!(settings.encode.preset, "slow");
        assert_eq!(settings.encode.crf, 18);
        // Untouched sections keep defaults
        assert_eq!(settings.encode.video_codec, "libx264");
        assert_eq!(settings.scan.audio_extension, "mp3");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();

        let result = Settings::load_or_default(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
