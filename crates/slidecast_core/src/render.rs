//! Title-card image generation.
//!
//! The renderer is an external collaborator: the core only requires that a
//! 1920x1080 (configurable) image exists at the output path afterwards. The
//! production implementation rasterizes the title text with ffmpeg's lavfi
//! `color` source and a centered `drawtext` filter.

use std::path::Path;

use thiserror::Error;

use crate::config::Settings;
use crate::io::{CommandRunner, RunnerError};

/// Error generating a title image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("title rendering failed with exit code {exit_code}: {message}")]
    CommandFailed { exit_code: i32, message: String },

    #[error("title renderer produced no image at {path}")]
    MissingOutput { path: String },

    #[error(transparent)]
    Runner(#[from] RunnerError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Renders a text string to an image file.
pub trait TitleRenderer: Send + Sync {
    /// Render `text` to an image at `output`. The image must exist at
    /// `output` on success.
    fn render(&self, runner: &dyn CommandRunner, text: &str, output: &Path) -> RenderResult<()>;
}

/// Production renderer shelling out to ffmpeg.
#[derive(Debug, Clone)]
pub struct FfmpegTitleRenderer {
    width: u32,
    height: u32,
    font_size: u32,
    background: String,
    foreground: String,
}

impl FfmpegTitleRenderer {
    /// Build a renderer from settings (canvas size from the encode section,
    /// colors and font size from the title section).
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            width: settings.encode.width,
            height: settings.encode.height,
            font_size: settings.title.font_size,
            background: settings.title.background.clone(),
            foreground: settings.title.foreground.clone(),
        }
    }

    fn build_args(&self, text: &str, output: &Path) -> Vec<String> {
        let source = format!(
            "color=c={}:s={}x{}",
            self.background, self.width, self.height
        );
        let filter = format!(
            "drawtext=text='{}':fontcolor={}:fontsize={}:x=(w-text_w)/2:y=(h-text_h)/2",
            escape_drawtext(text),
            self.foreground,
            self.font_size
        );

        vec![
            "-y".to_string(),
            "-f".to_string(),
            "lavfi".to_string(),
            "-i".to_string(),
            source,
            "-vf".to_string(),
            filter,
            "-frames:v".to_string(),
            "1".to_string(),
            output.to_string_lossy().to_string(),
        ]
    }
}

impl TitleRenderer for FfmpegTitleRenderer {
    fn render(&self, runner: &dyn CommandRunner, text: &str, output: &Path) -> RenderResult<()> {
        let args = self.build_args(text, output);
        tracing::debug!("rendering title image: ffmpeg {}", args.join(" "));

        let result = runner.run("ffmpeg", &args)?;
        if !result.success {
            return Err(RenderError::CommandFailed {
                exit_code: result.exit_code,
                message: result.stderr.trim().to_string(),
            });
        }

        if !output.exists() {
            return Err(RenderError::MissingOutput {
                path: output.display().to_string(),
            });
        }

        tracing::info!("rendered title image {}", output.display());
        Ok(())
    }
}

/// Escape characters that are special inside a quoted drawtext value.
fn escape_drawtext(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '\'' | ':' | '%' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
