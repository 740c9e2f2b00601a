//! ffmpeg command options builder.
//!
//! Builds the argv tokens for one transcoder invocation from a [`RenderJob`]
//! and the encode settings. The profile is fixed: the title image is looped
//! for the duration of the audio (`-shortest`), the audio stream is copied
//! unmodified, and chapter metadata is mapped in when supplied. Building is
//! pure string work and unit-testable without spawning anything.

use std::path::Path;

use crate::config::EncodeSettings;
use crate::models::RenderJob;

/// Builder for ffmpeg command-line options.
pub struct FfmpegOptionsBuilder<'a> {
    job: &'a RenderJob,
    encode: &'a EncodeSettings,
}

impl<'a> FfmpegOptionsBuilder<'a> {
    /// Create a new options builder.
    pub fn new(job: &'a RenderJob, encode: &'a EncodeSettings) -> Self {
        Self { job, encode }
    }

    /// Build the complete ffmpeg argv tokens.
    pub fn build(&self) -> Vec<String> {
        let mut tokens = vec!["-nostdin".to_string()];

        // Input 0: the looped title image.
        tokens.push("-loop".to_string());
        tokens.push("1".to_string());
        tokens.push("-framerate".to_string());
        tokens.push(self.encode.framerate.to_string());
        tokens.push("-i".to_string());
        tokens.push(self.job.image_path.to_string_lossy().to_string());

        // Input 1: the audio (single file or concatenation spec).
        tokens.push("-i".to_string());
        tokens.push(audio_input(self.job));

        // Input 2: chapter metadata, mapped onto the output.
        if let Some(ref chapters) = self.job.chapters_path {
            tokens.push("-i".to_string());
            tokens.push(chapters.to_string_lossy().to_string());
            tokens.push("-map_metadata".to_string());
            tokens.push("2".to_string());
        }

        tokens.push("-map".to_string());
        tokens.push("0:v".to_string());
        tokens.push("-map".to_string());
        tokens.push("1:a".to_string());

        tokens.push("-c:v".to_string());
        tokens.push(self.encode.video_codec.clone());
        tokens.push("-tune".to_string());
        tokens.push("stillimage".to_string());
        tokens.push("-preset".to_string());
        tokens.push(self.encode.preset.clone());
        tokens.push("-crf".to_string());
        tokens.push(self.encode.crf.to_string());

        tokens.push("-c:a".to_string());
        tokens.push("copy".to_string());

        tokens.push("-pix_fmt".to_string());
        tokens.push("yuv420p".to_string());
        tokens.push("-vf".to_string());
        tokens.push(format!("scale={}:{}", self.encode.width, self.encode.height));

        tokens.push("-shortest".to_string());

        tokens.push(self.job.output_path.to_string_lossy().to_string());
        tokens
    }
}

/// Serialize the job's audio inputs into one ffmpeg input argument.
pub fn audio_input(job: &RenderJob) -> String {
    if job.audio_inputs.len() == 1 {
        job.audio_inputs[0].to_string_lossy().to_string()
    } else {
        concat_spec(&job.audio_inputs)
    }
}

/// Pipe-delimited `concat:` protocol spec over the given paths, in order.
pub fn concat_spec(paths: &[impl AsRef<Path>]) -> String {
    let joined = paths
        .iter()
        .map(|p| p.as_ref().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("|");
    format!("concat:{}", joined)
}
