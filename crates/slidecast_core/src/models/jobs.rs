//! Job structures.

use std::path::PathBuf;

use super::Mode;

/// Options for one invocation, resolved from the command line.
///
/// Passed explicitly into the orchestrator at construction; nothing in the
/// crate reads invocation state from anywhere else.
#[derive(Debug, Clone)]
pub struct Options {
    /// Source path: an audio file or a directory of audio files.
    pub source: PathBuf,
    /// Conversion mode.
    pub mode: Mode,
    /// Pre-rendered title image to reuse instead of generating one.
    pub image_override: Option<PathBuf>,
    /// Detailed logging requested.
    pub verbose: bool,
}

impl Options {
    /// Create options for the given source with defaults for the rest.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            mode: Mode::default(),
            image_override: None,
            verbose: false,
        }
    }

    /// Set the conversion mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set a pre-rendered title image.
    pub fn with_image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image_override = Some(image.into());
        self
    }
}

/// One transcoder invocation: audio inputs, title image, output video and
/// an optional chapter-metadata document.
///
/// Owned exclusively by the orchestrator for the duration of one conversion.
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// Ordered audio inputs; more than one means they are concatenated.
    pub audio_inputs: Vec<PathBuf>,
    /// Title image looped for the duration of the audio.
    pub image_path: PathBuf,
    /// Output video file.
    pub output_path: PathBuf,
    /// Chapter-metadata document to embed, if any.
    pub chapters_path: Option<PathBuf>,
}

impl RenderJob {
    /// Create a job for a single audio file without chapters.
    pub fn single(audio: PathBuf, image_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            audio_inputs: vec![audio],
            image_path,
            output_path,
            chapters_path: None,
        }
    }

    /// Create a job concatenating several audio files with chapter metadata.
    pub fn merged(
        audio_inputs: Vec<PathBuf>,
        image_path: PathBuf,
        output_path: PathBuf,
        chapters_path: PathBuf,
    ) -> Self {
        Self {
            audio_inputs,
            image_path,
            output_path,
            chapters_path: Some(chapters_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_builder_works() {
        let options = Options::new("/music")
            .with_mode(Mode::Merge)
            .with_image("/tmp/cover.png");
        assert_eq!(options.mode, Mode::Merge);
        assert_eq!(options.image_override.as_deref(), Some("/tmp/cover.png".as_ref()));
        assert!(!options.verbose);
    }

    #[test]
    fn merged_job_carries_chapters() {
        let job = RenderJob::merged(
            vec![PathBuf::from("a.mp3"), PathBuf::from("b.mp3")],
            PathBuf::from("album.png"),
            PathBuf::from("album.mp4"),
            PathBuf::from("album.txt"),
        );
        assert_eq!(job.audio_inputs.len(), 2);
        assert!(job.chapters_path.is_some());
    }
}
