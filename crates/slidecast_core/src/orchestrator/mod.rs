//! Conversion orchestrator.
//!
//! Sequences prober, chapter builder, title renderer and transcoder for one
//! run. Everything is fully sequential in input order: each external
//! invocation blocks until its process exits, and the first error aborts
//! the remaining work for the invocation (there is no per-file isolation).

mod errors;
mod scan;

pub use errors::{PipelineError, PipelineResult};
pub use scan::qualifying_files;

use std::fs;
use std::path::{Path, PathBuf};

use crate::chapters::{format_timestamp, render_metadata, render_youtube_list, ChapterTable};
use crate::config::Settings;
use crate::io::{CommandRunner, ProcessRunner};
use crate::models::{display_name, Mode, Options, RenderJob, Track};
use crate::probe::probe_duration_ms;
use crate::render::{FfmpegTitleRenderer, TitleRenderer};
use crate::transcode::FfmpegOptionsBuilder;

/// Orchestrates one conversion run.
pub struct Orchestrator {
    options: Options,
    settings: Settings,
    runner: Box<dyn CommandRunner>,
    renderer: Box<dyn TitleRenderer>,
}

impl Orchestrator {
    /// Create an orchestrator with the production runner and renderer.
    pub fn new(options: Options, settings: Settings) -> Self {
        let renderer = FfmpegTitleRenderer::from_settings(&settings);
        Self {
            options,
            settings,
            runner: Box::new(ProcessRunner::new()),
            renderer: Box::new(renderer),
        }
    }

    /// Substitute the command runner (used by tests).
    pub fn with_runner(mut self, runner: Box<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Substitute the title renderer (used by tests).
    pub fn with_renderer(mut self, renderer: Box<dyn TitleRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Run the conversion described by the options.
    ///
    /// A plain file is converted on its own; a directory is scanned for
    /// qualifying audio files and dispatched to single or merge mode.
    pub fn run(&self) -> PipelineResult<()> {
        let source = &self.options.source;
        if !source.exists() {
            return Err(PipelineError::SourceNotFound {
                path: source.clone(),
            });
        }

        if source.is_file() {
            tracing::info!("converting {}", source.display());
            return self.convert_file(source);
        }

        let files = qualifying_files(source, &self.settings.scan.audio_extension)?;
        match self.options.mode {
            Mode::Single => self.run_single(&files),
            Mode::Merge => self.run_merge(source, &files),
        }
    }

    /// Single mode: one independent output video per qualifying file.
    fn run_single(&self, files: &[PathBuf]) -> PipelineResult<()> {
        if files.is_empty() {
            tracing::warn!("nothing to convert in {}", self.options.source.display());
            return Ok(());
        }

        tracing::info!("converting {} files individually", files.len());
        for file in files {
            self.convert_file(file)?;
        }
        Ok(())
    }

    /// Convert one audio file into one video next to it.
    fn convert_file(&self, audio: &Path) -> PipelineResult<()> {
        let name = display_name(audio);
        let image = self.title_image(&name, audio.with_extension("png"))?;
        let job = RenderJob::single(audio.to_path_buf(), image, audio.with_extension("mp4"));
        self.transcode(&job)
    }

    /// Merge mode: the whole qualifying set becomes one album video with
    /// chapter markers, named after the containing directory.
    fn run_merge(&self, dir: &Path, files: &[PathBuf]) -> PipelineResult<()> {
        if files.is_empty() {
            return Err(PipelineError::NoQualifyingFiles {
                dir: dir.to_path_buf(),
            });
        }

        let album = album_name(dir);
        tracing::info!("merging {} tracks into album '{}'", files.len(), album);

        let mut tracks = Vec::with_capacity(files.len());
        for file in files {
            let duration_ms = probe_duration_ms(self.runner.as_ref(), file)?;
            tracks.push(Track::new(file.clone(), duration_ms));
        }

        let table = ChapterTable::from_tracks(&tracks);
        tracing::info!(
            "album runtime {} across {} tracks",
            format_timestamp(table.total_runtime_ms() / 1000),
            table.len()
        );

        let chapters_path = dir.join(format!("{}.txt", album));
        fs::write(&chapters_path, render_metadata(&table))
            .map_err(|e| PipelineError::io_error("writing chapter metadata", e))?;

        let youtube_path = dir.join(format!("{}-Youtube_Chapters.txt", album));
        fs::write(&youtube_path, render_youtube_list(&table))
            .map_err(|e| PipelineError::io_error("writing chapter list", e))?;
        tracing::info!("wrote chapter documents for '{}'", album);

        let image = self.title_image(&album, dir.join(format!("{}.png", album)))?;
        let job = RenderJob::merged(
            files.to_vec(),
            image,
            dir.join(format!("{}.mp4", album)),
            chapters_path,
        );
        self.transcode(&job)
    }

    /// Resolve the title image for a conversion: reuse the supplied one, or
    /// render a new card at `default_path`.
    fn title_image(&self, text: &str, default_path: PathBuf) -> PipelineResult<PathBuf> {
        if let Some(ref supplied) = self.options.image_override {
            tracing::debug!("reusing supplied title image {}", supplied.display());
            return Ok(supplied.clone());
        }

        self.renderer
            .render(self.runner.as_ref(), text, &default_path)?;
        Ok(default_path)
    }

    /// Invoke the transcoder for one job.
    fn transcode(&self, job: &RenderJob) -> PipelineResult<()> {
        // Best-effort removal of a stale output; ffmpeg is run without an
        // overwrite flag, so a leftover file would otherwise fail the job.
        if job.output_path.exists() {
            if let Err(e) = fs::remove_file(&job.output_path) {
                tracing::warn!(
                    "could not remove existing output {}: {}",
                    job.output_path.display(),
                    e
                );
            }
        }

        let tokens = FfmpegOptionsBuilder::new(job, &self.settings.encode).build();
        tracing::debug!("ffmpeg {}", tokens.join(" "));

        let output = self.runner.run("ffmpeg", &tokens)?;
        if !output.success {
            return Err(PipelineError::Transcode {
                exit_code: output.exit_code,
                message: output.stderr.trim().to_string(),
            });
        }

        tracing::info!("wrote {}", job.output_path.display());
        Ok(())
    }
}

/// Album name for a directory (its final path component).
fn album_name(dir: &Path) -> String {
    dir.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "album".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{CommandOutput, RunnerError};
    use crate::render::RenderResult;
    use std::fs::File;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    /// Runner that answers ffprobe with a fixed duration and ffmpeg with
    /// success, recording every invocation. Clones share the call log so a
    /// test can keep a handle after moving the runner into the orchestrator.
    #[derive(Clone)]
    struct RecordingRunner {
        probe_secs: &'static str,
        calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    }

    impl RecordingRunner {
        fn new(probe_secs: &'static str) -> Self {
            Self {
                probe_secs,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls_for(&self, program: &str) -> Vec<Vec<String>> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|(p, _)| p == program)
                .map(|(_, args)| args.clone())
                .collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, RunnerError> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));

            let stdout = if program == "ffprobe" {
                format!("{}\n", self.probe_secs)
            } else {
                String::new()
            };

            Ok(CommandOutput {
                stdout,
                stderr: String::new(),
                exit_code: 0,
                success: true,
            })
        }
    }

    #[derive(Clone)]
    struct RecordingRenderer {
        calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn rendered_titles(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(text, _)| text.clone())
                .collect()
        }
    }

    impl TitleRenderer for RecordingRenderer {
        fn render(
            &self,
            _runner: &dyn CommandRunner,
            text: &str,
            output: &Path,
        ) -> RenderResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), output.to_path_buf()));
            Ok(())
        }
    }

    fn orchestrator(options: Options) -> (Orchestrator, RecordingRunner, RecordingRenderer) {
        let runner = RecordingRunner::new("10.0");
        let renderer = RecordingRenderer::new();
        let orch = Orchestrator::new(options, Settings::default())
            .with_runner(Box::new(runner.clone()))
            .with_renderer(Box::new(renderer.clone()));
        (orch, runner, renderer)
    }

    #[test]
    fn missing_source_is_an_error() {
        let (orch, _, _) = orchestrator(Options::new("/nonexistent/input"));
        assert!(matches!(
            orch.run(),
            Err(PipelineError::SourceNotFound { .. })
        ));
    }

    #[test]
    fn single_mode_converts_each_file_independently() {
        let dir = tempdir().unwrap();
        for name in ["01.mp3", "02.mp3", "03.mp3", "notes.txt"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("bonus")).unwrap();

        let (orch, runner, renderer) = orchestrator(Options::new(dir.path()));
        orch.run().unwrap();

        assert_eq!(renderer.rendered_titles(), vec!["01", "02", "03"]);

        let ffmpeg_calls = runner.calls_for("ffmpeg");
        assert_eq!(ffmpeg_calls.len(), 3);
        for (args, stem) in ffmpeg_calls.iter().zip(["01", "02", "03"]) {
            let output = args.last().unwrap();
            assert!(output.ends_with(&format!("{}.mp4", stem)));
        }

        // Single mode never probes durations.
        assert!(runner.calls_for("ffprobe").is_empty());
    }

    #[test]
    fn single_mode_reuses_supplied_image() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("song.mp3")).unwrap();

        let options = Options::new(dir.path()).with_image("/art/cover.png");
        let (orch, runner, renderer) = orchestrator(options);
        orch.run().unwrap();

        assert!(renderer.rendered_titles().is_empty());

        let ffmpeg_calls = runner.calls_for("ffmpeg");
        assert!(ffmpeg_calls[0].iter().any(|a| a == "/art/cover.png"));
    }

    #[test]
    fn merge_mode_writes_chapter_documents_and_concatenates() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("01 Intro.mp3")).unwrap();
        File::create(dir.path().join("02 Theme.mp3")).unwrap();

        let options = Options::new(dir.path()).with_mode(Mode::Merge);
        let (orch, runner, _) = orchestrator(options);
        orch.run().unwrap();

        let album = dir.path().file_name().unwrap().to_str().unwrap();

        let metadata =
            fs::read_to_string(dir.path().join(format!("{}.txt", album))).unwrap();
        assert!(metadata.starts_with(";FFMETADATA1\n"));
        assert!(metadata.contains("START=1\n"));
        assert!(metadata.contains("END=10000\n"));
        assert!(metadata.contains("START=10001\n"));
        assert!(metadata.contains("END=20000\n"));
        assert!(metadata.contains("title=01 Intro\n"));

        let listing = fs::read_to_string(
            dir.path().join(format!("{}-Youtube_Chapters.txt", album)),
        )
        .unwrap();
        assert!(listing.contains("00:00 - 01 Intro"));
        assert!(listing.contains("00:10 - 02 Theme"));

        assert_eq!(runner.calls_for("ffprobe").len(), 2);

        let ffmpeg_calls = runner.calls_for("ffmpeg");
        assert_eq!(ffmpeg_calls.len(), 1);
        let joined = ffmpeg_calls[0].join(" ");
        assert!(joined.contains("concat:"));
        assert!(joined.contains("-map_metadata 2"));
        assert!(ffmpeg_calls[0]
            .last()
            .unwrap()
            .ends_with(&format!("{}.mp4", album)));
    }

    #[test]
    fn merge_mode_without_tracks_fails_and_writes_nothing() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();

        let options = Options::new(dir.path()).with_mode(Mode::Merge);
        let (orch, _, _) = orchestrator(options);

        assert!(matches!(
            orch.run(),
            Err(PipelineError::NoQualifyingFiles { .. })
        ));

        let written: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|n| n.ends_with(".txt") && n != "readme.txt")
            .collect();
        assert!(written.is_empty());
    }

    #[test]
    fn existing_output_is_removed_before_transcoding() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("song.mp3")).unwrap();
        let stale = dir.path().join("song.mp4");
        fs::write(&stale, b"old video").unwrap();

        let (orch, _, _) = orchestrator(Options::new(dir.path()));
        orch.run().unwrap();

        // The recording runner produces no file, so the stale output being
        // gone proves it was removed before the transcoder ran.
        assert!(!stale.exists());
    }

    #[test]
    fn album_name_is_final_path_component() {
        assert_eq!(album_name(Path::new("/music/My Album")), "My Album");
        assert_eq!(album_name(Path::new("/music/My.Album")), "My.Album");
    }
}
