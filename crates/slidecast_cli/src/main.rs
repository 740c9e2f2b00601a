//! Command-line entry point for slidecast.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use slidecast_core::config::Settings;
use slidecast_core::logging::init_tracing;
use slidecast_core::models::{Mode, Options};
use slidecast_core::orchestrator::Orchestrator;

/// Convert audio files into single-image slideshow videos.
#[derive(Debug, Parser)]
#[command(name = "slidecast", version, about)]
struct Cli {
    /// Audio file or directory of audio files to convert.
    source: PathBuf,

    /// Merge all files in the directory into one album video with chapters.
    #[arg(short, long)]
    merge: bool,

    /// Reuse an existing title image instead of rendering one.
    #[arg(short, long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// Configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "slidecast.toml")]
    config: PathBuf,

    /// Enable detailed logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> Options {
        let mode = if self.merge { Mode::Merge } else { Mode::Single };
        let mut options = Options::new(self.source).with_mode(mode);
        if let Some(image) = self.image {
            options = options.with_image(image);
        }
        options.verbose = self.verbose;
        options
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match Settings::load_or_default(&cli.config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("could not load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = cli.into_options();
    match Orchestrator::new(options, settings).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_into_options() {
        let cli = Cli::try_parse_from([
            "slidecast",
            "--merge",
            "--image",
            "/art/cover.png",
            "-v",
            "/music/album",
        ])
        .unwrap();

        let options = cli.into_options();
        assert_eq!(options.source, PathBuf::from("/music/album"));
        assert_eq!(options.mode, Mode::Merge);
        assert_eq!(options.image_override, Some(PathBuf::from("/art/cover.png")));
        assert!(options.verbose);
    }

    #[test]
    fn source_is_required() {
        assert!(Cli::try_parse_from(["slidecast"]).is_err());
    }

    #[test]
    fn defaults_to_single_mode() {
        let cli = Cli::try_parse_from(["slidecast", "song.mp3"]).unwrap();
        let options = cli.into_options();
        assert_eq!(options.mode, Mode::Single);
        assert!(options.image_override.is_none());
    }
}
