//! Enumerations shared across the crate.

use std::fmt;

/// Conversion mode for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One independent output video per qualifying audio file.
    #[default]
    Single,
    /// All qualifying files in a directory concatenated into one
    /// output video with chapter markers.
    Merge,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single => write!(f, "single"),
            Mode::Merge => write!(f, "merge"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_displays_lowercase() {
        assert_eq!(Mode::Single.to_string(), "single");
        assert_eq!(Mode::Merge.to_string(), "merge");
    }
}
