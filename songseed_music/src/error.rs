// Error taxonomy for the generation pipeline.
//
// Every failure is raised at the point of detection and bubbles up through
// `?` unchanged: scale.rs raises `InvalidNote`/`UnsupportedMode`, chord.rs
// and `Scale::degree` raise `InvalidDegree`, melody.rs raises
// `InvalidInput`/`InvalidDuration`. Nothing here is recovered internally;
// the `songseed` binary maps any error to a nonzero exit.
//
// The two config variants are only produced by `SongConfig::load` and
// `SongConfig::from_json` (config.rs).

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The tonic normalized to a name outside the chromatic alphabet.
    #[error("invalid note name: {0:?}")]
    InvalidNote(String),

    /// The mode string is not one of the supported modes. Carries the
    /// string exactly as the caller passed it.
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    /// Degrees are one-indexed and must be positive.
    #[error("invalid degree {0}: degrees are one-indexed and must be positive")]
    InvalidDegree(i64),

    /// Non-positive bars or beats per bar.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A rhythm duration that is zero, negative, or not finite.
    #[error("invalid duration {0}: durations must be positive numbers")]
    InvalidDuration(f64),

    #[error("failed to read config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
