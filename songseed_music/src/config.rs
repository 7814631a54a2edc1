// Song configuration: the one structured record callers hand to the
// composer.
//
// Every field has a documented default, so a config file only needs the
// fields it wants to change. Files are JSON, read with serde; unknown
// fields are rejected so a typo doesn't silently fall back to a default.
// The `songseed` binary loads a file (if given) and then overrides fields
// from command-line flags.
//
// `validate` runs the same checks the pipeline would, in the same order
// (mode, key, degrees, bars, beats, rhythm), so an invalid config fails up
// front with the error the pipeline would have raised.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chord::triad_for_degree;
use crate::error::{Error, Result};
use crate::scale::Scale;

/// Chord degrees used when no progression is supplied (I-V-vi-IV).
pub const DEFAULT_PROGRESSION: [i64; 4] = [1, 5, 6, 4];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SongConfig {
    /// Tonic of the song. Flats are accepted. Default "C".
    pub key: String,
    /// One of major, minor, dorian, mixolydian (any case). Default "major".
    pub mode: String,
    /// Default 4.
    pub bars: u32,
    /// Default 4.
    pub beats_per_bar: u32,
    /// One-indexed chord degrees. `None` uses `DEFAULT_PROGRESSION`.
    pub progression: Option<Vec<i64>>,
    /// Melody durations in beats, cycled. `None` uses the melody default.
    pub rhythm: Option<Vec<f64>>,
    /// Default true.
    pub allow_rests: bool,
    /// Fixed seed for a reproducible melody. Default unseeded.
    pub seed: Option<u64>,
}

impl Default for SongConfig {
    fn default() -> Self {
        SongConfig {
            key: "C".to_string(),
            mode: "major".to_string(),
            bars: 4,
            beats_per_bar: 4,
            progression: None,
            rhythm: None,
            allow_rests: true,
            seed: None,
        }
    }
}

impl SongConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The chord degrees to use, falling back to the default pattern.
    pub fn degrees(&self) -> &[i64] {
        self.progression.as_deref().unwrap_or(&DEFAULT_PROGRESSION)
    }

    /// Check every field, failing with the first error the pipeline would
    /// raise for this config.
    pub fn validate(&self) -> Result<()> {
        let scale = Scale::from_key_mode(&self.key, &self.mode)?;
        for &degree in self.degrees() {
            triad_for_degree(&scale, degree)?;
        }
        if self.bars == 0 || self.beats_per_bar == 0 {
            return Err(Error::InvalidInput(format!(
                "bars and beats per bar must be positive (got {} bars of {} beats)",
                self.bars, self.beats_per_bar
            )));
        }
        if let Some(&bad) = self
            .rhythm
            .iter()
            .flatten()
            .find(|d| !(d.is_finite() && **d > 0.0))
        {
            return Err(Error::InvalidDuration(bad));
        }
        Ok(())
    }
}
