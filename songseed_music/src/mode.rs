// Mode definitions: named interval patterns applied to a tonic.
//
// Only four seven-note modes are modeled, each as semitone offsets from the
// tonic. Mode names are parsed case-insensitively; anything else is an
// `UnsupportedMode` error carrying the caller's original string.
//
// Used by scale.rs to expand a tonic into a note sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The supported modes, serialized by their lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// C D E F G A B
    Major,
    /// Natural minor: C D Eb F G Ab Bb
    Minor,
    /// Minor with raised 6th: C D Eb F G A Bb
    Dorian,
    /// Major with lowered 7th: C D E F G A Bb
    Mixolydian,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Major, Mode::Minor, Mode::Dorian, Mode::Mixolydian];

    /// Semitone offsets from the tonic for degrees 1-7.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Mode::Major => &[0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Mode::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Mode::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
            Mode::Dorian => "dorian",
            Mode::Mixolydian => "mixolydian",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Mode::ALL
            .into_iter()
            .find(|m| m.name() == lowered)
            .ok_or_else(|| Error::UnsupportedMode(s.to_string()))
    }
}
