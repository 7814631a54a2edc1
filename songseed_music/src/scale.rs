// Scale construction: a tonic plus a mode expanded into seven note names.
//
// `build_scale` does the raw expansion; `Scale` wraps the result as an
// immutable value that knows its tonic and mode and supports one-indexed
// degree lookup and rotation. A `Scale` is built once per song by
// composer.rs and shared read-only with chord.rs and melody.rs.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::note::{CHROMATIC, normalize_note, note_index};

/// Return the notes of the requested scale, tonic first.
///
/// The mode is checked before the root, so a bad mode is reported even if
/// the root is also bad. Flats and enharmonics in `root` are accepted and
/// every returned note uses the sharp spelling.
pub fn build_scale(root: &str, mode: &str) -> Result<Vec<String>> {
    let mode: Mode = mode.parse()?;
    let root_index = note_index(&normalize_note(root))?;
    Ok(spell(root_index, mode))
}

fn spell(root_index: usize, mode: Mode) -> Vec<String> {
    mode.intervals()
        .iter()
        .map(|&interval| CHROMATIC[(root_index + interval as usize) % CHROMATIC.len()].to_string())
        .collect()
}

/// An immutable scale. `notes[0]` is always the tonic and `notes.len()`
/// always matches the mode's interval table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Scale {
    tonic: String,
    mode: Mode,
    notes: Vec<String>,
}

impl Scale {
    /// Build a scale from user-supplied tonic and mode strings.
    pub fn from_key_mode(tonic: &str, mode: &str) -> Result<Self> {
        let notes = build_scale(tonic, mode)?;
        Ok(Scale {
            tonic: normalize_note(tonic),
            mode: mode.parse()?,
            notes,
        })
    }

    pub fn tonic(&self) -> &str {
        &self.tonic
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, note: &str) -> bool {
        self.notes.iter().any(|n| n == note)
    }

    /// The note at a one-indexed scale degree. Degrees past the end wrap
    /// around, so `degree(8)` of a seven-note scale is the tonic again.
    pub fn degree(&self, number: i64) -> Result<&str> {
        if number <= 0 {
            return Err(Error::InvalidDegree(number));
        }
        let index = ((number - 1) as usize) % self.notes.len();
        Ok(&self.notes[index])
    }

    /// A new scale starting `steps` degrees further up, wrapping around.
    /// The mode label is kept as-is even though the rotated step pattern
    /// no longer matches it.
    pub fn rotated(&self, steps: i64) -> Scale {
        let steps = steps.rem_euclid(self.notes.len() as i64) as usize;
        let mut notes = self.notes.clone();
        notes.rotate_left(steps);
        Scale {
            tonic: notes[0].clone(),
            mode: self.mode,
            notes,
        }
    }
}
