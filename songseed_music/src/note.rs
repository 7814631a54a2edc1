// Note names and the 12-tone chromatic alphabet.
//
// All notes are spelled with sharps. User input may arrive with flats or
// unusual enharmonics ("Db", "E#") and is folded onto the sharp spelling by
// `normalize_note`. Normalization is lenient: an unrecognized name passes
// through uppercased and only fails later, when `note_index` looks it up.
//
// Used by scale.rs to locate the tonic before applying a mode's intervals.

use crate::error::{Error, Result};

/// The canonical chromatic alphabet. A name's position is its pitch class
/// (0 = C).
pub const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings and sharp enharmonics mapped to their canonical name.
/// Keys are uppercase because lookup happens after uppercasing.
const ENHARMONICS: [(&str, &str); 9] = [
    ("CB", "B"),
    ("DB", "C#"),
    ("EB", "D#"),
    ("FB", "E"),
    ("GB", "F#"),
    ("AB", "G#"),
    ("BB", "A#"),
    ("E#", "F"),
    ("B#", "C"),
];

/// Convert user input into its canonical sharp-based spelling.
///
/// Input is trimmed and uppercased. Canonical names are returned as-is,
/// known flats and enharmonics are translated, and anything else comes back
/// uppercased without complaint.
pub fn normalize_note(name: &str) -> String {
    let cleaned = name.trim().to_uppercase();
    if CHROMATIC.contains(&cleaned.as_str()) {
        return cleaned;
    }
    ENHARMONICS
        .iter()
        .find(|(alias, _)| *alias == cleaned)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(cleaned)
}

/// Pitch class of an already-normalized note name.
pub fn note_index(name: &str) -> Result<usize> {
    CHROMATIC
        .iter()
        .position(|&n| n == name)
        .ok_or_else(|| Error::InvalidNote(name.to_string()))
}

/// Whether `name` is one of the 12 canonical spellings.
pub fn is_canonical(name: &str) -> bool {
    CHROMATIC.contains(&name)
}
