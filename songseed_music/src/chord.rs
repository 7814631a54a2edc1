// Triads and chord progressions built from scale degrees.
//
// A triad stacks diatonic thirds along the scale itself (root, third and
// fifth scale steps), so chord quality falls out of the scale's step
// pattern. The seventh degree of a major scale comes out diminished; it is
// not relabeled or corrected toward semitone-based chord shapes.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::scale::Scale;

/// Number of scale notes appended past the end so that `index + 4` never
/// runs off the extended sequence.
const LOOKAHEAD: usize = 4;

/// One chord in a progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordEntry {
    /// One-indexed position in the progression.
    pub position: usize,
    /// The scale degree the chord is rooted on, as requested.
    pub degree: i64,
    /// Root, third and fifth.
    pub notes: [String; 3],
}

/// The triad rooted at a one-indexed scale degree. Degrees past the end of
/// the scale wrap around.
pub fn triad_for_degree(scale: &Scale, degree: i64) -> Result<[String; 3]> {
    if degree <= 0 {
        return Err(Error::InvalidDegree(degree));
    }
    let notes = scale.notes();
    let extended: Vec<&String> = notes.iter().chain(notes.iter().take(LOOKAHEAD)).collect();
    let index = ((degree - 1) as usize) % notes.len();
    Ok([
        extended[index].clone(),
        extended[index + 2].clone(),
        extended[index + 4].clone(),
    ])
}

/// A chord for every degree in `pattern`, in order. Repeated degrees yield
/// repeated chords; an empty pattern yields an empty progression.
pub fn generate_progression(scale: &Scale, pattern: &[i64]) -> Result<Vec<ChordEntry>> {
    pattern
        .iter()
        .enumerate()
        .map(|(i, &degree)| {
            Ok(ChordEntry {
                position: i + 1,
                degree,
                notes: triad_for_degree(scale, degree)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_major() -> Scale {
        Scale::from_key_mode("C", "major").unwrap()
    }

    #[test]
    fn test_triads_in_c_major() {
        let scale = c_major();
        assert_eq!(triad_for_degree(&scale, 1).unwrap(), ["C", "E", "G"]);
        assert_eq!(triad_for_degree(&scale, 4).unwrap(), ["F", "A", "C"]);
        assert_eq!(triad_for_degree(&scale, 5).unwrap(), ["G", "B", "D"]);
        assert_eq!(triad_for_degree(&scale, 6).unwrap(), ["A", "C", "E"]);
    }

    #[test]
    fn test_seventh_degree_stays_diatonic() {
        // B D F: diminished, straight from the scale.
        assert_eq!(triad_for_degree(&c_major(), 7).unwrap(), ["B", "D", "F"]);
    }

    #[test]
    fn test_triad_follows_mode() {
        let a_minor = Scale::from_key_mode("A", "minor").unwrap();
        assert_eq!(triad_for_degree(&a_minor, 1).unwrap(), ["A", "C", "E"]);
        assert_eq!(triad_for_degree(&a_minor, 3).unwrap(), ["C", "E", "G"]);
    }

    #[test]
    fn test_degree_wraps() {
        let scale = c_major();
        assert_eq!(
            triad_for_degree(&scale, 8).unwrap(),
            triad_for_degree(&scale, 1).unwrap()
        );
        assert_eq!(
            triad_for_degree(&scale, 12).unwrap(),
            triad_for_degree(&scale, 5).unwrap()
        );
    }

    #[test]
    fn test_non_positive_degree_fails() {
        let scale = c_major();
        assert!(matches!(triad_for_degree(&scale, 0), Err(Error::InvalidDegree(0))));
        assert!(matches!(triad_for_degree(&scale, -2), Err(Error::InvalidDegree(-2))));
    }

    #[test]
    fn test_progression_positions() {
        let scale = c_major();
        let pattern: [i64; 6] = [1, 5, 6, 4, 1, 1];
        let progression = generate_progression(&scale, &pattern).unwrap();
        assert_eq!(progression.len(), pattern.len());
        let positions: Vec<usize> = progression.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
        let degrees: Vec<i64> = progression.iter().map(|c| c.degree).collect();
        assert_eq!(degrees, pattern);
        assert_eq!(progression[4].notes, progression[5].notes);
    }

    #[test]
    fn test_empty_progression() {
        assert!(generate_progression(&c_major(), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_progression_stops_at_invalid_degree() {
        assert!(matches!(
            generate_progression(&c_major(), &[1, 0, 4]),
            Err(Error::InvalidDegree(0))
        ));
    }

    #[test]
    fn test_chord_entry_serialization() {
        let progression = generate_progression(&c_major(), &[2]).unwrap();
        let json = serde_json::to_value(&progression).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"position": 1, "degree": 2, "notes": ["D", "F", "A"]}])
        );
    }
}
