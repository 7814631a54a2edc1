// Composer: the single entry point that turns a `SongConfig` into a `Song`.
//
// Builds one `Scale`, then hands that same scale to chord.rs for the
// progression and to melody.rs for the melody. Holds no state between
// calls, and any error from a stage is returned unchanged.

use serde::Serialize;

use crate::chord::{ChordEntry, generate_progression};
use crate::config::SongConfig;
use crate::error::Result;
use crate::melody::{MelodyNote, MelodyOptions, generate_melody};
use crate::scale::Scale;

/// A generated song sketch, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Song {
    pub scale: Scale,
    pub progression: Vec<ChordEntry>,
    pub melody: Vec<MelodyNote>,
}

/// Generate a song from `config`.
pub fn create_song(config: &SongConfig) -> Result<Song> {
    let scale = Scale::from_key_mode(&config.key, &config.mode)?;
    log::debug!("scale {} {}: {:?}", scale.tonic(), scale.mode(), scale.notes());

    let progression = generate_progression(&scale, config.degrees())?;
    log::debug!("progression: {} chords", progression.len());

    let options = MelodyOptions {
        bars: config.bars,
        beats_per_bar: config.beats_per_bar,
        rhythm: config.rhythm.clone(),
        allow_rests: config.allow_rests,
        seed: config.seed,
    };
    let melody = generate_melody(&scale, &options)?;
    log::debug!(
        "melody: {} events over {} beats",
        melody.len(),
        options.total_beats()
    );

    Ok(Song {
        scale,
        progression,
        melody,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::melody::total_duration;

    #[test]
    fn test_create_song_structure() {
        let config = SongConfig {
            bars: 2,
            beats_per_bar: 4,
            allow_rests: false,
            seed: Some(42),
            ..SongConfig::default()
        };
        let song = create_song(&config).unwrap();

        assert_eq!(song.scale.tonic(), "C");
        assert_eq!(song.progression.len(), 4);
        assert!((total_duration(&song.melody) - 8.0).abs() < 1e-6);
        for event in &song.melody {
            let note = event.note.as_deref().expect("rests are disabled");
            assert!(song.scale.contains(note));
        }
    }

    #[test]
    fn test_default_progression_is_one_five_six_four() {
        let song = create_song(&SongConfig {
            seed: Some(1),
            ..SongConfig::default()
        })
        .unwrap();
        let degrees: Vec<i64> = song.progression.iter().map(|c| c.degree).collect();
        assert_eq!(degrees, vec![1, 5, 6, 4]);
        assert_eq!(song.progression[1].notes, ["G", "B", "D"]);
    }

    #[test]
    fn test_explicit_progression_and_rhythm() {
        let config = SongConfig {
            key: "A".to_string(),
            mode: "minor".to_string(),
            bars: 1,
            progression: Some(vec![1, 4, 5]),
            rhythm: Some(vec![1.0]),
            seed: Some(8),
            ..SongConfig::default()
        };
        let song = create_song(&config).unwrap();
        assert_eq!(song.progression.len(), 3);
        assert_eq!(song.progression[0].notes, ["A", "C", "E"]);
        assert_eq!(song.melody.len(), 4);
        assert!(song.melody.iter().all(|n| n.duration == 1.0));
    }

    #[test]
    fn test_same_seed_same_song() {
        let config = SongConfig {
            key: "Gb".to_string(),
            mode: "mixolydian".to_string(),
            seed: Some(2024),
            ..SongConfig::default()
        };
        assert_eq!(create_song(&config).unwrap(), create_song(&config).unwrap());
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let bad_mode = SongConfig {
            mode: "phrygian".to_string(),
            ..SongConfig::default()
        };
        assert!(matches!(
            create_song(&bad_mode),
            Err(Error::UnsupportedMode(m)) if m == "phrygian"
        ));

        let bad_degree = SongConfig {
            progression: Some(vec![0]),
            ..SongConfig::default()
        };
        assert!(matches!(create_song(&bad_degree), Err(Error::InvalidDegree(0))));

        let bad_bars = SongConfig {
            bars: 0,
            ..SongConfig::default()
        };
        assert!(matches!(create_song(&bad_bars), Err(Error::InvalidInput(_))));
    }
}
