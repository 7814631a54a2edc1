// Songseed: scale, chord progression, and melody sketches for songwriting.
//
// Generates small musical starting points from simple music-theory rules.
// Nothing here renders audio or notation; the output is a plain `Song`
// value that the `songseed` binary serializes to JSON.
//
// Architecture (leaf-first):
// - error.rs: Error taxonomy shared by every stage
// - note.rs: Chromatic alphabet and note-name normalization (flats -> sharps)
// - mode.rs: The four supported modes and their interval tables
// - scale.rs: Scale construction, degree lookup, rotation
// - chord.rs: Diatonic triads and chord progressions from scale degrees
// - melody.rs: Beat-budgeted melody generation over a cycling rhythm
// - config.rs: `SongConfig`, the configuration record (JSON-loadable)
// - composer.rs: `create_song`, which runs the stages above into a `Song`
//
// Every call is a pure function of its inputs plus, for the melody, a seed.
// The same seed always reproduces the same song.

pub mod chord;
pub mod composer;
pub mod config;
pub mod error;
pub mod melody;
pub mod mode;
pub mod note;
pub mod scale;

pub use chord::{ChordEntry, generate_progression, triad_for_degree};
pub use composer::{Song, create_song};
pub use config::SongConfig;
pub use error::{Error, Result};
pub use melody::{MelodyNote, MelodyOptions, generate_melody};
pub use mode::Mode;
pub use note::normalize_note;
pub use scale::{Scale, build_scale};
