// Melody generation: a run of notes and rests that exactly fills a beat
// budget of `bars * beats_per_bar`.
//
// Durations come from a `RhythmCycle`, which walks the caller's rhythm
// pattern (or a fixed default) and wraps back to the start forever. Each
// step clamps the drawn duration to the beats still remaining, so the last
// event never overshoots the budget. The remainder is re-rounded to six
// decimals after every step to keep floating-point drift from leaving a
// sliver of a beat at the end.
//
// Randomness: one RNG per call, consumed in a fixed order per event (rest
// check first, then note choice), so a given seed reproduces the same
// melody. `generate_melody_with_rng` takes the RNG from the caller for
// tests and for callers that thread their own generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::scale::Scale;

/// Rhythm used when the caller supplies none (or an empty one).
pub const DEFAULT_DURATIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Chance that any given event is a rest when rests are allowed.
pub const REST_PROBABILITY: f64 = 0.2;

/// Remaining beats at or below this count as "budget filled".
const BEAT_EPSILON: f64 = 1e-9;

/// A single melodic event. `note == None` is a rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MelodyNote {
    pub note: Option<String>,
    /// Length in beats, rounded to 3 decimal places.
    pub duration: f64,
}

impl MelodyNote {
    pub fn is_rest(&self) -> bool {
        self.note.is_none()
    }
}

/// Cycles through a list of durations, restarting at index 0 after the
/// last one.
#[derive(Debug, Clone)]
pub struct RhythmCycle<'a> {
    durations: &'a [f64],
    cursor: usize,
}

impl<'a> RhythmCycle<'a> {
    /// Cycle over `pattern`, or over `DEFAULT_DURATIONS` when the pattern is
    /// missing or empty.
    pub fn new(pattern: Option<&'a [f64]>) -> Self {
        let durations = match pattern {
            Some(p) if !p.is_empty() => p,
            _ => &DEFAULT_DURATIONS[..],
        };
        RhythmCycle {
            durations,
            cursor: 0,
        }
    }

    pub fn next_duration(&mut self) -> f64 {
        let value = self.durations[self.cursor];
        self.cursor = (self.cursor + 1) % self.durations.len();
        value
    }
}

/// Parameters for one melody. Mirrors the melody-related fields of
/// `SongConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct MelodyOptions {
    pub bars: u32,
    pub beats_per_bar: u32,
    /// Durations (in beats) to cycle through. `None` or empty uses
    /// `DEFAULT_DURATIONS`.
    pub rhythm: Option<Vec<f64>>,
    pub allow_rests: bool,
    /// Fixed seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MelodyOptions {
    fn default() -> Self {
        MelodyOptions {
            bars: 4,
            beats_per_bar: 4,
            rhythm: None,
            allow_rests: true,
            seed: None,
        }
    }
}

impl MelodyOptions {
    /// Total beats the melody has to fill.
    pub fn total_beats(&self) -> f64 {
        self.bars as f64 * self.beats_per_bar as f64
    }
}

/// Generate a melody constrained to `scale`, with a fresh RNG seeded from
/// `options.seed`.
pub fn generate_melody(scale: &Scale, options: &MelodyOptions) -> Result<Vec<MelodyNote>> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_melody_with_rng(scale, options, &mut rng)
}

/// Generate a melody drawing from the supplied RNG.
pub fn generate_melody_with_rng(
    scale: &Scale,
    options: &MelodyOptions,
    rng: &mut impl Rng,
) -> Result<Vec<MelodyNote>> {
    if options.bars == 0 || options.beats_per_bar == 0 {
        return Err(Error::InvalidInput(format!(
            "bars and beats per bar must be positive (got {} bars of {} beats)",
            options.bars, options.beats_per_bar
        )));
    }

    let notes = scale.notes();
    let mut rhythm = RhythmCycle::new(options.rhythm.as_deref());
    let mut remaining = options.total_beats();
    let mut melody = Vec::new();

    while remaining > BEAT_EPSILON {
        let drawn = rhythm.next_duration();
        if !(drawn.is_finite() && drawn > 0.0) {
            return Err(Error::InvalidDuration(drawn));
        }
        let duration = drawn.min(remaining);
        let rounded = round_to(duration, 3);
        if rounded == 0.0 {
            // A sliver left over from durations finer than 1/1000 beat.
            remaining = round_to(remaining - duration, 6);
            continue;
        }

        let is_rest = options.allow_rests && rng.random::<f64>() < REST_PROBABILITY;
        let note = if is_rest {
            None
        } else {
            Some(notes[rng.random_range(0..notes.len())].clone())
        };

        log::trace!("melody event {}: {:?} for {} beats", melody.len(), note, duration);
        melody.push(MelodyNote {
            note,
            duration: rounded,
        });
        remaining = round_to(remaining - duration, 6);
    }

    Ok(melody)
}

/// Sum of all event durations, in beats.
pub fn total_duration(melody: &[MelodyNote]) -> f64 {
    melody.iter().map(|n| n.duration).sum()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
