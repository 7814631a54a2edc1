// Songseed CLI entry point.
//
// Builds a `SongConfig` (from an optional JSON file, then command-line
// flags on top), runs the composer, and writes the song as indented JSON to
// stdout or a file. Any error exits with a nonzero status.
//
// Usage:
//   cargo run -p songseed_music -- [--key C] [--mode major] [--bars 4]
//     [--beats-per-bar 4] [--progression 1 5 6 4] [--rhythm 0.5 1]
//     [--seed N] [--no-rests] [--config song.json] [--output song.json]
//
// Modes: major, minor, dorian, mixolydian
// Set RUST_LOG=debug to trace the pipeline stages.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use songseed_music::{SongConfig, create_song};

#[derive(Debug, Parser)]
#[command(name = "songseed", version, about = "Generate a small musical sketch")]
struct Cli {
    /// Key of the song (default: C)
    #[arg(long)]
    key: Option<String>,

    /// Scale mode: major, minor, dorian, mixolydian (default: major)
    #[arg(long)]
    mode: Option<String>,

    /// Number of bars to generate (default: 4)
    #[arg(long)]
    bars: Option<u32>,

    /// Beats per bar (default: 4)
    #[arg(long)]
    beats_per_bar: Option<u32>,

    /// Space separated chord degrees, e.g. --progression 1 5 6 4
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    progression: Option<Vec<i64>>,

    /// Space separated melody durations in beats, cycled, e.g. --rhythm 0.5 0.5 1
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    rhythm: Option<Vec<f64>>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Disable rests in the generated melody
    #[arg(long)]
    no_rests: bool,

    /// JSON file with song settings; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the song to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Layer the flags that were given over `base`.
    fn apply(&self, mut base: SongConfig) -> SongConfig {
        if let Some(key) = &self.key {
            base.key = key.clone();
        }
        if let Some(mode) = &self.mode {
            base.mode = mode.clone();
        }
        if let Some(bars) = self.bars {
            base.bars = bars;
        }
        if let Some(beats) = self.beats_per_bar {
            base.beats_per_bar = beats;
        }
        if let Some(progression) = &self.progression {
            base.progression = Some(progression.clone());
        }
        if let Some(rhythm) = &self.rhythm {
            base.rhythm = Some(rhythm.clone());
        }
        if let Some(seed) = self.seed {
            base.seed = Some(seed);
        }
        if self.no_rests {
            base.allow_rests = false;
        }
        base
    }

    fn song_config(&self) -> Result<SongConfig> {
        let base = match &self.config {
            Some(path) => SongConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SongConfig::default(),
        };
        Ok(self.apply(base))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.song_config()?;
    config.validate().context("invalid song settings")?;
    log::info!("generating song: {config:?}");

    let song = create_song(&config).context("generating song")?;
    let payload = serde_json::to_string_pretty(&song)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, format!("{payload}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {} melody events to {}", song.melody.len(), path.display());
        }
        None => println!("{payload}"),
    }

    Ok(())
}
