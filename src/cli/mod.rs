//! CLI interface for NoteBender

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Harmonica tabs, circle of fifths and pitch matching
#[derive(Parser)]
#[command(name = "notebender")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "notebender.yaml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the hole layout of a harmonica
    Layout {
        /// Harmonica key label or note (overrides config)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Find the tab for one or more notes
    Tab {
        /// Harmonica key label or note (overrides config)
        #[arg(short, long)]
        key: Option<String>,

        /// Notes with octave, e.g. C4 Bb4 F#5
        #[arg(required = true)]
        notes: Vec<String>,
    },

    /// Show scale, triads and chord colours for a root and mode
    Circle {
        /// Root of the parent major scale (overrides config)
        #[arg(short, long)]
        root: Option<String>,

        /// Mode name (overrides config)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Convert frequencies to notes, cents and tabs
    Pitch {
        /// Harmonica key label or note (overrides config)
        #[arg(short, long)]
        key: Option<String>,

        /// Frequencies in Hz
        #[arg(required = true)]
        frequencies: Vec<f64>,
    },

    /// Follow a recorded pitch stream against the harmonica layout
    Listen {
        /// Recording of detector samples (.yaml or .json)
        recording: PathBuf,

        /// Harmonica key label or note (overrides config)
        #[arg(short, long)]
        key: Option<String>,

        /// Minimum clarity (overrides config)
        #[arg(long)]
        min_clarity: Option<f64>,
    },

    /// Tab a score, searching for a playable transposition
    Transpose {
        /// Score file (.yaml or .json)
        score: PathBuf,

        /// Harmonica key label or note (overrides config)
        #[arg(short, long)]
        key: Option<String>,

        /// Use this offset instead of searching
        #[arg(
            short,
            long,
            allow_hyphen_values = true,
            value_parser = clap::value_parser!(i32).range(-144..=144)
        )]
        offset: Option<i32>,

        /// Allow overblows and overdraws
        #[arg(long)]
        allow_overbends: bool,

        /// Avoid bent notes
        #[arg(long)]
        no_bends: bool,
    },

    /// Validate a configuration file
    Check,

    /// Generate an example configuration file
    Init,
}
