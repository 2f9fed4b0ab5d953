//! Configuration schema definitions

use crate::circle::Mode;
use crate::harmonica::HarmonicaKey;
use crate::pitch::DEFAULT_MIN_CLARITY;
use crate::theory::PitchClass;
use crate::transpose::{TabFilters, MAX_OFFSET};
use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Main configuration for NoteBender
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteBenderConfig {
    /// Harmonica selection
    #[serde(default)]
    pub harmonica: HarmonicaConfig,

    /// Circle of fifths selection
    #[serde(default)]
    pub circle: CircleConfig,

    /// Live pitch settings
    #[serde(default)]
    pub pitch: PitchConfig,

    /// Auto-transpose settings
    #[serde(default)]
    pub transpose: TransposeConfig,
}

impl NoteBenderConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.harmonica.key()?;
        self.circle.root()?;
        self.circle.mode()?;

        if !(0.0..=1.0).contains(&self.pitch.min_clarity) {
            bail!("Minimum clarity must be between 0.0 and 1.0");
        }
        if self.pitch.tick_ms == 0 {
            bail!("Pitch tick must be at least 1 ms");
        }

        if self.transpose.min_offset > 0 || self.transpose.max_offset < 0 {
            bail!(
                "Transpose range {}..={} must include 0",
                self.transpose.min_offset,
                self.transpose.max_offset
            );
        }
        if self.transpose.min_offset < -MAX_OFFSET || self.transpose.max_offset > MAX_OFFSET {
            bail!("Transpose range must stay within -{0}..={0}", MAX_OFFSET);
        }

        Ok(())
    }
}

/// Harmonica settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarmonicaConfig {
    /// Stock key label (`C`, `Bb`) or note with octave (default: C)
    #[serde(default = "default_key")]
    pub key: String,
}

impl HarmonicaConfig {
    pub fn key(&self) -> Result<HarmonicaKey> {
        HarmonicaKey::parse(&self.key)
            .ok_or_else(|| anyhow!("Unknown harmonica key '{}'", self.key))
    }
}

impl Default for HarmonicaConfig {
    fn default() -> Self {
        Self { key: default_key() }
    }
}

fn default_key() -> String { "C".to_string() }

/// Circle of fifths settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleConfig {
    /// Root of the parent major scale (default: C)
    #[serde(default = "default_root")]
    pub root: String,

    /// Mode name (default: ionian)
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl CircleConfig {
    pub fn root(&self) -> Result<PitchClass> {
        Ok(self.root.parse()?)
    }

    pub fn mode(&self) -> Result<Mode> {
        Ok(self.mode.parse()?)
    }
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            mode: default_mode(),
        }
    }
}

fn default_root() -> String { "C".to_string() }
fn default_mode() -> String { "ionian".to_string() }

/// Live pitch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchConfig {
    /// Samples at or below this clarity are ignored (default: 0.95)
    #[serde(default = "default_min_clarity")]
    pub min_clarity: f64,

    /// Replay tick in milliseconds (default: 16, about one frame)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl PitchConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            min_clarity: default_min_clarity(),
            tick_ms: default_tick_ms(),
        }
    }
}

fn default_min_clarity() -> f64 { DEFAULT_MIN_CLARITY }
fn default_tick_ms() -> u64 { 16 }

/// Auto-transpose settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransposeConfig {
    /// Lowest offset tried in semitones (default: -36)
    #[serde(default = "default_min_offset")]
    pub min_offset: i32,

    /// Highest offset tried in semitones (default: 36)
    #[serde(default = "default_max_offset")]
    pub max_offset: i32,

    /// Reject overblows and overdraws (default: true)
    #[serde(default = "default_exclude_overbends")]
    pub exclude_overbends: bool,

    /// Reject bends (default: false)
    #[serde(default)]
    pub exclude_bends: bool,
}

impl TransposeConfig {
    pub fn range(&self) -> RangeInclusive<i32> {
        self.min_offset..=self.max_offset
    }

    pub fn filters(&self) -> TabFilters {
        TabFilters {
            exclude_overbends: self.exclude_overbends,
            exclude_bends: self.exclude_bends,
        }
    }
}

impl Default for TransposeConfig {
    fn default() -> Self {
        Self {
            min_offset: default_min_offset(),
            max_offset: default_max_offset(),
            exclude_overbends: default_exclude_overbends(),
            exclude_bends: false,
        }
    }
}

fn default_min_offset() -> i32 { -36 }
fn default_max_offset() -> i32 { 36 }
fn default_exclude_overbends() -> bool { true }
