//! Clarity gate between a pitch source and the converter

use super::convert::{freq_to_note_and_cents, PitchReading};
use super::source::PitchSample;

/// Default minimum clarity for accepting a sample
pub const DEFAULT_MIN_CLARITY: f64 = 0.95;

/// Drops unclear samples, converts the rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClarityGate {
    min_clarity: f64,
}

impl ClarityGate {
    pub fn new(min_clarity: f64) -> Self {
        Self { min_clarity }
    }

    pub fn min_clarity(&self) -> f64 {
        self.min_clarity
    }

    /// Reading for a sample, or None if it is unclear or not a valid pitch
    pub fn read(&self, sample: &PitchSample) -> Option<PitchReading> {
        if !(sample.clarity > self.min_clarity) {
            return None;
        }
        freq_to_note_and_cents(sample.frequency)
            .map(|offset| offset.into_reading(sample.frequency, sample.clarity))
    }
}

impl Default for ClarityGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CLARITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sample_passes() {
        let gate = ClarityGate::default();
        let reading = gate.read(&PitchSample::new(440.0, 0.98)).unwrap();
        assert_eq!(reading.note().to_string(), "A4");
        assert_eq!(reading.frequency(), 440.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let gate = ClarityGate::new(0.9);
        assert!(gate.read(&PitchSample::new(440.0, 0.9)).is_none());
        assert!(gate.read(&PitchSample::new(440.0, 0.91)).is_some());
    }

    #[test]
    fn test_invalid_frequency_is_dropped() {
        let gate = ClarityGate::new(0.0);
        assert!(gate.read(&PitchSample::new(0.0, 1.0)).is_none());
        assert!(gate.read(&PitchSample::new(f64::NAN, 1.0)).is_none());
    }

    #[test]
    fn test_nan_clarity_is_dropped() {
        let gate = ClarityGate::new(0.5);
        assert!(gate.read(&PitchSample::new(440.0, f64::NAN)).is_none());
    }
}
