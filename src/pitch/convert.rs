//! Frequency to nearest note and cents offset

use crate::theory::{Note, PitchClass};

/// Cents per semitone
pub const CENTS_PER_SEMITONE: f64 = 100.0;

/// Nearest note to a frequency and how far off it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteOffset {
    note: Note,
    cents: f64,
}

impl NoteOffset {
    pub fn note(&self) -> Note {
        self.note
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.note.pitch_class()
    }

    /// Signed deviation from the nearest note; positive is sharp
    pub fn cents(&self) -> f64 {
        self.cents
    }

    /// Attach the clarity of the sample this came from
    pub fn into_reading(self, frequency: f64, clarity: f64) -> PitchReading {
        PitchReading {
            frequency,
            note: self.note,
            cents: self.cents,
            clarity,
        }
    }
}

/// One analysed frame of live pitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchReading {
    frequency: f64,
    note: Note,
    cents: f64,
    clarity: f64,
}

impl PitchReading {
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn note(&self) -> Note {
        self.note
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.note.pitch_class()
    }

    /// Not clamped; values beyond ±50 are possible at the rounding edge
    pub fn cents(&self) -> f64 {
        self.cents
    }

    pub fn clarity(&self) -> f64 {
        self.clarity
    }

    /// Whether this reading sounds `note` (by semitone, not spelling)
    pub fn matches(&self, note: &Note) -> bool {
        self.note.same_pitch(note)
    }
}

/// Nearest note and cents deviation for `freq` Hz
///
/// Returns None for non-positive or non-finite input.
pub fn freq_to_note_and_cents(freq: f64) -> Option<NoteOffset> {
    let note = Note::nearest(freq)?;
    let cents = 12.0 * CENTS_PER_SEMITONE * (freq / note.frequency()).log2();
    Some(NoteOffset { note, cents })
}

/// Map cents to a tuning-meter offset in display units
///
/// ±50 cents spans ±`half_range`; sharp readings move up (negative).
/// Clamped for drawing only, never used for note matching.
pub fn meter_offset(cents: f64, half_range: f64) -> f64 {
    (-(cents / 50.0) * half_range).clamp(-half_range, half_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a440() {
        let offset = freq_to_note_and_cents(440.0).unwrap();
        assert_eq!(offset.note().to_string(), "A4");
        assert_eq!(offset.pitch_class().to_string(), "A");
        assert!(offset.cents().abs() < 1e-9);
    }

    #[test]
    fn test_slightly_flat_bb() {
        let offset = freq_to_note_and_cents(466.0).unwrap();
        assert_eq!(offset.note().midi(), 70);
        assert!(offset.cents() != 0.0);
        assert!(offset.cents().abs() < 1.0);
    }

    #[test]
    fn test_cents_direction() {
        let sharp = freq_to_note_and_cents(445.0).unwrap();
        assert_eq!(sharp.note().to_string(), "A4");
        assert!(sharp.cents() > 0.0);

        let flat = freq_to_note_and_cents(435.0).unwrap();
        assert_eq!(flat.note().to_string(), "A4");
        assert!(flat.cents() < 0.0);
    }

    #[test]
    fn test_cents_stay_within_half_semitone() {
        let mut freq = 60.0;
        while freq < 4000.0 {
            let offset = freq_to_note_and_cents(freq).unwrap();
            assert!(offset.cents().abs() <= 50.0 + 1e-6, "{} Hz -> {}", freq, offset.cents());
            freq *= 1.013;
        }
    }

    #[test]
    fn test_invalid_frequencies() {
        assert!(freq_to_note_and_cents(0.0).is_none());
        assert!(freq_to_note_and_cents(-440.0).is_none());
        assert!(freq_to_note_and_cents(f64::NAN).is_none());
        assert!(freq_to_note_and_cents(f64::INFINITY).is_none());
    }

    #[test]
    fn test_meter_offset() {
        assert_eq!(meter_offset(0.0, 8.0), 0.0);
        assert_eq!(meter_offset(50.0, 8.0), -8.0);
        assert_eq!(meter_offset(-25.0, 8.0), 4.0);
        assert_eq!(meter_offset(120.0, 8.0), -8.0);
    }

    #[test]
    fn test_reading_matches_by_pitch() {
        let reading = freq_to_note_and_cents(277.2).unwrap().into_reading(277.2, 0.99);
        assert!(reading.matches(&"C#4".parse().unwrap()));
        assert!(reading.matches(&"Db4".parse().unwrap()));
        assert!(!reading.matches(&"D4".parse().unwrap()));
        assert_eq!(reading.clarity(), 0.99);
    }
}
