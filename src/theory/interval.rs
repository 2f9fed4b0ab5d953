//! Letter-based intervals used as transposition operands

use crate::error::Error;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Semitones above the root for each simple diatonic step (unison..seventh)
/// in their perfect or major form.
const STEP_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Step count for each chromatic distance, conventional spelling
const SEMITONE_STEPS: [i32; 12] = [0, 1, 1, 2, 2, 3, 4, 4, 5, 5, 6, 6];

/// Largest interval number accepted from text
pub const MAX_NUMBER: i32 = 99;

/// A signed interval: how many letters to move and how many semitones.
///
/// `steps` is zero-based (a unison is 0 steps, a third is 2 steps), so the
/// familiar interval number is `steps + 1`. Both fields carry the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    steps: i32,
    semitones: i32,
}

impl Interval {
    pub const UNISON: Interval = Interval::new(0, 0);
    pub const MINOR_SECOND: Interval = Interval::new(1, 1);
    pub const MAJOR_SECOND: Interval = Interval::new(1, 2);
    pub const MINOR_THIRD: Interval = Interval::new(2, 3);
    pub const MAJOR_THIRD: Interval = Interval::new(2, 4);
    pub const PERFECT_FIFTH: Interval = Interval::new(4, 7);
    pub const OCTAVE: Interval = Interval::new(7, 12);

    /// Create an interval from zero-based letter steps and semitones
    pub const fn new(steps: i32, semitones: i32) -> Self {
        Self { steps, semitones }
    }

    /// Conventionally spelled interval spanning `semitones`
    ///
    /// Tritones are spelled as diminished fifths; direction is kept.
    pub fn from_semitones(semitones: i32) -> Self {
        let n = semitones.unsigned_abs();
        let steps = SEMITONE_STEPS[(n % 12) as usize] + 7 * (n / 12) as i32;
        Self::new(if semitones < 0 { -steps } else { steps }, semitones)
    }

    /// Parse interval notation such as `3M`, `-2m`, `12P`, `5d`, `4A`
    ///
    /// Numbers above [`MAX_NUMBER`] and qualities more than doubly
    /// augmented or diminished are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, text.strip_prefix('+').unwrap_or(text)),
        };

        let digits_end = body.find(|c: char| !c.is_ascii_digit())?;
        let number: i32 = body[..digits_end].parse().ok()?;
        if !(1..=MAX_NUMBER).contains(&number) {
            return None;
        }
        let quality = &body[digits_end..];
        if quality.len() > 2 {
            return None;
        }

        let steps = number - 1;
        let simple = (steps % 7) as usize;
        let perfectable = matches!(simple, 0 | 3 | 4);

        let offset = match quality {
            "P" if perfectable => 0,
            "M" if !perfectable => 0,
            "m" if !perfectable => -1,
            q if !q.is_empty() && q.chars().all(|c| c == 'A') => q.len() as i32,
            q if !q.is_empty() && q.chars().all(|c| c == 'd') => {
                let depth = q.len() as i32;
                if perfectable {
                    -depth
                } else {
                    -1 - depth
                }
            }
            _ => return None,
        };

        let semitones = STEP_SEMITONES[simple] + 12 * (steps / 7) + offset;
        Some(Self::new(sign * steps, sign * semitones))
    }

    /// Zero-based letter steps (signed)
    pub fn steps(&self) -> i32 {
        self.steps
    }

    /// Semitone span (signed)
    pub fn semitones(&self) -> i32 {
        self.semitones
    }

    /// Interval number as written (1 = unison, 3 = third), unsigned
    pub fn number(&self) -> i32 {
        self.steps.abs() + 1
    }

    fn is_descending(&self) -> bool {
        self.steps < 0 || (self.steps == 0 && self.semitones < 0)
    }

    /// Quality letters: P, M, m, or repeated A / d
    pub fn quality(&self) -> String {
        let (steps, semitones) = if self.is_descending() {
            (-self.steps, -self.semitones)
        } else {
            (self.steps, self.semitones)
        };
        let simple = (steps % 7) as usize;
        let perfectable = matches!(simple, 0 | 3 | 4);
        let offset = semitones - STEP_SEMITONES[simple] - 12 * (steps / 7);

        match (perfectable, offset) {
            (true, 0) => "P".to_string(),
            (false, 0) => "M".to_string(),
            (false, -1) => "m".to_string(),
            (_, o) if o > 0 => "A".repeat(o as usize),
            (true, o) => "d".repeat((-o) as usize),
            (false, o) => "d".repeat((-o - 1) as usize),
        }
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Self::Output {
        Interval::new(-self.steps, -self.semitones)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_descending() { "-" } else { "" };
        write!(f, "{}{}{}", sign, self.number(), self.quality())
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s.trim()).ok_or_else(|| Error::InvalidInterval(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_intervals() {
        assert_eq!(Interval::parse("1P"), Some(Interval::new(0, 0)));
        assert_eq!(Interval::parse("2m"), Some(Interval::new(1, 1)));
        assert_eq!(Interval::parse("3M"), Some(Interval::new(2, 4)));
        assert_eq!(Interval::parse("5P"), Some(Interval::new(4, 7)));
        assert_eq!(Interval::parse("5d"), Some(Interval::new(4, 6)));
        assert_eq!(Interval::parse("4A"), Some(Interval::new(3, 6)));
        assert_eq!(Interval::parse("7M"), Some(Interval::new(6, 11)));
    }

    #[test]
    fn test_parse_compound_and_descending() {
        assert_eq!(Interval::parse("11P"), Some(Interval::new(10, 17)));
        assert_eq!(Interval::parse("20M"), Some(Interval::new(19, 33)));
        assert_eq!(Interval::parse("22P"), Some(Interval::new(21, 36)));
        assert_eq!(Interval::parse("-2m"), Some(Interval::new(-1, -1)));
        assert_eq!(Interval::parse("-3m"), Some(Interval::new(-2, -3)));
    }

    #[test]
    fn test_parse_rejects_bad_quality() {
        // A fourth is never major or minor
        assert!(Interval::parse("11m").is_none());
        assert!(Interval::parse("3P").is_none());
        assert!(Interval::parse("0M").is_none());
        assert!(Interval::parse("M").is_none());
        assert!(Interval::parse("").is_none());
        assert!("5X".parse::<Interval>().is_err());
    }

    #[test]
    fn test_parse_rejects_oversized() {
        assert!(Interval::parse("2147483647P").is_none());
        assert!(Interval::parse("-2147483647M").is_none());
        assert!(Interval::parse("100P").is_none());
        assert!(Interval::parse("5ddd").is_none());
        assert_eq!(Interval::parse("99M").unwrap().number(), 99);
        assert_eq!(Interval::parse("4AA").unwrap().semitones(), 7);
    }

    #[test]
    fn test_from_semitones_extremes() {
        assert_eq!(Interval::from_semitones(i32::MIN).semitones(), i32::MIN);
        assert_eq!(Interval::from_semitones(i32::MAX).semitones(), i32::MAX);
        assert!(Interval::from_semitones(i32::MIN).steps() < 0);
    }

    #[test]
    fn test_display_matches_notation() {
        for text in ["1P", "3M", "-2m", "5d", "4A", "10M", "18P", "-3m", "6m"] {
            let interval: Interval = text.parse().unwrap();
            assert_eq!(interval.to_string(), text);
        }
    }

    #[test]
    fn test_from_semitones() {
        assert_eq!(Interval::from_semitones(0).to_string(), "1P");
        assert_eq!(Interval::from_semitones(1).to_string(), "2m");
        assert_eq!(Interval::from_semitones(6).to_string(), "5d");
        assert_eq!(Interval::from_semitones(12).to_string(), "8P");
        assert_eq!(Interval::from_semitones(-2).to_string(), "-2M");
        assert_eq!(Interval::from_semitones(-13).to_string(), "-9m");
        for n in -36..=36 {
            assert_eq!(Interval::from_semitones(n).semitones(), n);
        }
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Interval::MAJOR_SECOND, Interval::parse("-2M").unwrap());
        assert_eq!(-(-Interval::PERFECT_FIFTH), Interval::PERFECT_FIFTH);
    }
}
