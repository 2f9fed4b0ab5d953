//! The seven diatonic modes

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Diatonic mode, i.e. the major scale started on one of its degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Mode {
    /// All modes in parent-scale degree order
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// Degree (1-7) of the parent major scale the mode starts on
    pub fn degree(self) -> usize {
        match self {
            Mode::Ionian => 1,
            Mode::Dorian => 2,
            Mode::Phrygian => 3,
            Mode::Lydian => 4,
            Mode::Mixolydian => 5,
            Mode::Aeolian => 6,
            Mode::Locrian => 7,
        }
    }

    /// Harmonica position that lands on this mode
    pub fn harmonica_position(self) -> &'static str {
        match self {
            Mode::Ionian => "1st",
            Mode::Mixolydian => "2nd",
            Mode::Dorian => "3rd",
            Mode::Aeolian => "4th",
            Mode::Phrygian => "5th",
            Mode::Locrian => "6th",
            Mode::Lydian => "12th",
        }
    }

    /// Sort key for listing modes by harmonica position
    pub fn harmonica_order(self) -> u8 {
        match self {
            Mode::Ionian => 1,
            Mode::Mixolydian => 2,
            Mode::Dorian => 3,
            Mode::Aeolian => 4,
            Mode::Phrygian => 5,
            Mode::Locrian => 6,
            Mode::Lydian => 12,
        }
    }

    /// Modes ordered by harmonica position (1st, 2nd, 3rd ...)
    pub fn by_harmonica_order() -> Vec<Mode> {
        let mut modes = Self::ALL.to_vec();
        modes.sort_by_key(|mode| mode.harmonica_order());
        modes
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "Ionian",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian",
            Mode::Locrian => "Locrian",
        }
    }

    /// Mode by name, case-insensitive; `major` and `minor` are accepted
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "ionian" | "major" => Some(Mode::Ionian),
            "dorian" => Some(Mode::Dorian),
            "phrygian" => Some(Mode::Phrygian),
            "lydian" => Some(Mode::Lydian),
            "mixolydian" => Some(Mode::Mixolydian),
            "aeolian" | "minor" | "natural_minor" => Some(Mode::Aeolian),
            "locrian" => Some(Mode::Locrian),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_name(s).ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Mode::from_name("Dorian"), Some(Mode::Dorian));
        assert_eq!(Mode::from_name("MIXOLYDIAN"), Some(Mode::Mixolydian));
        assert_eq!(Mode::from_name("minor"), Some(Mode::Aeolian));
        assert!(Mode::from_name("blues").is_none());
        assert!("bebop".parse::<Mode>().is_err());
    }

    #[test]
    fn test_harmonica_order() {
        let names: Vec<&str> = Mode::by_harmonica_order()
            .into_iter()
            .map(Mode::harmonica_position)
            .collect();
        assert_eq!(names, ["1st", "2nd", "3rd", "4th", "5th", "6th", "12th"]);
    }

    #[test]
    fn test_degrees_are_distinct() {
        for (index, mode) in Mode::ALL.iter().enumerate() {
            assert_eq!(mode.degree(), index + 1);
        }
    }
}
