//! Harmonica keys and their reference octaves

use super::layout::{derive_layout, Layout};
use crate::theory::{Letter, Note, PitchClass};
use std::fmt;

/// Hole 1 blow of the twelve stock keys
pub const STOCK_KEYS: [Note; 12] = [
    Note::new(Letter::C, 0, 4),
    Note::new(Letter::D, 0, 4),
    Note::new(Letter::E, 0, 4),
    Note::new(Letter::F, 0, 4),
    Note::new(Letter::G, 0, 3),
    Note::new(Letter::A, 0, 3),
    Note::new(Letter::B, 0, 3),
    Note::new(Letter::D, -1, 4),
    Note::new(Letter::E, -1, 4),
    Note::new(Letter::F, 1, 4),
    Note::new(Letter::A, -1, 3),
    Note::new(Letter::B, -1, 3),
];

/// A diatonic harmonica identified by its hole 1 blow note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HarmonicaKey {
    root: Note,
}

impl HarmonicaKey {
    /// Any note can key a (custom-tuned) harmonica
    pub fn new(root: Note) -> Self {
        Self { root }
    }

    /// The twelve stock keys in display order
    pub fn stock() -> impl Iterator<Item = HarmonicaKey> {
        STOCK_KEYS.into_iter().map(HarmonicaKey::new)
    }

    /// Stock key by label (`C`, `Bb`, `f#`); enharmonic labels match too
    pub fn from_label(label: &str) -> Option<Self> {
        let class = PitchClass::parse(label)?;
        Self::stock().find(|key| key.root.pitch_class().same_class(&class))
    }

    /// Label (`G`) or explicit note (`G4`)
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::from_label(text).or_else(|| Note::parse(text).map(Self::new))
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn label(&self) -> String {
        self.root.pitch_class().to_string()
    }

    pub fn layout(&self) -> Layout {
        derive_layout(&self.root)
    }
}

impl fmt::Display for HarmonicaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_octaves() {
        assert_eq!(HarmonicaKey::from_label("C").unwrap().root().to_string(), "C4");
        assert_eq!(HarmonicaKey::from_label("G").unwrap().root().to_string(), "G3");
        assert_eq!(HarmonicaKey::from_label("Bb").unwrap().root().to_string(), "Bb3");
        assert_eq!(HarmonicaKey::from_label("f#").unwrap().root().to_string(), "F#4");
    }

    #[test]
    fn test_enharmonic_label() {
        assert_eq!(HarmonicaKey::from_label("C#").unwrap().root().to_string(), "Db4");
        assert_eq!(HarmonicaKey::from_label("Gb").unwrap().root().to_string(), "F#4");
    }

    #[test]
    fn test_parse_custom_key() {
        assert_eq!(HarmonicaKey::parse("G4").unwrap().root().to_string(), "G4");
        assert_eq!(HarmonicaKey::parse(" A ").unwrap().root().to_string(), "A3");
        assert!(HarmonicaKey::parse("H").is_none());
    }

    #[test]
    fn test_stock_keys_are_distinct_classes() {
        let mut chromas: Vec<i32> = HarmonicaKey::stock()
            .map(|k| k.root().pitch_class().chroma())
            .collect();
        chromas.sort();
        chromas.dedup();
        assert_eq!(chromas.len(), 12);
    }
}
