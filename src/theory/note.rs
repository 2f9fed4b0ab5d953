//! Spelled notes and pitch classes
//!
//! A note keeps its spelling (`Db4` and `C#4` are different values) but all
//! pitch comparisons go through [`Note::midi`], which is spelling-independent.

use super::Interval;
use crate::error::Error;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Octaves accepted from text and score input (C-1 to B9)
pub const OCTAVE_RANGE: RangeInclusive<i32> = -1..=9;

/// Most sharps or flats accepted on a single note from input
pub const MAX_ACCIDENTALS: i32 = 12;

/// Reference pitch for equal temperament
pub const A4_HZ: f64 = 440.0;

/// MIDI number of A4
pub const A4_MIDI: i32 = 69;

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Letter from a (case-insensitive) character
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Position within C D E F G A B
    pub fn index(self) -> i32 {
        self as i32
    }

    fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// Semitones above C of the natural note
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// How to spell black keys when building notes from numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spelling {
    Sharps,
    #[default]
    Flats,
}

const SHARP_SPELLINGS: [(Letter, i32); 12] = [
    (Letter::C, 0),
    (Letter::C, 1),
    (Letter::D, 0),
    (Letter::D, 1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::F, 1),
    (Letter::G, 0),
    (Letter::G, 1),
    (Letter::A, 0),
    (Letter::A, 1),
    (Letter::B, 0),
];

const FLAT_SPELLINGS: [(Letter, i32); 12] = [
    (Letter::C, 0),
    (Letter::D, -1),
    (Letter::D, 0),
    (Letter::E, -1),
    (Letter::E, 0),
    (Letter::F, 0),
    (Letter::G, -1),
    (Letter::G, 0),
    (Letter::A, -1),
    (Letter::A, 0),
    (Letter::B, -1),
    (Letter::B, 0),
];

/// A note name without octave, e.g. `F#` or `Bb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass {
    letter: Letter,
    accidental: i32,
}

impl PitchClass {
    /// Create a pitch class; `accidental` counts sharps (positive) or flats
    pub const fn new(letter: Letter, accidental: i32) -> Self {
        Self { letter, accidental }
    }

    /// Spell a chroma (0 = C .. 11 = B)
    pub fn from_chroma(chroma: i32, spelling: Spelling) -> Self {
        let table = match spelling {
            Spelling::Sharps => &SHARP_SPELLINGS,
            Spelling::Flats => &FLAT_SPELLINGS,
        };
        let (letter, accidental) = table[chroma.rem_euclid(12) as usize];
        Self::new(letter, accidental)
    }

    /// Parse `C`, `c#`, `Bb`, `Ebb`; returns None for anything else
    pub fn parse(text: &str) -> Option<Self> {
        let (class, rest) = split_pitch_class(text)?;
        rest.is_empty().then_some(class)
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> i32 {
        self.accidental
    }

    /// Position in the chromatic octave, 0..12, spelling-independent
    pub fn chroma(&self) -> i32 {
        (self.letter.semitone() + self.accidental).rem_euclid(12)
    }

    /// Place this pitch class in an octave
    pub fn at_octave(&self, octave: i32) -> Note {
        Note { class: *self, octave }
    }

    /// Transpose ignoring octaves
    pub fn transpose(&self, interval: Interval) -> PitchClass {
        self.at_octave(4).transpose(interval).pitch_class()
    }

    /// Respell with at most one accidental, keeping its direction
    pub fn simplify(&self) -> PitchClass {
        match self.accidental {
            0 => *self,
            a if a > 0 => Self::from_chroma(self.chroma(), Spelling::Sharps),
            _ => Self::from_chroma(self.chroma(), Spelling::Flats),
        }
    }

    /// Same sounding class regardless of spelling
    pub fn same_class(&self, other: &PitchClass) -> bool {
        self.chroma() == other.chroma()
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter.as_char())?;
        let symbol = if self.accidental > 0 { "#" } else { "b" };
        write!(f, "{}", symbol.repeat(self.accidental.unsigned_abs() as usize))
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::parse(s.trim()).ok_or_else(|| Error::InvalidPitchClass(s.to_string()))
    }
}

/// Split a leading letter + accidentals off `text`
fn split_pitch_class(text: &str) -> Option<(PitchClass, &str)> {
    let mut chars = text.chars();
    let letter = Letter::from_char(chars.next()?)?;
    let rest = chars.as_str();

    let sharps = rest.chars().take_while(|&c| c == '#').count();
    let flats = rest.chars().take_while(|&c| c == 'b').count();
    let consumed = sharps + flats;
    if consumed > MAX_ACCIDENTALS as usize {
        return None;
    }
    let accidental = sharps as i32 - flats as i32;

    Some((PitchClass::new(letter, accidental), &rest[consumed..]))
}

/// A spelled note with octave (scientific pitch notation, C4 = MIDI 60)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    class: PitchClass,
    octave: i32,
}

impl Note {
    pub const fn new(letter: Letter, accidental: i32, octave: i32) -> Self {
        Self {
            class: PitchClass::new(letter, accidental),
            octave,
        }
    }

    /// Like [`Note::new`] but None outside [`OCTAVE_RANGE`] or beyond
    /// [`MAX_ACCIDENTALS`]
    pub fn checked(letter: Letter, accidental: i32, octave: i32) -> Option<Self> {
        let in_range =
            OCTAVE_RANGE.contains(&octave) && accidental.unsigned_abs() <= MAX_ACCIDENTALS as u32;
        in_range.then(|| Self::new(letter, accidental, octave))
    }

    /// Parse `C4`, `Bb3`, `f#5`, `C-1`; the octave is required and must lie
    /// in [`OCTAVE_RANGE`]
    pub fn parse(text: &str) -> Option<Self> {
        let (class, rest) = split_pitch_class(text)?;
        if rest.is_empty() || rest.starts_with('+') {
            return None;
        }
        let octave: i32 = rest.parse().ok()?;
        Self::checked(class.letter, class.accidental, octave)
    }

    /// Build a note from a MIDI number with the given black-key spelling
    pub fn from_midi(midi: i32, spelling: Spelling) -> Self {
        PitchClass::from_chroma(midi, spelling).at_octave(midi.div_euclid(12) - 1)
    }

    /// Nearest equal-tempered note to `freq` (flat spelling)
    ///
    /// Returns None for zero, negative, NaN or infinite frequencies.
    pub fn nearest(freq: f64) -> Option<Self> {
        if !freq.is_finite() || freq <= 0.0 {
            return None;
        }
        let midi = (A4_MIDI as f64 + 12.0 * (freq / A4_HZ).log2()).round();
        Some(Self::from_midi(midi as i32, Spelling::Flats))
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.class
    }

    pub fn letter(&self) -> Letter {
        self.class.letter
    }

    pub fn accidental(&self) -> i32 {
        self.class.accidental
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Semitone index, MIDI-compatible (C4 = 60)
    pub fn midi(&self) -> i32 {
        (self.octave + 1) * 12 + self.class.letter.semitone() + self.class.accidental
    }

    /// Equal-tempered frequency in Hz (A4 = 440)
    pub fn frequency(&self) -> f64 {
        A4_HZ * 2.0_f64.powf((self.midi() - A4_MIDI) as f64 / 12.0)
    }

    /// Move by a letter-based interval, keeping correct spelling
    pub fn transpose(&self, interval: Interval) -> Note {
        let target_midi = self.midi() + interval.semitones();
        let absolute_step = self.octave * 7 + self.class.letter.index() + interval.steps();

        let octave = absolute_step.div_euclid(7);
        let letter = Letter::from_index(absolute_step);
        let natural_midi = (octave + 1) * 12 + letter.semitone();

        Note::new(letter, target_midi - natural_midi, octave)
    }

    /// Same sounding pitch regardless of spelling
    pub fn same_pitch(&self, other: &Note) -> bool {
        self.midi() == other.midi()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s.trim()).ok_or_else(|| Error::InvalidNote(s.to_string()))
    }
}
