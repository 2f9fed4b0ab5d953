//! Note and interval model
//!
//! Spelled notes, pitch classes and letter-based intervals. Every other
//! module compares pitches through [`Note::midi`] and pitch classes through
//! [`PitchClass::chroma`].

mod interval;
mod note;

pub use interval::{Interval, MAX_NUMBER};
pub use note::{
    Letter, Note, PitchClass, Spelling, A4_HZ, A4_MIDI, MAX_ACCIDENTALS, OCTAVE_RANGE,
};
