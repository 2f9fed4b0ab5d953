//! Live pitch feedback
//!
//! Samples arrive from a [`PitchSource`], pass the [`ClarityGate`] and come
//! out as [`PitchReading`]s ready to be matched against a layout or scale.

mod convert;
mod gate;
mod replay;
mod source;

pub use convert::{
    freq_to_note_and_cents, meter_offset, NoteOffset, PitchReading, CENTS_PER_SEMITONE,
};
pub use gate::{ClarityGate, DEFAULT_MIN_CLARITY};
pub use replay::{load_recording, ReplaySource};
pub use source::{PitchSample, PitchSource};
