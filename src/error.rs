//! Error types for NoteBender

use thiserror::Error;

/// Result type alias for theory and tablature operations
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failures surfaced by parsers and the transposition search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Note name could not be parsed (e.g. "H4", "C", "")
    #[error("invalid note name: {0:?}")]
    InvalidNote(String),

    /// Pitch class could not be parsed (e.g. "X", "C#4")
    #[error("invalid pitch class: {0:?}")]
    InvalidPitchClass(String),

    /// Interval notation could not be parsed (e.g. "3P", "0M")
    #[error("invalid interval: {0:?}")]
    InvalidInterval(String),

    /// Tablature token could not be parsed (e.g. "11", "-3'o")
    #[error("invalid tablature token: {0:?}")]
    InvalidTab(String),

    /// Mode name not recognised
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),

    /// No offset in the searched range makes every note playable
    #[error("no valid transposition between {min} and {max} semitones")]
    NoValidTransposition { min: i32, max: i32 },
}
