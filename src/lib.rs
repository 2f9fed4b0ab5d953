//! NoteBender - harmonica tabs, circle of fifths and pitch matching
//!
//! Derives the full hole layout of a diatonic harmonica in any key, finds
//! the tab for a note, builds modal scales with their triad qualities and
//! turns detected frequencies into notes with a cents offset.

pub mod cache;
pub mod circle;
pub mod config;
pub mod error;
pub mod harmonica;
pub mod pitch;
pub mod score;
pub mod theory;
pub mod transpose;

pub use cache::DerivationCache;
pub use circle::{derive_scale, Mode, ModeScale};
pub use config::NoteBenderConfig;
pub use error::{Error, Result};
pub use harmonica::{derive_layout, resolve, HarmonicaKey, Layout, TabToken};
pub use pitch::freq_to_note_and_cents;
pub use transpose::auto_transpose;
