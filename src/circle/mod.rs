//! Circle of fifths: modes, scales and triad qualities
//!
//! [`derive_scale`] is the single entry point; everything the circle view
//! needs (tonic, degrees, triads, colour per chroma) hangs off [`ModeScale`].

mod mode;
mod scale;
mod triad;

pub use mode::Mode;
pub use scale::{circle_of_fifths, derive_scale, major_scale, mode_scale, ModeScale, MAJOR_SCALE};
pub use triad::{quality_map, ChordQuality, Triad};
