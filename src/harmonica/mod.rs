//! Diatonic harmonica layout and tablature
//!
//! [`derive_layout`] builds the pitch grid for a key; [`resolve`] goes the
//! other way and finds the tab for a note.

mod keys;
mod layout;
mod tab;
mod technique;

pub use keys::{HarmonicaKey, STOCK_KEYS};
pub use layout::{derive_layout, Hole, Layout, BLOW_INTERVALS, DRAW_INTERVALS, HOLE_COUNT};
pub use tab::{resolve, TabToken, BEND_TICK, OVERBEND_SUFFIX};
pub use technique::{
    Airflow, Technique, HALF_STEP_BLOW_HOLES, HALF_STEP_DRAW_HOLES, OVERBLOW_HOLES,
    OVERDRAW_HOLES, STEP_AND_HALF_DRAW_BEND_HOLES, WHOLE_STEP_BLOW_BEND_HOLES,
    WHOLE_STEP_DRAW_BEND_HOLES,
};
