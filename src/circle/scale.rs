//! Mode scales and their diatonic triads

use super::mode::Mode;
use super::triad::{quality_map, ChordQuality, Triad};
use crate::theory::{Interval, Letter, PitchClass};

/// Semitones above the tonic for each degree of the major scale
pub const MAJOR_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Major scale spelled from `root`, one letter per degree
pub fn major_scale(root: &PitchClass) -> [PitchClass; 7] {
    std::array::from_fn(|degree| {
        root.transpose(Interval::new(degree as i32, MAJOR_SCALE[degree]))
    })
}

/// Scale of `mode` starting on `tonic`, one letter per degree
pub fn mode_scale(tonic: &PitchClass, mode: Mode) -> [PitchClass; 7] {
    let start = mode.degree() - 1;
    std::array::from_fn(|degree| {
        let semitones = (MAJOR_SCALE[(start + degree) % 7] - MAJOR_SCALE[start]).rem_euclid(12);
        tonic.transpose(Interval::new(degree as i32, semitones))
    })
}

/// The twelve pitch classes in fifths order starting on C
pub fn circle_of_fifths() -> [PitchClass; 12] {
    let mut current = PitchClass::new(Letter::C, 0);
    std::array::from_fn(|_| {
        let simplified = current.simplify();
        current = current.transpose(Interval::PERFECT_FIFTH);
        simplified
    })
}

/// Everything derived from a (root, mode) selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeScale {
    root: PitchClass,
    mode: Mode,
    tonic: PitchClass,
    notes: [PitchClass; 7],
    triads: [Triad; 7],
}

impl ModeScale {
    /// The root the parent major scale was built on
    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True tonic of the mode: the mode's degree of the root's major scale
    pub fn tonic(&self) -> PitchClass {
        self.tonic
    }

    pub fn notes(&self) -> &[PitchClass; 7] {
        &self.notes
    }

    pub fn triads(&self) -> &[Triad; 7] {
        &self.triads
    }

    /// Chord quality per chroma (index 0 = C)
    pub fn quality_map(&self) -> [ChordQuality; 12] {
        quality_map(&self.triads)
    }

    /// Quality shown for a pitch class on the circle
    pub fn quality_of(&self, pitch_class: &PitchClass) -> ChordQuality {
        self.quality_map()[pitch_class.chroma() as usize]
    }

    /// 1-based scale degree of a pitch class, by chroma
    pub fn degree_of(&self, pitch_class: &PitchClass) -> Option<usize> {
        self.notes
            .iter()
            .position(|note| note.same_class(pitch_class))
            .map(|index| index + 1)
    }

    pub fn is_tonic(&self, pitch_class: &PitchClass) -> bool {
        self.tonic.same_class(pitch_class)
    }
}

/// Derive tonic, scale and triads for `mode` over the major scale of `root`
pub fn derive_scale(root: &PitchClass, mode: Mode) -> ModeScale {
    log::debug!("Deriving {} {} scale", root, mode);
    let tonic = major_scale(root)[mode.degree() - 1];
    let notes = mode_scale(&tonic, mode);
    let triads = std::array::from_fn(|degree| Triad::on_degree(&notes, degree));

    ModeScale {
        root: *root,
        mode,
        tonic,
        notes,
        triads,
    }
}
