//! Triads and chord-quality classification

use crate::theory::PitchClass;
use std::fmt;

/// Chord quality of a three-note stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    #[default]
    Unclassified,
}

impl ChordQuality {
    /// Classify by the chroma distances of the third and fifth above the root
    ///
    /// {0,4,7} major, {0,3,7} minor, {0,3,6} diminished, anything else
    /// (augmented, suspended, clusters) is unclassified.
    pub fn classify(root: &PitchClass, third: &PitchClass, fifth: &PitchClass) -> Self {
        let above = |pc: &PitchClass| (pc.chroma() - root.chroma()).rem_euclid(12);
        let mut intervals = [0, above(third), above(fifth)];
        intervals.sort_unstable();

        match intervals {
            [0, 4, 7] => ChordQuality::Major,
            [0, 3, 7] => ChordQuality::Minor,
            [0, 3, 6] => ChordQuality::Diminished,
            _ => ChordQuality::Unclassified,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Unclassified => "none",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Root, third and fifth taken from a scale, plus its quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triad {
    root: PitchClass,
    third: PitchClass,
    fifth: PitchClass,
    quality: ChordQuality,
}

impl Triad {
    pub fn new(root: PitchClass, third: PitchClass, fifth: PitchClass) -> Self {
        Self {
            root,
            third,
            fifth,
            quality: ChordQuality::classify(&root, &third, &fifth),
        }
    }

    /// Triad on `degree` (0-based) of a seven-note scale, wrapping inside it
    pub fn on_degree(scale: &[PitchClass; 7], degree: usize) -> Self {
        Self::new(
            scale[degree % 7],
            scale[(degree + 2) % 7],
            scale[(degree + 4) % 7],
        )
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn third(&self) -> PitchClass {
        self.third
    }

    pub fn fifth(&self) -> PitchClass {
        self.fifth
    }

    pub fn notes(&self) -> [PitchClass; 3] {
        [self.root, self.third, self.fifth]
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Chord symbol: `C`, `Dm`, `Bdim`, or the spelled notes if unclassified
    pub fn symbol(&self) -> String {
        match self.quality {
            ChordQuality::Major => self.root.to_string(),
            ChordQuality::Minor => format!("{}m", self.root),
            ChordQuality::Diminished => format!("{}dim", self.root),
            ChordQuality::Unclassified => format!("{}-{}-{}", self.root, self.third, self.fifth),
        }
    }
}

/// Chord quality for each of the 12 chromas, as coloured on the circle
///
/// Every triad root takes its triad's quality outright. Thirds and fifths
/// only fill chromas that are still unclassified, so a chroma that is a root
/// anywhere, or was reached first by an earlier triad, keeps that quality.
pub fn quality_map(triads: &[Triad]) -> [ChordQuality; 12] {
    let mut map = [ChordQuality::Unclassified; 12];

    for triad in triads {
        let root = triad.root.chroma();
        map[root as usize] = triad.quality;

        for tone in [triad.third, triad.fifth] {
            let chroma = tone.chroma();
            if chroma != root && map[chroma as usize] == ChordQuality::Unclassified {
                map[chroma as usize] = triad.quality;
            }
        }
    }

    map
}
