//! Playing techniques and the fixed per-hole capability tables

use crate::theory::Interval;
use std::fmt;

/// Holes where the blow reed bends a whole step
pub const WHOLE_STEP_BLOW_BEND_HOLES: &[u8] = &[10];

/// Holes with a half-step blow family cell (bend or overblow)
pub const HALF_STEP_BLOW_HOLES: &[u8] = &[1, 4, 5, 6, 8, 9, 10];

/// Subset of [`HALF_STEP_BLOW_HOLES`] where the cell is an overblow
pub const OVERBLOW_HOLES: &[u8] = &[1, 4, 5, 6];

/// Holes with a half-step draw family cell (bend or overdraw)
pub const HALF_STEP_DRAW_HOLES: &[u8] = &[1, 2, 3, 4, 6, 7, 9, 10];

/// Subset of [`HALF_STEP_DRAW_HOLES`] where the cell is an overdraw
pub const OVERDRAW_HOLES: &[u8] = &[7, 9, 10];

/// Holes where the draw reed bends a whole step
pub const WHOLE_STEP_DRAW_BEND_HOLES: &[u8] = &[2, 3];

/// Holes where the draw reed bends a step and a half
pub const STEP_AND_HALF_DRAW_BEND_HOLES: &[u8] = &[3];

/// Direction of air through the hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Airflow {
    Blow,
    Draw,
}

/// One cell of a hole's pitch grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    Blow,
    WholeStepBlowBend,
    /// Half-step blow bend, or overblow on the overblow holes
    HalfStepBlow,
    Draw,
    /// Half-step draw bend, or overdraw on the overdraw holes
    HalfStepDraw,
    WholeStepDrawBend,
    StepAndHalfDrawBend,
}

impl Technique {
    /// Order in which the resolver tries techniques within a hole
    pub const PRIORITY: [Technique; 7] = [
        Technique::Blow,
        Technique::WholeStepBlowBend,
        Technique::HalfStepBlow,
        Technique::Draw,
        Technique::HalfStepDraw,
        Technique::WholeStepDrawBend,
        Technique::StepAndHalfDrawBend,
    ];

    pub fn airflow(self) -> Airflow {
        match self {
            Technique::Blow | Technique::WholeStepBlowBend | Technique::HalfStepBlow => {
                Airflow::Blow
            }
            _ => Airflow::Draw,
        }
    }

    /// Semitones below the unbent reed (0 for plain blow/draw)
    pub fn depth(self) -> u8 {
        match self {
            Technique::Blow | Technique::Draw => 0,
            Technique::HalfStepBlow | Technique::HalfStepDraw => 1,
            Technique::WholeStepBlowBend | Technique::WholeStepDrawBend => 2,
            Technique::StepAndHalfDrawBend => 3,
        }
    }

    /// Downward interval applied to the reed pitch, None for plain notes
    pub fn offset(self) -> Option<Interval> {
        match self.depth() {
            0 => None,
            1 => Some(-Interval::MINOR_SECOND),
            2 => Some(-Interval::MAJOR_SECOND),
            _ => Some(-Interval::MINOR_THIRD),
        }
    }

    /// Holes this technique exists on
    pub fn holes(self) -> &'static [u8] {
        const ALL_HOLES: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        match self {
            Technique::Blow | Technique::Draw => ALL_HOLES,
            Technique::WholeStepBlowBend => WHOLE_STEP_BLOW_BEND_HOLES,
            Technique::HalfStepBlow => HALF_STEP_BLOW_HOLES,
            Technique::HalfStepDraw => HALF_STEP_DRAW_HOLES,
            Technique::WholeStepDrawBend => WHOLE_STEP_DRAW_BEND_HOLES,
            Technique::StepAndHalfDrawBend => STEP_AND_HALF_DRAW_BEND_HOLES,
        }
    }

    pub fn available_on(self, hole: u8) -> bool {
        self.holes().contains(&hole)
    }

    /// Whether the cell on `hole` is an overblow/overdraw rather than a bend
    pub fn is_overbend_on(self, hole: u8) -> bool {
        match self {
            Technique::HalfStepBlow => OVERBLOW_HOLES.contains(&hole),
            Technique::HalfStepDraw => OVERDRAW_HOLES.contains(&hole),
            _ => false,
        }
    }

    /// Human-readable name for the cell on `hole`
    pub fn describe(self, hole: u8) -> &'static str {
        match self {
            Technique::Blow => "blow",
            Technique::Draw => "draw",
            Technique::HalfStepBlow if self.is_overbend_on(hole) => "overblow",
            Technique::HalfStepDraw if self.is_overbend_on(hole) => "overdraw",
            Technique::HalfStepBlow => "half-step blow bend",
            Technique::HalfStepDraw => "half-step draw bend",
            Technique::WholeStepBlowBend => "whole-step blow bend",
            Technique::WholeStepDrawBend => "whole-step draw bend",
            Technique::StepAndHalfDrawBend => "step-and-a-half draw bend",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Technique::Blow => "blow",
            Technique::WholeStepBlowBend => "whole-step blow bend",
            Technique::HalfStepBlow => "half-step blow bend/overblow",
            Technique::Draw => "draw",
            Technique::HalfStepDraw => "half-step draw bend/overdraw",
            Technique::WholeStepDrawBend => "whole-step draw bend",
            Technique::StepAndHalfDrawBend => "step-and-a-half draw bend",
        };
        write!(f, "{}", name)
    }
}
