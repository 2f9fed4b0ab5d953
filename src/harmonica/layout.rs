//! Hole layout of a 10-hole diatonic (Richter) harmonica

use super::technique::{Airflow, Technique};
use crate::theory::{Interval, Note};

/// Number of holes on a diatonic harmonica
pub const HOLE_COUNT: usize = 10;

/// Blow reed intervals above the key note, holes 1-10
/// (1P 3M 5P 8P 10M 12P 15P 17M 19P 22P)
pub const BLOW_INTERVALS: [Interval; HOLE_COUNT] = [
    Interval::new(0, 0),
    Interval::new(2, 4),
    Interval::new(4, 7),
    Interval::new(7, 12),
    Interval::new(9, 16),
    Interval::new(11, 19),
    Interval::new(14, 24),
    Interval::new(16, 28),
    Interval::new(18, 31),
    Interval::new(21, 36),
];

/// Draw reed intervals above the key note, holes 1-10
/// (2M 5P 7M 9M 11P 13M 14M 16M 18P 20M)
pub const DRAW_INTERVALS: [Interval; HOLE_COUNT] = [
    Interval::new(1, 2),
    Interval::new(4, 7),
    Interval::new(6, 11),
    Interval::new(8, 14),
    Interval::new(10, 17),
    Interval::new(12, 21),
    Interval::new(13, 23),
    Interval::new(15, 26),
    Interval::new(17, 29),
    Interval::new(19, 33),
];

/// Pitches available on a single hole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    number: u8,
    blow: Note,
    draw: Note,
    whole_step_blow_bend: Option<Note>,
    half_step_blow: Option<Note>,
    half_step_draw: Option<Note>,
    whole_step_draw_bend: Option<Note>,
    step_and_half_draw_bend: Option<Note>,
}

impl Hole {
    fn derive(key: &Note, number: u8) -> Self {
        let index = (number - 1) as usize;
        let blow = key.transpose(BLOW_INTERVALS[index]);
        let draw = key.transpose(DRAW_INTERVALS[index]);

        let bent = |technique: Technique| -> Option<Note> {
            if !technique.available_on(number) {
                return None;
            }
            let reed = match technique.airflow() {
                Airflow::Blow => blow,
                Airflow::Draw => draw,
            };
            technique.offset().map(|interval| reed.transpose(interval))
        };

        Self {
            number,
            blow,
            draw,
            whole_step_blow_bend: bent(Technique::WholeStepBlowBend),
            half_step_blow: bent(Technique::HalfStepBlow),
            half_step_draw: bent(Technique::HalfStepDraw),
            whole_step_draw_bend: bent(Technique::WholeStepDrawBend),
            step_and_half_draw_bend: bent(Technique::StepAndHalfDrawBend),
        }
    }

    /// Hole number, 1-10
    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn blow(&self) -> Note {
        self.blow
    }

    pub fn draw(&self) -> Note {
        self.draw
    }

    /// Pitch of a technique on this hole, None where the hole can't play it
    pub fn pitch(&self, technique: Technique) -> Option<Note> {
        match technique {
            Technique::Blow => Some(self.blow),
            Technique::Draw => Some(self.draw),
            Technique::WholeStepBlowBend => self.whole_step_blow_bend,
            Technique::HalfStepBlow => self.half_step_blow,
            Technique::HalfStepDraw => self.half_step_draw,
            Technique::WholeStepDrawBend => self.whole_step_draw_bend,
            Technique::StepAndHalfDrawBend => self.step_and_half_draw_bend,
        }
    }

    /// Present cells in resolver priority order
    pub fn cells(&self) -> impl Iterator<Item = (Technique, Note)> + '_ {
        Technique::PRIORITY
            .into_iter()
            .filter_map(move |technique| self.pitch(technique).map(|note| (technique, note)))
    }
}

/// Full pitch grid of a harmonica in one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    key: Note,
    holes: [Hole; HOLE_COUNT],
}

impl Layout {
    /// The key note the layout was derived from (hole 1 blow)
    pub fn key(&self) -> Note {
        self.key
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Hole by 1-based number
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        match number {
            1..=10 => self.holes.get((number - 1) as usize),
            _ => None,
        }
    }

    /// Pitch of a technique on a hole
    pub fn pitch(&self, hole: u8, technique: Technique) -> Option<Note> {
        self.hole(hole).and_then(|h| h.pitch(technique))
    }

    /// Every (hole, technique) sounding the same pitch as `note`
    pub fn positions_of(&self, note: &Note) -> Vec<(u8, Technique)> {
        self.holes
            .iter()
            .flat_map(|hole| {
                hole.cells()
                    .filter(|(_, pitch)| pitch.same_pitch(note))
                    .map(move |(technique, _)| (hole.number, technique))
            })
            .collect()
    }
}

/// Derive the complete layout for a harmonica whose hole 1 blow is `key`
pub fn derive_layout(key: &Note) -> Layout {
    log::debug!("Deriving harmonica layout for {}", key);
    Layout {
        key: *key,
        holes: std::array::from_fn(|index| Hole::derive(key, index as u8 + 1)),
    }
}
