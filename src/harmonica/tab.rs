//! Tablature tokens and the note-to-tab resolver

use super::layout::{derive_layout, Layout};
use super::technique::{Airflow, Technique};
use crate::error::Error;
use crate::theory::Note;
use std::fmt;
use std::str::FromStr;

/// Suffix marking an overblow or overdraw
pub const OVERBEND_SUFFIX: char = 'o';

/// Mark for one half step of bend
pub const BEND_TICK: char = '\'';

/// A harmonica tab such as `4`, `-3''`, `10'` or `6o`
///
/// Blow holes are positive and draw holes negative. Ticks count half steps
/// of bend; overblows and overdraws carry a trailing `o` instead of ticks.
/// Parsing only accepts tokens for cells that exist on a Richter harmonica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabToken {
    hole: u8,
    airflow: Airflow,
    bend: u8,
    overbend: bool,
}

impl TabToken {
    /// Token for a technique played on a hole
    pub fn new(hole: u8, technique: Technique) -> Self {
        let overbend = technique.is_overbend_on(hole);
        Self {
            hole,
            airflow: technique.airflow(),
            bend: if overbend { 0 } else { technique.depth() },
            overbend,
        }
    }

    pub fn hole(&self) -> u8 {
        self.hole
    }

    pub fn airflow(&self) -> Airflow {
        self.airflow
    }

    /// Hole number with draw holes negated
    pub fn signed_hole(&self) -> i32 {
        match self.airflow {
            Airflow::Blow => self.hole as i32,
            Airflow::Draw => -(self.hole as i32),
        }
    }

    /// Bend depth in half steps
    pub fn bend(&self) -> u8 {
        self.bend
    }

    pub fn is_bend(&self) -> bool {
        self.bend > 0
    }

    pub fn is_overbend(&self) -> bool {
        self.overbend
    }

    /// The layout cell this token plays
    pub fn technique(&self) -> Technique {
        match (self.airflow, self.overbend, self.bend) {
            (Airflow::Blow, true, _) => Technique::HalfStepBlow,
            (Airflow::Draw, true, _) => Technique::HalfStepDraw,
            (Airflow::Blow, false, 0) => Technique::Blow,
            (Airflow::Blow, false, 1) => Technique::HalfStepBlow,
            (Airflow::Blow, false, _) => Technique::WholeStepBlowBend,
            (Airflow::Draw, false, 0) => Technique::Draw,
            (Airflow::Draw, false, 1) => Technique::HalfStepDraw,
            (Airflow::Draw, false, 2) => Technique::WholeStepDrawBend,
            (Airflow::Draw, false, _) => Technique::StepAndHalfDrawBend,
        }
    }
}

impl fmt::Display for TabToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed_hole())?;
        for _ in 0..self.bend {
            write!(f, "{}", BEND_TICK)?;
        }
        if self.overbend {
            write!(f, "{}", OVERBEND_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for TabToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidTab(s.to_string());
        let text = s.trim();

        let (airflow, rest) = match text.strip_prefix('-') {
            Some(rest) => (Airflow::Draw, rest),
            None => (Airflow::Blow, text.strip_prefix('+').unwrap_or(text)),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let hole: u8 = rest[..digits_end].parse().map_err(|_| invalid())?;
        if !(1..=10).contains(&hole) {
            return Err(invalid());
        }

        let marks = &rest[digits_end..];
        let (bend, overbend) = if marks == OVERBEND_SUFFIX.to_string() {
            (0, true)
        } else if marks.chars().all(|c| c == BEND_TICK) && marks.len() <= 3 {
            (marks.len() as u8, false)
        } else {
            return Err(invalid());
        };

        let token = Self {
            hole,
            airflow,
            bend,
            overbend,
        };

        // Must be a cell the hole actually has, written the way it renders
        let technique = token.technique();
        if !technique.available_on(hole) || TabToken::new(hole, technique) != token {
            return Err(invalid());
        }
        Ok(token)
    }
}

impl Layout {
    /// First (hole, technique) producing `target`, in resolver priority order
    pub fn find(&self, target: &Note) -> Option<(u8, Technique)> {
        self.holes().iter().find_map(|hole| {
            hole.cells()
                .find(|(_, pitch)| pitch.same_pitch(target))
                .map(|(technique, _)| (hole.number(), technique))
        })
    }

    /// Tab for `target` on this layout, None if unreachable
    pub fn resolve(&self, target: &Note) -> Option<TabToken> {
        self.find(target)
            .map(|(hole, technique)| TabToken::new(hole, technique))
    }
}

/// Tab for `target` on a harmonica keyed at `key`
///
/// Lower holes win over higher ones and plain blow/draw wins over bends on
/// the same hole, so the result is deterministic even when a pitch is
/// playable in several places.
pub fn resolve(key: &Note, target: &Note) -> Option<TabToken> {
    derive_layout(key).resolve(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(name: &str) -> Note {
        name.parse().unwrap()
    }

    fn tab(key: &str, target: &str) -> Option<String> {
        resolve(&note(key), &note(target)).map(|t| t.to_string())
    }

    #[test]
    fn test_plain_notes_on_c() {
        assert_eq!(tab("C4", "C4").as_deref(), Some("1"));
        assert_eq!(tab("C4", "D4").as_deref(), Some("-1"));
        assert_eq!(tab("C4", "C5").as_deref(), Some("4"));
        assert_eq!(tab("C4", "A6").as_deref(), Some("-10"));
        assert_eq!(tab("C4", "C7").as_deref(), Some("10"));
    }

    #[test]
    fn test_enharmonic_targets() {
        assert_eq!(tab("C4", "Db4").as_deref(), Some("-1'"));
        assert_eq!(tab("C4", "C#4").as_deref(), Some("-1'"));
        assert_eq!(tab("C4", "Gb4").as_deref(), Some("-2'"));
    }

    #[test]
    fn test_bends() {
        assert_eq!(tab("C4", "F4").as_deref(), Some("-2''"));
        assert_eq!(tab("C4", "Bb4").as_deref(), Some("-3'"));
        assert_eq!(tab("C4", "A4").as_deref(), Some("-3''"));
        assert_eq!(tab("C4", "Ab4").as_deref(), Some("-3'''"));
        assert_eq!(tab("C4", "Bb6").as_deref(), Some("10''"));
        assert_eq!(tab("C4", "Eb6").as_deref(), Some("8'"));
    }

    #[test]
    fn test_overblows_and_overdraws() {
        assert_eq!(tab("C4", "B3").as_deref(), Some("1o"));
        assert_eq!(tab("C4", "Eb5").as_deref(), Some("5o"));
        assert_eq!(tab("C4", "F#5").as_deref(), Some("6o"));
        assert_eq!(tab("C4", "Bb5").as_deref(), Some("-7o"));
    }

    #[test]
    fn test_lowest_hole_and_plain_technique_win() {
        // G4: hole 2 draw and hole 3 blow
        assert_eq!(tab("C4", "G4").as_deref(), Some("-2"));
        // B4: hole 3 draw and hole 4 overblow
        assert_eq!(tab("C4", "B4").as_deref(), Some("-3"));
        // B6: hole 10 half-step blow only
        assert_eq!(tab("C4", "B6").as_deref(), Some("10'"));
    }

    #[test]
    fn test_unreachable_notes() {
        assert!(tab("C4", "C3").is_none());
        assert!(tab("C4", "C8").is_none());
        // above hole 10 blow
        assert!(tab("C4", "Db7").is_none());
    }

    #[test]
    fn test_every_layout_cell_resolves_back() {
        for key in ["C4", "D4", "G3", "Bb3", "F#4", "Ab3"] {
            let key = note(key);
            let layout = derive_layout(&key);
            for hole in layout.holes() {
                for (technique, pitch) in hole.cells() {
                    let token = layout.resolve(&pitch).unwrap();
                    let (found_hole, found_technique) = layout.find(&pitch).unwrap();
                    // Either this exact cell, or an earlier one with the same pitch
                    if (found_hole, found_technique) != (hole.number(), technique) {
                        let found_pitch = layout.pitch(found_hole, found_technique).unwrap();
                        assert!(found_pitch.same_pitch(&pitch));
                        assert!(found_hole <= hole.number());
                    } else {
                        assert_eq!(token, TabToken::new(hole.number(), technique));
                    }

                    let cell = TabToken::new(hole.number(), technique);
                    assert_eq!(cell.to_string().parse::<TabToken>(), Ok(cell));
                    assert_eq!(cell.technique(), technique);
                }
            }
        }
    }

    #[test]
    fn test_token_parse() {
        for text in ["4", "-3''", "10'", "6o", "-7o", "-3'''", "1"] {
            let token: TabToken = text.parse().unwrap();
            assert_eq!(token.to_string(), text);
        }
        let token: TabToken = "-2''".parse().unwrap();
        assert_eq!(token.hole(), 2);
        assert_eq!(token.signed_hole(), -2);
        assert_eq!(token.bend(), 2);
        assert!(token.is_bend());
        assert!(!token.is_overbend());
    }

    #[test]
    fn test_token_parse_rejects() {
        for text in ["", "0", "11", "-", "3''''", "4'o", "4x", "o"] {
            assert!(text.parse::<TabToken>().is_err(), "accepted {:?}", text);
        }
    }

    #[test]
    fn test_token_parse_rejects_missing_cells() {
        // 8 blow bends rather than overblows, 5 overblows rather than bends,
        // hole 5 draw and hole 1 blow have no such bends
        for text in ["8o", "5'", "-5'", "1'''", "1''", "-1''", "-4o", "2o", "-10''"] {
            assert!(text.parse::<TabToken>().is_err(), "accepted {:?}", text);
        }
        for text in ["8'", "5o", "-4'", "10''", "-9o", "-2''"] {
            assert!(text.parse::<TabToken>().is_ok(), "rejected {:?}", text);
        }
    }
}
