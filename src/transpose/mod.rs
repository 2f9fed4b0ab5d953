//! Auto-transpose search and tab annotation
//!
//! Finds the smallest shift that makes every note of a score playable on a
//! given harmonica, optionally without bends or overblows.

use crate::error::{Error, Result};
use crate::harmonica::{derive_layout, Layout, TabToken};
use crate::score::ScoreNote;
use crate::theory::{Interval, Note};
use std::ops::RangeInclusive;

/// Default search range in semitones (three octaves each way)
pub const DEFAULT_RANGE: RangeInclusive<i32> = -36..=36;

/// Largest shift ever tried, twelve octaves; anything further moves every
/// note off the instrument
pub const MAX_OFFSET: i32 = 144;

/// Which kinds of tab the player wants to avoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabFilters {
    /// Reject overblows and overdraws
    pub exclude_overbends: bool,

    /// Reject bent notes
    pub exclude_bends: bool,
}

impl TabFilters {
    pub fn allows(&self, token: &TabToken) -> bool {
        if self.exclude_overbends && token.is_overbend() {
            return false;
        }
        !(self.exclude_bends && token.is_bend())
    }
}

/// Candidate offsets by increasing magnitude: 0, -1, +1, -2, +2, ...
///
/// Offsets outside `range` are skipped, so asymmetric ranges still work.
/// The range is clamped to ±[`MAX_OFFSET`].
pub fn candidate_offsets(range: RangeInclusive<i32>) -> impl Iterator<Item = i32> {
    let bounded = (*range.start()).max(-MAX_OFFSET)..=(*range.end()).min(MAX_OFFSET);
    let reach = bounded.start().abs().max(bounded.end().abs());
    std::iter::once(0)
        .chain((1..=reach).flat_map(|n| [-n, n]))
        .filter(move |offset| bounded.contains(offset))
}

/// Whether every note, shifted by `offset`, has an allowed tab on `layout`
///
/// Stops at the first note that fails.
pub fn is_playable(layout: &Layout, notes: &[Note], offset: i32, filters: TabFilters) -> bool {
    let interval = Interval::from_semitones(offset);
    notes.iter().all(|note| {
        layout
            .resolve(&note.transpose(interval))
            .is_some_and(|token| filters.allows(&token))
    })
}

/// Smallest-magnitude offset making the whole score playable on `key`
///
/// Ties between `-n` and `+n` go to the downward shift. Rests are ignored.
pub fn auto_transpose(
    score: &[ScoreNote],
    key: &Note,
    filters: TabFilters,
    range: RangeInclusive<i32>,
) -> Result<i32> {
    let layout = derive_layout(key);
    let notes: Vec<Note> = score.iter().filter_map(ScoreNote::note).collect();

    log::debug!(
        "Searching transpositions {}..={} for {} notes on {}",
        range.start(),
        range.end(),
        notes.len(),
        key
    );

    for offset in candidate_offsets(range.clone()) {
        if is_playable(&layout, &notes, offset, filters) {
            log::debug!("Found transposition {:+}", offset);
            return Ok(offset);
        }
    }

    Err(Error::NoValidTransposition {
        min: *range.start(),
        max: *range.end(),
    })
}

/// A score note with the tab it would be played as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    /// The note as written in the score
    pub source: ScoreNote,

    /// The note after transposition (None for rests)
    pub transposed: Option<Note>,

    /// Tab for the transposed note, None if unreachable or a rest
    pub tab: Option<TabToken>,
}

/// Attach tabs to every note of a score, shifted by `offset`
///
/// `offset` is expected within ±[`MAX_OFFSET`], as produced by
/// [`auto_transpose`].
pub fn annotate(score: &[ScoreNote], key: &Note, offset: i32) -> Vec<Annotation> {
    let layout = derive_layout(key);
    let interval = Interval::from_semitones(offset);

    score
        .iter()
        .map(|source| {
            let transposed = source.note().map(|note| note.transpose(interval));
            let tab = transposed.and_then(|note| layout.resolve(&note));
            if transposed.is_some() && tab.is_none() {
                log::warn!("No tab for {:?} on {}", transposed, key);
            }
            Annotation {
                source: *source,
                transposed,
                tab,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(name: &str) -> Note {
        name.parse().unwrap()
    }

    fn score(names: &[&str]) -> Vec<ScoreNote> {
        names
            .iter()
            .map(|n| match *n {
                "rest" => ScoreNote::Rest,
                name => ScoreNote::Pitched(note(name)),
            })
            .collect()
    }

    #[test]
    fn test_candidate_order() {
        let offsets: Vec<i32> = candidate_offsets(-3..=3).collect();
        assert_eq!(offsets, [0, -1, 1, -2, 2, -3, 3]);

        let offsets: Vec<i32> = candidate_offsets(-1..=3).collect();
        assert_eq!(offsets, [0, -1, 1, 2, 3]);

        assert_eq!(candidate_offsets(DEFAULT_RANGE).count(), 73);
    }

    #[test]
    fn test_candidate_order_extreme_ranges() {
        let offsets: Vec<i32> = candidate_offsets(i32::MIN..=0).take(5).collect();
        assert_eq!(offsets, [0, -1, -2, -3, -4]);

        let offsets: Vec<i32> = candidate_offsets(i32::MIN..=i32::MAX).take(3).collect();
        assert_eq!(offsets, [0, -1, 1]);
        assert_eq!(
            candidate_offsets(i32::MIN..=i32::MAX).count(),
            2 * MAX_OFFSET as usize + 1
        );
    }

    #[test]
    fn test_extreme_range_still_finds_shift() {
        let notes = score(&["C#7"]);
        let offset = auto_transpose(&notes, &note("C4"), TabFilters::default(), i32::MIN..=0);
        assert_eq!(offset, Ok(-1));
    }

    #[test]
    fn test_already_playable_is_zero() {
        let notes = score(&["C4", "E4", "G4", "rest", "C5"]);
        let offset = auto_transpose(&notes, &note("C4"), TabFilters::default(), DEFAULT_RANGE);
        assert_eq!(offset, Ok(0));
    }

    #[test]
    fn test_shift_down_two() {
        // A D major arpeggio only lands on plain blow notes two semitones down
        let notes = score(&["D4", "F#4", "A4", "D5", "F#5", "A5", "D6"]);
        let filters = TabFilters {
            exclude_overbends: true,
            exclude_bends: true,
        };
        let offset = auto_transpose(&notes, &note("C4"), filters, DEFAULT_RANGE);
        assert_eq!(offset, Ok(-2));
    }

    #[test]
    fn test_prefers_smaller_magnitude() {
        // One semitone above hole 10 blow
        let notes = score(&["C#7"]);
        let offset = auto_transpose(&notes, &note("C4"), TabFilters::default(), DEFAULT_RANGE);
        assert_eq!(offset, Ok(-1));
    }

    #[test]
    fn test_filters_reject_bends() {
        let notes = score(&["F4"]);
        // -2'' without filters
        assert_eq!(
            auto_transpose(&notes, &note("C4"), TabFilters::default(), DEFAULT_RANGE),
            Ok(0)
        );
        let filters = TabFilters {
            exclude_overbends: false,
            exclude_bends: true,
        };
        // F4 -> E4 (2 blow)
        assert_eq!(auto_transpose(&notes, &note("C4"), filters, DEFAULT_RANGE), Ok(-1));
    }

    #[test]
    fn test_filters_reject_overbends() {
        let notes = score(&["F#5"]);
        assert_eq!(
            auto_transpose(&notes, &note("C4"), TabFilters::default(), DEFAULT_RANGE),
            Ok(0)
        );
        let filters = TabFilters {
            exclude_overbends: true,
            exclude_bends: false,
        };
        // F#5 -> F5 (-5)
        assert_eq!(auto_transpose(&notes, &note("C4"), filters, DEFAULT_RANGE), Ok(-1));
    }

    #[test]
    fn test_exhausted_search() {
        // A span wider than the instrument can never fit
        let notes = score(&["C1", "C8"]);
        let result = auto_transpose(&notes, &note("C4"), TabFilters::default(), DEFAULT_RANGE);
        assert_eq!(result, Err(Error::NoValidTransposition { min: -36, max: 36 }));
    }

    #[test]
    fn test_rests_only() {
        let notes = score(&["rest", "rest"]);
        let offset = auto_transpose(&notes, &note("G3"), TabFilters::default(), DEFAULT_RANGE);
        assert_eq!(offset, Ok(0));
    }

    #[test]
    fn test_annotate() {
        let notes = score(&["C4", "rest", "D4", "C2"]);
        let annotations = annotate(&notes, &note("C4"), 0);
        let tabs: Vec<Option<String>> = annotations
            .iter()
            .map(|a| a.tab.map(|t| t.to_string()))
            .collect();
        assert_eq!(
            tabs,
            [Some("1".to_string()), None, Some("-1".to_string()), None]
        );
        assert!(annotations[1].transposed.is_none());
    }

    #[test]
    fn test_annotate_with_offset() {
        let notes = score(&["D4"]);
        let annotations = annotate(&notes, &note("C4"), -2);
        assert_eq!(annotations[0].transposed, Some(note("C4")));
        assert_eq!(annotations[0].tab.map(|t| t.to_string()).as_deref(), Some("1"));
    }
}
