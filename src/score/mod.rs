//! Score input
//!
//! A score is a flat list of pitched notes and rests, as a notation parser
//! would hand them over. Files are YAML or JSON:
//!
//! ```yaml
//! title: Intro Song
//! notes:
//!   - C4
//!   - { step: E, alter: -1, octave: 4 }
//!   - rest
//! ```

use crate::theory::{Letter, Note};
use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// One event of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreNote {
    Pitched(Note),
    Rest,
}

impl ScoreNote {
    /// Build from notation-style step, alter (semitones) and octave
    ///
    /// None for an unknown step or an out-of-range octave or alter.
    pub fn from_step(step: char, alter: i32, octave: i32) -> Option<Self> {
        let letter = Letter::from_char(step)?;
        Note::checked(letter, alter, octave).map(ScoreNote::Pitched)
    }

    /// The pitch, or None for a rest
    pub fn note(&self) -> Option<Note> {
        match self {
            ScoreNote::Pitched(note) => Some(*note),
            ScoreNote::Rest => None,
        }
    }
}

/// A loaded score
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub title: Option<String>,
    pub notes: Vec<ScoreNote>,
}

impl Score {
    /// Pitched notes only, in order
    pub fn pitched(&self) -> impl Iterator<Item = Note> + '_ {
        self.notes.iter().filter_map(ScoreNote::note)
    }
}

#[derive(Debug, Deserialize)]
struct ScoreFile {
    #[serde(default)]
    title: Option<String>,
    notes: Vec<ScoreEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoreEntry {
    Name(String),
    Pitch {
        step: String,
        #[serde(default)]
        alter: i32,
        octave: i32,
    },
}

impl ScoreEntry {
    fn into_note(self, index: usize) -> Result<ScoreNote> {
        match self {
            ScoreEntry::Name(name) if name.trim().eq_ignore_ascii_case("rest") => {
                Ok(ScoreNote::Rest)
            }
            ScoreEntry::Name(name) => Note::parse(name.trim())
                .map(ScoreNote::Pitched)
                .ok_or_else(|| anyhow!("Note {}: invalid note name {:?}", index + 1, name)),
            ScoreEntry::Pitch { step, alter, octave } => {
                let mut chars = step.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => ScoreNote::from_step(c, alter, octave).ok_or_else(|| {
                        anyhow!(
                            "Note {}: invalid pitch {:?} alter {} octave {}",
                            index + 1,
                            step,
                            alter,
                            octave
                        )
                    }),
                    _ => bail!("Note {}: invalid step {:?}", index + 1, step),
                }
            }
        }
    }
}

fn build(file: ScoreFile) -> Result<Score> {
    let notes = file
        .notes
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_note(index))
        .collect::<Result<Vec<_>>>()?;

    Ok(Score {
        title: file.title,
        notes,
    })
}

/// Parse a YAML score document
pub fn parse_yaml(contents: &str) -> Result<Score> {
    build(serde_yaml::from_str(contents)?)
}

/// Parse a JSON score document
pub fn parse_json(contents: &str) -> Result<Score> {
    build(serde_json::from_str(contents)?)
}

/// Load a score from a YAML or JSON file (by extension)
pub fn load_score(path: &Path) -> Result<Score> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read score {:?}", path))?;

    let score = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_json(&contents)?,
        Some("yaml") | Some("yml") => parse_yaml(&contents)?,
        _ => bail!("Score {:?} must be a .json, .yaml or .yml file", path),
    };

    log::debug!("Loaded {} score events from {:?}", score.notes.len(), path);
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_mixed_entries() {
        let yaml = r#"
title: Test
notes:
  - C4
  - { step: E, alter: -1, octave: 4 }
  - rest
  - { step: g, octave: 3 }
"#;
        let score = parse_yaml(yaml).unwrap();
        assert_eq!(score.title.as_deref(), Some("Test"));
        assert_eq!(score.notes.len(), 4);
        assert_eq!(score.notes[1].note().unwrap().to_string(), "Eb4");
        assert_eq!(score.notes[2], ScoreNote::Rest);
        assert_eq!(score.notes[3].note().unwrap().to_string(), "G3");

        let pitched: Vec<String> = score.pitched().map(|n| n.to_string()).collect();
        assert_eq!(pitched, ["C4", "Eb4", "G3"]);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"notes": ["A4", {"step": "B", "alter": -1, "octave": 4}]}"#;
        let score = parse_json(json).unwrap();
        assert!(score.title.is_none());
        assert_eq!(score.notes[1].note().unwrap().midi(), 70);
    }

    #[test]
    fn test_invalid_entries_are_reported() {
        let err = parse_yaml("notes: [C4, X9]").unwrap_err();
        assert!(err.to_string().contains("Note 2"));
        assert!(parse_yaml("notes: [{ step: H, octave: 4 }]").is_err());
        assert!(parse_yaml("notes: [{ step: CD, octave: 4 }]").is_err());
    }

    #[test]
    fn test_out_of_range_entries_are_rejected() {
        let err = parse_yaml("notes: [C4, C300000000]").unwrap_err();
        assert!(err.to_string().contains("Note 2"));
        assert!(parse_yaml("notes: [{ step: C, octave: 2147483647 }]").is_err());
        assert!(parse_yaml("notes: [{ step: C, alter: -2147483648, octave: 4 }]").is_err());
        assert!(ScoreNote::from_step('B', 0, 9).is_some());
    }

    #[test]
    fn test_load_score_file() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"notes: [C4, D4, E4]\n").unwrap();

        let score = load_score(file.path()).unwrap();
        assert_eq!(score.notes.len(), 3);
    }
}
