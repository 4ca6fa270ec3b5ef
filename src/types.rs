//! # Value Types
//!
//! This module defines the value types shared across the theory engine.
//!
//! ## Type Overview
//! ```text
//! Mode            major | minor (drives interval and degree tables)
//! AccidentalPref  sharp | flat  (resolves enharmonic spellings)
//! NotationKind    degree | absolute | digits (how a progression is written)
//! KeyInfo         derived key metadata (letter, accidental, localized names)
//! RelativeKey     a key paired with its relative major/minor
//! DiatonicScale   7 scale notes + 88-key piano highlight mask
//! ChordNotation   one progression rendered in all three notations
//! ```
//!
//! All types are plain values: no identity, no interior mutability, no
//! persistence concerns. The enums deserialize from the lowercase strings
//! the editor stores in its records (`key_mode`, `notation_type`,
//! `accidental_pref`), and the derived structs serialize so the editor can
//! hand them to the UI or write them back as opaque data.

use serde::{Deserialize, Serialize};

/// Key mode (major or natural minor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    /// Parse a persisted mode string ("major" or "minor").
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "major" => Some(Mode::Major),
            "minor" => Some(Mode::Minor),
            _ => None,
        }
    }

    /// Semitone offsets of the 7 scale degrees from the root.
    /// Major: W-W-H-W-W-W-H. Natural minor: W-H-W-W-H-W-W.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            Mode::Major => [0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Lowercase label, as stored and as used for localized-name lookup.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }

    /// Capitalized label used in English key names ("C Major").
    pub fn capitalized(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        }
    }

    /// The opposite mode (relative keys swap major and minor).
    pub fn opposite(self) -> Self {
        match self {
            Mode::Major => Mode::Minor,
            Mode::Minor => Mode::Major,
        }
    }
}

/// Preference for spelling chromatic pitch classes (C# vs Db).
/// Natural tones have a single spelling and ignore the preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalPref {
    #[default]
    Sharp,
    Flat,
}

impl AccidentalPref {
    /// Parse a persisted preference string ("sharp" or "flat").
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "sharp" => Some(AccidentalPref::Sharp),
            "flat" => Some(AccidentalPref::Flat),
            _ => None,
        }
    }
}

/// Which of the three notations a progression string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationKind {
    /// Roman numerals relative to the key: "I-V-vi-IV"
    Degree,
    /// Real note names: "C-G-Am-F"
    Absolute,
    /// One digit 1-7 per chord: "1564"
    Digits,
}

impl NotationKind {
    /// Parse a persisted notation type ("degree", "absolute" or "digits").
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "degree" => Some(NotationKind::Degree),
            "absolute" => Some(NotationKind::Absolute),
            "digits" => Some(NotationKind::Digits),
            _ => None,
        }
    }
}

/// Derived metadata for a key, with localized and English display names.
///
/// `root` is the bare letter and `accidental` the marker split off from it,
/// so "F#" becomes `root: "F", accidental: "#"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyInfo {
    pub root: String,
    pub accidental: String,
    pub mode: Mode,
    /// Localized key name, e.g. "ハ長調". Falls back to the English name
    /// for roots outside the tabulated 12 roots x 2 modes.
    pub japanese: String,
    /// English key name, e.g. "C Major".
    pub english: String,
}

/// A key paired with its relative major/minor counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeKey {
    pub original: KeyInfo,
    pub relative: KeyInfo,
}

/// The 7 notes of a diatonic scale plus an 88-key piano highlight mask
/// (index 0 = A0, the lowest key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiatonicScale {
    pub notes: [&'static str; 7],
    #[serde(serialize_with = "serialize_highlight_mask")]
    pub highlighted: [bool; 88],
}

/// Serialize the 88-entry highlight mask as a sequence (serde's derive only
/// covers arrays up to length 32).
fn serialize_highlight_mask<S>(mask: &[bool; 88], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    mask.as_slice().serialize(serializer)
}

/// One chord progression rendered in all three notations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordNotation {
    pub degree: String,
    pub absolute: String,
    pub digits: String,
}
