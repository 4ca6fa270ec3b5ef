//! # Pitch Classes and Enharmonic Spelling
//!
//! The shared foundation of the theory engine: mapping note-name spellings
//! to semitone pitch classes (C = 0 .. B = 11) and back.
//!
//! The reverse lookup is an explicit table indexed by pitch class, with a
//! sharp and a flat spelling per entry. Natural tones carry the same name
//! in both fields, so the accidental preference is irrelevant for them.
//!
//! ## Related Modules
//! - `key` - relative keys and localized key names
//! - `scale` - diatonic scales and piano highlights
//! - `chord` - progression notation conversion

use crate::error::TheoryError;
use crate::types::AccidentalPref;

/// Enharmonic spellings of one pitch class.
struct Spelling {
    sharp: &'static str,
    flat: &'static str,
}

/// Spellings indexed by pitch class (0 = C .. 11 = B).
/// Naturals carry the same name in both fields.
const SPELLINGS: [Spelling; 12] = [
    Spelling { sharp: "C", flat: "C" },
    Spelling { sharp: "C#", flat: "Db" },
    Spelling { sharp: "D", flat: "D" },
    Spelling { sharp: "D#", flat: "Eb" },
    Spelling { sharp: "E", flat: "E" },
    Spelling { sharp: "F", flat: "F" },
    Spelling { sharp: "F#", flat: "Gb" },
    Spelling { sharp: "G", flat: "G" },
    Spelling { sharp: "G#", flat: "Ab" },
    Spelling { sharp: "A", flat: "A" },
    Spelling { sharp: "A#", flat: "Bb" },
    Spelling { sharp: "B", flat: "B" },
];

/// Semitone pitch class of a recognized note-name spelling.
///
/// Accepts the 12 naturals/sharps plus the 5 flat spellings
/// (17 spellings, 12 classes).
///
/// # Example
/// ```
/// use oto_theory::pitch_class_of;
///
/// assert_eq!(pitch_class_of("C").unwrap(), 0);
/// assert_eq!(pitch_class_of("C#").unwrap(), 1);
/// assert_eq!(pitch_class_of("Db").unwrap(), 1);
/// assert!(pitch_class_of("H").is_err());
/// ```
///
/// # Errors
/// Returns [`TheoryError::InvalidNote`] for any other string.
pub fn pitch_class_of(name: &str) -> Result<u8, TheoryError> {
    let pc = match name {
        "C" => 0,
        "C#" | "Db" => 1,
        "D" => 2,
        "D#" | "Eb" => 3,
        "E" => 4,
        "F" => 5,
        "F#" | "Gb" => 6,
        "G" => 7,
        "G#" | "Ab" => 8,
        "A" => 9,
        "A#" | "Bb" => 10,
        "B" => 11,
        _ => {
            return Err(TheoryError::InvalidNote {
                name: name.to_string(),
            })
        }
    };
    Ok(pc)
}

/// Every recognized spelling of a pitch class: one name for naturals,
/// sharp then flat for chromatic classes.
pub fn spellings_of(pc: u8) -> Vec<&'static str> {
    let spelling = &SPELLINGS[(pc % 12) as usize];
    if spelling.sharp == spelling.flat {
        vec![spelling.sharp]
    } else {
        vec![spelling.sharp, spelling.flat]
    }
}

/// Spell a pitch class under an accidental preference.
///
/// Naturals have a single spelling and return it either way.
pub fn resolve_spelling(pc: u8, pref: AccidentalPref) -> &'static str {
    let spelling = &SPELLINGS[(pc % 12) as usize];
    match pref {
        AccidentalPref::Sharp => spelling.sharp,
        AccidentalPref::Flat => spelling.flat,
    }
}

/// Re-spell a note under an accidental preference.
///
/// # Example
/// ```
/// use oto_theory::{normalize_accidental, AccidentalPref};
///
/// assert_eq!(normalize_accidental("Db", AccidentalPref::Sharp).unwrap(), "C#");
/// assert_eq!(normalize_accidental("C#", AccidentalPref::Flat).unwrap(), "Db");
/// assert_eq!(normalize_accidental("C", AccidentalPref::Flat).unwrap(), "C");
/// ```
///
/// # Errors
/// Returns [`TheoryError::InvalidNote`] if `note` is not recognized.
pub fn normalize_accidental(note: &str, pref: AccidentalPref) -> Result<&'static str, TheoryError> {
    let pc = pitch_class_of(note)?;
    Ok(resolve_spelling(pc, pref))
}

/// Transpose a key root by a signed number of semitones.
///
/// # Example
/// ```
/// use oto_theory::{transpose_key, AccidentalPref};
///
/// assert_eq!(transpose_key("C", 2, AccidentalPref::Sharp).unwrap(), "D");
/// assert_eq!(transpose_key("C", -2, AccidentalPref::Flat).unwrap(), "Bb");
/// assert_eq!(transpose_key("C", -2, AccidentalPref::Sharp).unwrap(), "A#");
/// ```
///
/// # Errors
/// Returns [`TheoryError::InvalidNote`] if `root` is not recognized.
pub fn transpose_key(
    root: &str,
    semitones: i32,
    pref: AccidentalPref,
) -> Result<&'static str, TheoryError> {
    let pc = pitch_class_of(root)? as i32;
    let new_pc = (pc + semitones).rem_euclid(12) as u8;
    Ok(resolve_spelling(new_pc, pref))
}
