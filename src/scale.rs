//! # Diatonic Scales and Piano Highlights
//!
//! Computes the 7 diatonic notes of a key and projects them onto an 88-key
//! piano (index 0 = A0, the lowest key) for keyboard highlighting.

use crate::error::TheoryError;
use crate::pitch::{pitch_class_of, resolve_spelling};
use crate::types::{AccidentalPref, DiatonicScale, Mode};

/// Number of keys on a standard piano.
pub const PIANO_KEYS: usize = 88;

/// Pitch class of the lowest piano key (A0).
const LOWEST_KEY_PITCH_CLASS: usize = 9;

/// Pitch classes of the 7 scale degrees, in scale-degree order.
fn diatonic_pitch_classes(root: &str, mode: Mode) -> Result<[u8; 7], TheoryError> {
    let root_pc = pitch_class_of(root)?;
    Ok(mode.intervals().map(|interval| (root_pc + interval) % 12))
}

/// The 7 notes of a diatonic scale, sharp-preferred, in scale-degree order.
///
/// # Example
/// ```
/// use oto_theory::{diatonic_notes, Mode};
///
/// let notes = diatonic_notes("G", Mode::Major)?;
/// assert_eq!(notes, ["G", "A", "B", "C", "D", "E", "F#"]);
/// # Ok::<(), oto_theory::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::InvalidNote`] if `root` is not recognized.
pub fn diatonic_notes(root: &str, mode: Mode) -> Result<[&'static str; 7], TheoryError> {
    let classes = diatonic_pitch_classes(root, mode)?;
    Ok(classes.map(|pc| resolve_spelling(pc, AccidentalPref::Sharp)))
}

/// Highlight mask over the 88 piano keys: `true` where the key's pitch
/// class is diatonic to the given key.
///
/// # Errors
/// Returns [`TheoryError::InvalidNote`] if `root` is not recognized.
pub fn piano_highlights(root: &str, mode: Mode) -> Result<[bool; PIANO_KEYS], TheoryError> {
    let classes = diatonic_pitch_classes(root, mode)?;

    let mut highlights = [false; PIANO_KEYS];
    for (index, highlighted) in highlights.iter_mut().enumerate() {
        let pc = ((LOWEST_KEY_PITCH_CLASS + index) % 12) as u8;
        *highlighted = classes.contains(&pc);
    }

    Ok(highlights)
}

/// Scale notes and piano highlight mask in one value.
///
/// # Errors
/// Returns [`TheoryError::InvalidNote`] if `root` is not recognized.
pub fn diatonic_scale(root: &str, mode: Mode) -> Result<DiatonicScale, TheoryError> {
    Ok(DiatonicScale {
        notes: diatonic_notes(root, mode)?,
        highlighted: piano_highlights(root, mode)?,
    })
}

/// Whether the piano key at `index` is diatonic to the given key.
///
/// Indices outside 0..88 are `Ok(false)`, not an error.
///
/// # Errors
/// Returns [`TheoryError::InvalidNote`] if `root` is not recognized and
/// `index` is in range.
pub fn is_diatonic_key(index: i32, root: &str, mode: Mode) -> Result<bool, TheoryError> {
    if index < 0 || index >= PIANO_KEYS as i32 {
        return Ok(false);
    }
    let highlights = piano_highlights(root, mode)?;
    Ok(highlights[index as usize])
}
