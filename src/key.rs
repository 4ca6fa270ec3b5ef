//! # Key Metadata
//!
//! Descriptive metadata for a key (letter, accidental marker, localized and
//! English names) and relative major/minor lookup.
//!
//! Localized names cover the 12 tabulated roots x 2 modes of the Japanese
//! key-naming system (ハ ニ ホ ヘ ト イ ロ with 嬰/変 prefixes and 長調/短調
//! suffixes). Roots outside the table fall back to the English name.

use crate::error::TheoryError;
use crate::pitch::{pitch_class_of, resolve_spelling};
use crate::types::{AccidentalPref, KeyInfo, Mode, RelativeKey};

/// Japanese name for a tabulated key, if any.
fn japanese_key_name(root: &str, mode: Mode) -> Option<&'static str> {
    let name = match (root, mode) {
        ("C", Mode::Major) => "ハ長調",
        ("C", Mode::Minor) => "ハ短調",
        ("C#", Mode::Major) => "嬰ハ長調",
        ("C#", Mode::Minor) => "嬰ハ短調",
        ("Db", Mode::Major) => "変ニ長調",
        ("Db", Mode::Minor) => "変ニ短調",
        ("D", Mode::Major) => "ニ長調",
        ("D", Mode::Minor) => "ニ短調",
        ("Eb", Mode::Major) => "変ホ長調",
        ("Eb", Mode::Minor) => "変ホ短調",
        ("E", Mode::Major) => "ホ長調",
        ("E", Mode::Minor) => "ホ短調",
        ("F", Mode::Major) => "ヘ長調",
        ("F", Mode::Minor) => "ヘ短調",
        ("F#", Mode::Major) => "嬰ヘ長調",
        ("F#", Mode::Minor) => "嬰ヘ短調",
        ("Gb", Mode::Major) => "変ト長調",
        ("Gb", Mode::Minor) => "変ト短調",
        ("G", Mode::Major) => "ト長調",
        ("G", Mode::Minor) => "ト短調",
        ("Ab", Mode::Major) => "変イ長調",
        ("Ab", Mode::Minor) => "変イ短調",
        ("A", Mode::Major) => "イ長調",
        ("A", Mode::Minor) => "イ短調",
        ("Bb", Mode::Major) => "変ロ長調",
        ("Bb", Mode::Minor) => "変ロ短調",
        ("B", Mode::Major) => "ロ長調",
        ("B", Mode::Minor) => "ロ短調",
        _ => return None,
    };
    Some(name)
}

/// Descriptive metadata for a key.
///
/// Splits `root` into its bare letter and accidental marker and builds both
/// display names. Never fails: unrecognized roots simply get no localized
/// name.
///
/// # Example
/// ```
/// use oto_theory::{key_info, Mode};
///
/// let info = key_info("F#", Mode::Minor);
/// assert_eq!(info.root, "F");
/// assert_eq!(info.accidental, "#");
/// assert_eq!(info.japanese, "嬰ヘ短調");
/// assert_eq!(info.english, "F# Minor");
/// ```
pub fn key_info(root: &str, mode: Mode) -> KeyInfo {
    let mut chars = root.chars();
    let letter = chars.next().map(|c| c.to_string()).unwrap_or_default();
    let accidental = chars.as_str().to_string();

    let english = format!("{} {}", root, mode.capitalized());
    let japanese = japanese_key_name(root, mode)
        .map(str::to_string)
        .unwrap_or_else(|| english.clone());

    KeyInfo {
        root: letter,
        accidental,
        mode,
        japanese,
        english,
    }
}

/// A key and its relative major/minor counterpart.
///
/// Major keys resolve 3 semitones down, minor keys 3 semitones up, with the
/// opposite mode and a sharp-preferred spelling.
///
/// # Example
/// ```
/// use oto_theory::{relative_key, Mode};
///
/// let rk = relative_key("C", Mode::Major)?;
/// assert_eq!(rk.relative.root, "A");
/// assert_eq!(rk.relative.mode, Mode::Minor);
/// assert_eq!(rk.relative.japanese, "イ短調");
/// # Ok::<(), oto_theory::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::InvalidNote`] if `root` is not recognized.
pub fn relative_key(root: &str, mode: Mode) -> Result<RelativeKey, TheoryError> {
    let original = key_info(root, mode);

    let pc = pitch_class_of(root)? as i32;
    let offset = match mode {
        Mode::Major => -3,
        Mode::Minor => 3,
    };
    let relative_pc = (pc + offset).rem_euclid(12) as u8;
    let relative_root = resolve_spelling(relative_pc, AccidentalPref::Sharp);
    let relative = key_info(relative_root, mode.opposite());

    Ok(RelativeKey { original, relative })
}
