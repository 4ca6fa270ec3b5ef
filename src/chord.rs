//! # Chord Progression Notation
//!
//! Converts a chord progression among its three written forms:
//!
//! - **degree**: roman numerals relative to the key, e.g. `"I-V-vi-IV"`
//! - **absolute**: real note names, e.g. `"C-G-Am-F"`
//! - **digits**: one digit 1-7 per chord, e.g. `"1564"`
//!
//! plus transposition of an absolute progression between two keys.
//!
//! All conversions are best-effort over the token list: a token whose
//! head is not a recognizable numeral or note name passes through
//! unchanged (digit emission uses `"?"`), so a partially malformed
//! progression still converts its good tokens. Only an unrecognized
//! *key root* is an error.

use crate::error::TheoryError;
use crate::pitch::{pitch_class_of, resolve_spelling};
use crate::types::{AccidentalPref, ChordNotation, Mode, NotationKind};

/// Degree names indexed by semitone interval from the key root.
const DEGREE_BY_INTERVAL: [&str; 12] = [
    "I", "bII", "II", "bIII", "III", "IV", "#IV", "V", "bVI", "VI", "bVII", "VII",
];

/// Chord tokens of a progression: split on hyphens and whitespace,
/// empty tokens dropped.
fn chord_tokens(progression: &str) -> impl Iterator<Item = &str> {
    progression
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Split a chord token into its leading roman-numeral run and suffix.
/// The numeral part is empty if the token starts with anything else.
fn split_numeral(token: &str) -> (&str, &str) {
    let end = token
        .find(|c| !matches!(c, 'I' | 'V' | 'i' | 'v'))
        .unwrap_or(token.len());
    token.split_at(end)
}

/// Split a chord token into its leading note name (`[A-G]` plus an
/// optional `#`/`b`) and suffix. The note part is empty if the token
/// starts with anything else.
fn split_note(token: &str) -> (&str, &str) {
    let mut chars = token.chars();
    if !matches!(chars.next(), Some('A'..='G')) {
        return ("", token);
    }
    let end = match chars.next() {
        Some('#') | Some('b') => 2,
        _ => 1,
    };
    token.split_at(end)
}

/// Semitone interval of a roman-numeral degree from the key root.
/// Case carries no pitch meaning here; chord quality lives in the suffix.
fn degree_interval(numeral: &str, mode: Mode) -> Option<u8> {
    let interval = match (numeral.to_ascii_uppercase().as_str(), mode) {
        ("I", _) => 0,
        ("II", _) => 2,
        ("III", Mode::Major) => 4,
        ("III", Mode::Minor) => 3,
        ("IV", _) => 5,
        ("V", _) => 7,
        ("VI", Mode::Major) => 9,
        ("VI", Mode::Minor) => 8,
        ("VII", Mode::Major) => 11,
        ("VII", Mode::Minor) => 10,
        _ => return None,
    };
    Some(interval)
}

/// Digit for a bare degree base, shared by both modes.
fn digit_for_base(base: &str) -> &'static str {
    match base {
        "I" | "i" => "1",
        "II" | "ii" | "bII" => "2",
        "III" | "iii" | "bIII" => "3",
        "IV" | "iv" | "#IV" => "4",
        "V" | "v" => "5",
        "VI" | "vi" | "bVI" => "6",
        "VII" | "vii" | "bVII" => "7",
        _ => "?",
    }
}

/// Convert a degree progression to absolute note names.
///
/// Suffixes are carried through verbatim and spellings are
/// sharp-preferred.
///
/// # Example
/// ```
/// use oto_theory::{degree_to_absolute, Mode};
///
/// assert_eq!(degree_to_absolute("I-V-vi-IV", "C", Mode::Major)?, "C-G-A-F");
/// assert_eq!(degree_to_absolute("i-VII-VI-V", "A", Mode::Minor)?, "A-G-F-E");
/// # Ok::<(), oto_theory::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::InvalidKey`] if `key_root` is not recognized.
pub fn degree_to_absolute(degree: &str, key_root: &str, key_mode: Mode) -> Result<String, TheoryError> {
    let root_pc = pitch_class_of(key_root).map_err(|_| TheoryError::InvalidKey {
        root: key_root.to_string(),
    })?;

    let chords: Vec<String> = chord_tokens(degree)
        .map(|token| {
            let (numeral, suffix) = split_numeral(token);
            let interval = match degree_interval(numeral, key_mode) {
                Some(interval) => interval,
                None => return token.to_string(),
            };
            let note = resolve_spelling((root_pc + interval) % 12, AccidentalPref::Sharp);
            format!("{}{}", note, suffix)
        })
        .collect();

    Ok(chords.join("-"))
}

/// Convert an absolute progression to degree notation.
///
/// Chromatic intervals get an accidental prefix (`bII`, `#IV`, ...). A
/// leading minor-quality marker in the suffix (`m`, `-`; `min` via its
/// leading `m`) is consumed and expressed by lowercasing the numeral,
/// except on accidental-prefixed degrees, which keep their case.
///
/// # Example
/// ```
/// use oto_theory::{absolute_to_degree, Mode};
///
/// assert_eq!(absolute_to_degree("C-G-Am-F", "C", Mode::Major)?, "I-V-vi-IV");
/// assert_eq!(absolute_to_degree("Dm7-G7-C", "C", Mode::Major)?, "ii7-V7-I");
/// # Ok::<(), oto_theory::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::InvalidKey`] if `key_root` is not recognized.
pub fn absolute_to_degree(absolute: &str, key_root: &str, _key_mode: Mode) -> Result<String, TheoryError> {
    let root_pc = pitch_class_of(key_root).map_err(|_| TheoryError::InvalidKey {
        root: key_root.to_string(),
    })?;

    let chords: Vec<String> = chord_tokens(absolute)
        .map(|token| {
            let (note, suffix) = split_note(token);
            let pc = match pitch_class_of(note) {
                Ok(pc) => pc,
                Err(_) => return token.to_string(),
            };

            let interval = (pc as i32 - root_pc as i32).rem_euclid(12) as usize;
            let mut degree = DEGREE_BY_INTERVAL[interval].to_string();

            let minor_marker = suffix.starts_with(['m', 'M', '-']);
            let suffix = if minor_marker { &suffix[1..] } else { suffix };
            // accidental-prefixed degrees keep their case even for minor chords
            if minor_marker && !degree.contains(['b', '#']) {
                degree = degree.to_lowercase();
            }

            format!("{}{}", degree, suffix)
        })
        .collect();

    Ok(chords.join("-"))
}

/// Convert digit notation to degree notation, one chord per character.
///
/// The digit-to-degree table is mode-dependent: in major, `2` is `ii`;
/// in minor, `2` is `ii°`. Characters outside `1`-`7` pass through as
/// themselves.
///
/// # Example
/// ```
/// use oto_theory::{digits_to_degree, Mode};
///
/// assert_eq!(digits_to_degree("4536", Mode::Major), "IV-V-iii-vi");
/// assert_eq!(digits_to_degree("1451", Mode::Minor), "i-iv-v-i");
/// ```
pub fn digits_to_degree(digits: &str, key_mode: Mode) -> String {
    let map: [&str; 8] = match key_mode {
        Mode::Major => ["", "I", "ii", "iii", "IV", "V", "vi", "vii°"],
        Mode::Minor => ["", "i", "ii°", "III", "iv", "v", "VI", "VII"],
    };

    let degrees: Vec<String> = digits
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(digit @ 1..=7) => map[digit as usize].to_string(),
            _ => c.to_string(),
        })
        .collect();

    degrees.join("-")
}

/// Convert degree notation to digit notation, no separator.
///
/// Decoration characters (`° + - 7 6 5 9 m a j`) are stripped from each
/// token to recover the bare numeral base. Unrecognized bases emit `"?"`.
/// The base table is shared by both modes, so `key_mode` does not affect
/// the lookup.
///
/// # Example
/// ```
/// use oto_theory::{degree_to_digits, Mode};
///
/// assert_eq!(degree_to_digits("IV-V-iii-vi", Mode::Major), "4536");
/// assert_eq!(degree_to_digits("i-iv-v-i", Mode::Minor), "1451");
/// ```
pub fn degree_to_digits(degree: &str, _key_mode: Mode) -> String {
    chord_tokens(degree)
        .map(|token| {
            let base: String = token
                .chars()
                .filter(|c| !matches!(c, '°' | '+' | '-' | '7' | '6' | '5' | '9' | 'm' | 'a' | 'j'))
                .collect();
            digit_for_base(&base)
        })
        .collect()
}

/// Render a progression given in one notation into all three.
///
/// # Example
/// ```
/// use oto_theory::{parse_progression, Mode, NotationKind};
///
/// let n = parse_progression("1564", NotationKind::Digits, "C", Mode::Major)?;
/// assert_eq!(n.degree, "I-V-vi-IV");
/// assert_eq!(n.absolute, "C-G-A-F");
/// assert_eq!(n.digits, "1564");
/// # Ok::<(), oto_theory::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::InvalidKey`] if `key_root` is not recognized.
pub fn parse_progression(
    input: &str,
    kind: NotationKind,
    key_root: &str,
    key_mode: Mode,
) -> Result<ChordNotation, TheoryError> {
    match kind {
        NotationKind::Degree => Ok(ChordNotation {
            absolute: degree_to_absolute(input, key_root, key_mode)?,
            digits: degree_to_digits(input, key_mode),
            degree: input.to_string(),
        }),
        NotationKind::Absolute => {
            let degree = absolute_to_degree(input, key_root, key_mode)?;
            Ok(ChordNotation {
                digits: degree_to_digits(&degree, key_mode),
                degree,
                absolute: input.to_string(),
            })
        }
        NotationKind::Digits => {
            let degree = digits_to_degree(input, key_mode);
            Ok(ChordNotation {
                absolute: degree_to_absolute(&degree, key_root, key_mode)?,
                degree,
                digits: input.to_string(),
            })
        }
    }
}

/// Transpose an absolute progression from one key to another.
///
/// Note heads shift by the key offset and are re-spelled sharp-preferred;
/// suffixes are carried verbatim. Tokens without a recognizable note head
/// pass through unchanged.
///
/// Identical keys do not return the input verbatim: each token loses one
/// trailing `m`. Kept for compatibility with the editor's re-render path.
///
/// # Example
/// ```
/// use oto_theory::transpose_chords;
///
/// assert_eq!(transpose_chords("C-G-Am-F", "C", "D")?, "D-A-Bm-G");
/// assert_eq!(transpose_chords("C-G-Am-F", "C", "C")?, "C-G-A-F");
/// # Ok::<(), oto_theory::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::InvalidKey`] if either key is not recognized.
pub fn transpose_chords(absolute: &str, from_key: &str, to_key: &str) -> Result<String, TheoryError> {
    if from_key == to_key {
        let chords: Vec<&str> = chord_tokens(absolute)
            .map(|token| token.strip_suffix('m').unwrap_or(token))
            .collect();
        return Ok(chords.join("-"));
    }

    let from_pc = pitch_class_of(from_key).map_err(|_| TheoryError::InvalidKey {
        root: from_key.to_string(),
    })?;
    let to_pc = pitch_class_of(to_key).map_err(|_| TheoryError::InvalidKey {
        root: to_key.to_string(),
    })?;
    let offset = (to_pc as i32 - from_pc as i32).rem_euclid(12) as u8;

    let chords: Vec<String> = chord_tokens(absolute)
        .map(|token| {
            let (note, suffix) = split_note(token);
            let pc = match pitch_class_of(note) {
                Ok(pc) => pc,
                Err(_) => return token.to_string(),
            };
            let note = resolve_spelling((pc + offset) % 12, AccidentalPref::Sharp);
            format!("{}{}", note, suffix)
        })
        .collect();

    Ok(chords.join("-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_to_absolute_major() {
        assert_eq!(
            degree_to_absolute("I-V-vi-IV", "C", Mode::Major).unwrap(),
            "C-G-A-F"
        );
        assert_eq!(
            degree_to_absolute("ii-V-I", "C", Mode::Major).unwrap(),
            "D-G-C"
        );
    }

    #[test]
    fn test_degree_to_absolute_minor_uses_minor_intervals() {
        assert_eq!(
            degree_to_absolute("i-VII-VI-V", "A", Mode::Minor).unwrap(),
            "A-G-F-E"
        );
    }

    #[test]
    fn test_degree_to_absolute_carries_suffix() {
        assert_eq!(
            degree_to_absolute("ii7-V7-Imaj7", "C", Mode::Major).unwrap(),
            "D7-G7-Cmaj7"
        );
    }

    #[test]
    fn test_degree_to_absolute_sharp_preferred() {
        // VII of E major is D#, not Eb
        assert_eq!(degree_to_absolute("VII", "E", Mode::Major).unwrap(), "D#");
    }

    #[test]
    fn test_degree_to_absolute_splits_on_whitespace_too() {
        assert_eq!(
            degree_to_absolute("I  V - vi IV", "C", Mode::Major).unwrap(),
            "C-G-A-F"
        );
    }

    #[test]
    fn test_degree_to_absolute_passes_unknown_tokens() {
        assert_eq!(
            degree_to_absolute("I-X7-V", "C", Mode::Major).unwrap(),
            "C-X7-G"
        );
        // more than three numeral letters is not a degree
        assert_eq!(
            degree_to_absolute("VIII", "C", Mode::Major).unwrap(),
            "VIII"
        );
    }

    #[test]
    fn test_degree_to_absolute_invalid_key() {
        assert_eq!(
            degree_to_absolute("I-V", "H", Mode::Major),
            Err(TheoryError::InvalidKey {
                root: "H".to_string()
            })
        );
    }

    #[test]
    fn test_absolute_to_degree_major() {
        assert_eq!(
            absolute_to_degree("C-G-Am-F", "C", Mode::Major).unwrap(),
            "I-V-vi-IV"
        );
        assert_eq!(
            absolute_to_degree("Dm-G-C-Am", "C", Mode::Major).unwrap(),
            "ii-V-I-vi"
        );
    }

    #[test]
    fn test_absolute_to_degree_strips_minor_marker_keeps_rest() {
        assert_eq!(
            absolute_to_degree("Dm7-G7-C", "C", Mode::Major).unwrap(),
            "ii7-V7-I"
        );
    }

    #[test]
    fn test_absolute_to_degree_chromatic_keeps_case() {
        // Ebm against C major is a bIII with a minor marker: the marker is
        // consumed but the accidental-prefixed degree is not lowercased
        assert_eq!(
            absolute_to_degree("Ebm", "C", Mode::Major).unwrap(),
            "bIII"
        );
        assert_eq!(absolute_to_degree("F#", "C", Mode::Major).unwrap(), "#IV");
    }

    #[test]
    fn test_absolute_to_degree_passes_unknown_tokens() {
        assert_eq!(
            absolute_to_degree("C-N.C.-G", "C", Mode::Major).unwrap(),
            "I-N.C.-V"
        );
    }

    #[test]
    fn test_absolute_to_degree_invalid_key() {
        assert!(absolute_to_degree("C-G", "Q", Mode::Major).is_err());
    }

    #[test]
    fn test_digits_to_degree_major() {
        assert_eq!(digits_to_degree("4536", Mode::Major), "IV-V-iii-vi");
        assert_eq!(digits_to_degree("1564", Mode::Major), "I-V-vi-IV");
        assert_eq!(digits_to_degree("7", Mode::Major), "vii°");
    }

    #[test]
    fn test_digits_to_degree_minor() {
        assert_eq!(digits_to_degree("1451", Mode::Minor), "i-iv-v-i");
        assert_eq!(digits_to_degree("2", Mode::Minor), "ii°");
    }

    #[test]
    fn test_digits_to_degree_passes_unknown_chars() {
        assert_eq!(digits_to_degree("1x8", Mode::Major), "I-x-8");
        assert_eq!(digits_to_degree("09", Mode::Major), "0-9");
    }

    #[test]
    fn test_degree_to_digits() {
        assert_eq!(degree_to_digits("IV-V-iii-vi", Mode::Major), "4536");
        assert_eq!(degree_to_digits("I-V-vi-IV", Mode::Major), "1564");
        assert_eq!(degree_to_digits("i-iv-v-i", Mode::Minor), "1451");
    }

    #[test]
    fn test_degree_to_digits_strips_decorations() {
        assert_eq!(degree_to_digits("vii°-V7-Imaj7", Mode::Major), "751");
        assert_eq!(degree_to_digits("bII-bVII", Mode::Major), "27");
    }

    #[test]
    fn test_degree_to_digits_unknown_base() {
        assert_eq!(degree_to_digits("I-X-V", Mode::Major), "1?5");
    }

    #[test]
    fn test_degree_to_digits_table_is_mode_invariant() {
        assert_eq!(
            degree_to_digits("I-V-vi-IV", Mode::Major),
            degree_to_digits("I-V-vi-IV", Mode::Minor)
        );
    }

    #[test]
    fn test_parse_progression_from_digits() {
        let n = parse_progression("1564", NotationKind::Digits, "C", Mode::Major).unwrap();
        assert_eq!(n.digits, "1564");
        assert_eq!(n.degree, "I-V-vi-IV");
        assert_eq!(n.absolute, "C-G-A-F");
    }

    #[test]
    fn test_parse_progression_from_absolute() {
        let n = parse_progression("C-G-Am-F", NotationKind::Absolute, "C", Mode::Major).unwrap();
        assert_eq!(n.absolute, "C-G-Am-F");
        assert_eq!(n.degree, "I-V-vi-IV");
        assert_eq!(n.digits, "1564");
    }

    #[test]
    fn test_parse_progression_from_degree() {
        let n = parse_progression("I-V-vi-IV", NotationKind::Degree, "G", Mode::Major).unwrap();
        assert_eq!(n.degree, "I-V-vi-IV");
        assert_eq!(n.absolute, "G-D-E-C");
        assert_eq!(n.digits, "1564");
    }

    #[test]
    fn test_transpose_chords_up() {
        assert_eq!(transpose_chords("C-G-Am-F", "C", "D").unwrap(), "D-A-Bm-G");
        assert_eq!(transpose_chords("C-G-Am-F", "C", "G").unwrap(), "G-D-Em-C");
    }

    #[test]
    fn test_transpose_chords_wraps_and_prefers_sharp() {
        assert_eq!(transpose_chords("B-E", "C", "D").unwrap(), "C#-F#");
    }

    #[test]
    fn test_transpose_chords_same_key_strips_trailing_m() {
        assert_eq!(transpose_chords("C-G-Am-F", "C", "C").unwrap(), "C-G-A-F");
        // only a single trailing m goes; the 7 shields it
        assert_eq!(transpose_chords("Am7", "C", "C").unwrap(), "Am7");
    }

    #[test]
    fn test_transpose_chords_passes_unknown_tokens() {
        assert_eq!(transpose_chords("C-N.C.-G", "C", "D").unwrap(), "D-N.C.-A");
    }

    #[test]
    fn test_transpose_chords_invalid_keys() {
        assert_eq!(
            transpose_chords("C-G", "H", "D"),
            Err(TheoryError::InvalidKey {
                root: "H".to_string()
            })
        );
        assert_eq!(
            transpose_chords("C-G", "C", "H"),
            Err(TheoryError::InvalidKey {
                root: "H".to_string()
            })
        );
    }
}
