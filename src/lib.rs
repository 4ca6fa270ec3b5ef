//! # oto-theory
//!
//! Music theory engine for a lyric/chord-progression notebook.
//!
//! A chord progression can be written three ways:
//!
//! - **degree**: roman numerals relative to the key (`"I-V-vi-IV"`)
//! - **absolute**: real note names (`"C-G-Am-F"`)
//! - **digits**: one digit 1-7 per chord (`"1564"`)
//!
//! This crate converts among the three, transposes absolute progressions
//! between keys, resolves enharmonic spellings under a sharp/flat
//! preference, and answers key-metadata queries (relative major/minor,
//! localized key names, diatonic scale notes, 88-key piano highlights).
//!
//! Everything is a pure function over string and enum inputs: no state,
//! no I/O, safe to call from anywhere.
//!
//! ```rust
//! use oto_theory::{parse_progression, Mode, NotationKind};
//!
//! let n = parse_progression("1564", NotationKind::Digits, "C", Mode::Major)?;
//! assert_eq!(n.degree, "I-V-vi-IV");
//! assert_eq!(n.absolute, "C-G-A-F");
//! # Ok::<(), oto_theory::TheoryError>(())
//! ```

pub mod chord;
pub mod error;
pub mod key;
pub mod pitch;
pub mod scale;
pub mod types;

pub use chord::{
    absolute_to_degree, degree_to_absolute, degree_to_digits, digits_to_degree,
    parse_progression, transpose_chords,
};
pub use error::TheoryError;
pub use key::{key_info, relative_key};
pub use pitch::{
    normalize_accidental, pitch_class_of, resolve_spelling, spellings_of, transpose_key,
};
pub use scale::{diatonic_notes, diatonic_scale, is_diatonic_key, piano_highlights, PIANO_KEYS};
pub use types::*;
