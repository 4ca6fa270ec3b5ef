//! # Error Types
//!
//! This module defines all error types for the theory engine.
//!
//! Errors are only raised for unrecognized *keys* and *notes* at entry
//! points that cannot proceed without them. Malformed tokens inside a
//! progression are never fatal: they pass through conversions unchanged
//! (or as `"?"` when emitting digits) so the recognizable part of a
//! progression still converts.
//!
//! ## Usage
//! ```rust
//! use oto_theory::{degree_to_absolute, Mode, TheoryError};
//!
//! match degree_to_absolute("I-V-vi-IV", "H", Mode::Major) {
//!     Ok(absolute) => println!("{}", absolute),
//!     Err(TheoryError::InvalidKey { root }) => {
//!         eprintln!("Unknown key root: {}", root);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// A note name was not one of the 12 recognized spellings
    /// (`C`, `C#`, `Db`, `D`, ... `Bb`, `B`).
    ///
    /// # Example
    /// ```
    /// # use oto_theory::TheoryError;
    /// let err = TheoryError::InvalidNote { name: "X".to_string() };
    /// assert_eq!(err.to_string(), "Invalid note: X");
    /// ```
    #[error("Invalid note: {name}")]
    InvalidNote { name: String },

    /// A key root supplied to a conversion or transposition could not be
    /// resolved to a pitch class.
    ///
    /// # Example
    /// ```
    /// # use oto_theory::TheoryError;
    /// let err = TheoryError::InvalidKey { root: "H".to_string() };
    /// assert_eq!(err.to_string(), "Invalid key root: H");
    /// ```
    #[error("Invalid key root: {root}")]
    InvalidKey { root: String },
}
