//! Custom error types for dumbcrypt
//!
//! This module defines the error hierarchy for the cipher core and the
//! surrounding command-line tool using thiserror.

use thiserror::Error;

/// The main error type for dumbcrypt operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A character handed to a transform is not a member of its alphabet
    #[error("Character {ch:?} is not in the alphabet")]
    InvalidCharacter { ch: char },

    /// A character is neither punctuation nor alphanumeric after case folding
    #[error("Unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter { ch: char, position: usize },

    /// No multiplicative inverse exists for `value` modulo `modulus`
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NoInverse { value: usize, modulus: usize },

    /// No integer in [2, modulus - 1] is co-prime with `modulus`
    #[error("No co-prime multiplier exists for modulus {modulus}")]
    NoCoPrime { modulus: usize },

    /// Alphabet failed validation
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// Rotation key could not be parsed or is missing
    #[error("Invalid rotation: {0}")]
    InvalidKey(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// History export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CipherError {
    /// Create an "unsupported character" error
    pub fn unsupported(ch: char, position: usize) -> Self {
        Self::UnsupportedCharacter { ch, position }
    }

    /// Create an "invalid rotation" error from the offending input
    pub fn invalid_key(input: impl AsRef<str>) -> Self {
        Self::InvalidKey(format!("'{}' is not an integer", input.as_ref()))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CipherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CipherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for dumbcrypt operations
pub type CipherResult<T> = Result<T, CipherError>;
