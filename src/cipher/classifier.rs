//! Character classification and dispatch
//!
//! Punctuation goes through the shift transform, letters and digits through
//! the affine transform after case folding. Anything else rejects the whole
//! string: no partial output is produced.

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, CipherResult};

use super::alphabet::Alphabet;
use super::transform::{
    affine_decode_with, affine_encode_with, shift_decode, shift_encode, AffineParams,
};

/// Which way a string is pushed through the cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// The transform family a character is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Member of the punctuation alphabet; shifted
    Punctuation,
    /// Member of the alphanumeric alphabet after case folding; affine-mapped
    AlphaNumeric,
    /// Neither
    Unsupported,
}

/// The combined affine/Caesar cipher over two alphabets
#[derive(Debug, Clone)]
pub struct CombinedCipher {
    punctuation: Alphabet,
    alphanumeric: Alphabet,
    affine: AffineParams,
}

impl CombinedCipher {
    /// Build a cipher over the given alphabets
    ///
    /// # Errors
    ///
    /// Fails with [`CipherError::InvalidAlphabet`] if the alphabets share a
    /// character or the alphanumeric alphabet holds a character that case
    /// folding changes; either would make decryption route cipher text
    /// differently from the plain text it came from. Fails with
    /// [`CipherError::NoCoPrime`] if the alphanumeric alphabet is too short to
    /// carry an affine multiplier.
    pub fn new(punctuation: Alphabet, alphanumeric: Alphabet) -> CipherResult<Self> {
        if let Some(ch) = alphanumeric.chars().find(|&ch| fold_case(ch) != ch) {
            return Err(CipherError::InvalidAlphabet(format!(
                "alphanumeric character {:?} is not lowercase",
                ch
            )));
        }
        if let Some(ch) = punctuation.chars().find(|&ch| alphanumeric.contains(ch)) {
            return Err(CipherError::InvalidAlphabet(format!(
                "character {:?} is in both alphabets",
                ch
            )));
        }

        let affine = AffineParams::for_alphabet(&alphanumeric)?;
        Ok(Self {
            punctuation,
            alphanumeric,
            affine,
        })
    }

    pub fn punctuation(&self) -> &Alphabet {
        &self.punctuation
    }

    pub fn alphanumeric(&self) -> &Alphabet {
        &self.alphanumeric
    }

    /// Affine parameters of the alphanumeric alphabet
    pub fn affine_params(&self) -> AffineParams {
        self.affine
    }

    /// Decide which transform `ch` is routed to
    pub fn classify(&self, ch: char) -> CharClass {
        if self.punctuation.contains(ch) {
            CharClass::Punctuation
        } else if self.alphanumeric.contains(fold_case(ch)) {
            CharClass::AlphaNumeric
        } else {
            CharClass::Unsupported
        }
    }

    /// Encrypt `text` with `rotation`
    pub fn encrypt(&self, text: &str, rotation: i64) -> CipherResult<String> {
        self.apply(Direction::Encrypt, text, rotation)
    }

    /// Decrypt `text` with `rotation`
    pub fn decrypt(&self, text: &str, rotation: i64) -> CipherResult<String> {
        self.apply(Direction::Decrypt, text, rotation)
    }

    /// Transform every character of `text`, in order
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::UnsupportedCharacter`] for the first character
    /// that belongs to neither alphabet.
    pub fn apply(&self, direction: Direction, text: &str, rotation: i64) -> CipherResult<String> {
        text.chars()
            .enumerate()
            .map(|(position, ch)| self.apply_char(direction, ch, position, rotation))
            .collect()
    }

    fn apply_char(
        &self,
        direction: Direction,
        ch: char,
        position: usize,
        rotation: i64,
    ) -> CipherResult<char> {
        match self.classify(ch) {
            CharClass::Punctuation => match direction {
                Direction::Encrypt => shift_encode(ch, rotation, &self.punctuation),
                Direction::Decrypt => shift_decode(ch, rotation, &self.punctuation),
            },
            CharClass::AlphaNumeric => {
                let folded = fold_case(ch);
                match direction {
                    Direction::Encrypt => {
                        affine_encode_with(folded, rotation, &self.alphanumeric, self.affine)
                    }
                    Direction::Decrypt => {
                        affine_decode_with(folded, rotation, &self.alphanumeric, self.affine)
                    }
                }
            }
            CharClass::Unsupported => Err(CipherError::unsupported(ch, position)),
        }
    }
}

impl Default for CombinedCipher {
    fn default() -> Self {
        Self {
            punctuation: Alphabet::punctuation(),
            alphanumeric: Alphabet::alphanumeric(),
            affine: AffineParams {
                multiplier: 5,
                inverse: 29,
            },
        }
    }
}

/// Lowercase `ch` when that yields exactly one character
fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}
