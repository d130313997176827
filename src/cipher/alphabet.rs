//! Ordered alphabets
//!
//! An alphabet defines the index space of a transform. It is validated once
//! on construction and immutable afterwards.

use std::fmt;

use crate::error::{CipherError, CipherResult};

/// ASCII punctuation, in ASCII order
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Lowercase ASCII letters followed by the decimal digits
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// An ordered, duplicate-free sequence of at least two characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from its characters, in order
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidAlphabet`] if the alphabet has fewer
    /// than two characters or repeats one.
    pub fn new(symbols: &str) -> CipherResult<Self> {
        let chars: Vec<char> = symbols.chars().collect();

        if chars.len() < 2 {
            return Err(CipherError::InvalidAlphabet(format!(
                "needs at least 2 characters, got {}",
                chars.len()
            )));
        }

        for (i, ch) in chars.iter().enumerate() {
            if chars[..i].contains(ch) {
                return Err(CipherError::InvalidAlphabet(format!(
                    "duplicate character {:?}",
                    ch
                )));
            }
        }

        Ok(Self { chars })
    }

    /// The built-in punctuation alphabet (32 symbols)
    pub fn punctuation() -> Self {
        Self {
            chars: PUNCTUATION.chars().collect(),
        }
    }

    /// The built-in alphanumeric alphabet (36 symbols)
    pub fn alphanumeric() -> Self {
        Self {
            chars: ALPHANUMERIC.chars().collect(),
        }
    }

    /// Number of characters, the modulus of every transform over this alphabet
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Position of `ch`, if it is a member
    pub fn index_of(&self, ch: char) -> Option<usize> {
        self.chars.iter().position(|&c| c == ch)
    }

    /// Position of `ch`, or [`CipherError::InvalidCharacter`]
    pub fn require_index(&self, ch: char) -> CipherResult<usize> {
        self.index_of(ch).ok_or(CipherError::InvalidCharacter { ch })
    }

    /// Character at `index`, which must be in bounds
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lengths() {
        assert_eq!(Alphabet::punctuation().len(), 32);
        assert_eq!(Alphabet::alphanumeric().len(), 36);
    }

    #[test]
    fn test_builtins_pass_validation() {
        assert_eq!(Alphabet::new(PUNCTUATION).unwrap(), Alphabet::punctuation());
        assert_eq!(
            Alphabet::new(ALPHANUMERIC).unwrap(),
            Alphabet::alphanumeric()
        );
    }

    #[test]
    fn test_punctuation_matches_ascii() {
        let expected: String = (0u8..128)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        assert_eq!(PUNCTUATION, expected);
    }

    #[test]
    fn test_index_lookup() {
        let alphabet = Alphabet::alphanumeric();
        assert_eq!(alphabet.index_of('a'), Some(0));
        assert_eq!(alphabet.index_of('0'), Some(26));
        assert_eq!(alphabet.index_of('A'), None);
        assert_eq!(alphabet.char_at(35), '9');
    }

    #[test]
    fn test_require_index_rejects_non_member() {
        let alphabet = Alphabet::punctuation();
        assert_eq!(
            alphabet.require_index('a'),
            Err(CipherError::InvalidCharacter { ch: 'a' })
        );
    }

    #[test]
    fn test_rejects_short_alphabet() {
        assert!(matches!(
            Alphabet::new("a"),
            Err(CipherError::InvalidAlphabet(_))
        ));
        assert!(Alphabet::new("").is_err());
        assert!(Alphabet::new("ab").is_ok());
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = Alphabet::new("abca").unwrap_err();
        assert_eq!(err.to_string(), "Invalid alphabet: duplicate character 'a'");
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(Alphabet::alphanumeric().to_string(), ALPHANUMERIC);
    }
}
