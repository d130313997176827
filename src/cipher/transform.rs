//! Shift and affine transforms over a single character
//!
//! Every function takes the character, the rotation key and the alphabet
//! explicitly; none of them holds state. Keys of any sign and magnitude are
//! reduced with a Euclidean modulo before use.

use crate::error::CipherResult;

use super::alphabet::Alphabet;
use super::number_theory::{modular_inverse, smallest_co_prime};

/// The multiplier of the affine transform and its inverse for one modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineParams {
    /// Smallest integer >= 2 co-prime with the modulus
    pub multiplier: usize,
    /// Multiplicative inverse of `multiplier` modulo the modulus
    pub inverse: usize,
}

impl AffineParams {
    /// Derive the affine parameters for an alphabet of length `modulus`
    pub fn for_modulus(modulus: usize) -> CipherResult<Self> {
        let multiplier = smallest_co_prime(modulus)?;
        let inverse = modular_inverse(multiplier, modulus)?;
        Ok(Self {
            multiplier,
            inverse,
        })
    }

    /// Derive the affine parameters for `alphabet`
    pub fn for_alphabet(alphabet: &Alphabet) -> CipherResult<Self> {
        Self::for_modulus(alphabet.len())
    }
}

/// Reduce `rotation` into `[0, modulus)`
fn reduce(rotation: i64, modulus: usize) -> usize {
    // Alphabet lengths always fit in i64.
    rotation.rem_euclid(modulus as i64) as usize
}

/// Caesar-shift `ch` forward by `rotation` positions
pub fn shift_encode(ch: char, rotation: i64, alphabet: &Alphabet) -> CipherResult<char> {
    let m = alphabet.len();
    let index = alphabet.require_index(ch)?;
    Ok(alphabet.char_at((index + reduce(rotation, m)) % m))
}

/// Caesar-shift `ch` backward by `rotation` positions
pub fn shift_decode(ch: char, rotation: i64, alphabet: &Alphabet) -> CipherResult<char> {
    let m = alphabet.len();
    let index = alphabet.require_index(ch)?;
    Ok(alphabet.char_at((index + m - reduce(rotation, m)) % m))
}

/// Map `ch` at index `i` to index `(A * i + rotation) mod M`
pub fn affine_encode(ch: char, rotation: i64, alphabet: &Alphabet) -> CipherResult<char> {
    let params = AffineParams::for_alphabet(alphabet)?;
    affine_encode_with(ch, rotation, alphabet, params)
}

/// Map `ch` at index `i` to index `(A^-1 * (i - rotation)) mod M`
pub fn affine_decode(ch: char, rotation: i64, alphabet: &Alphabet) -> CipherResult<char> {
    let params = AffineParams::for_alphabet(alphabet)?;
    affine_decode_with(ch, rotation, alphabet, params)
}

/// Affine encode with parameters computed ahead of time for `alphabet`
pub(crate) fn affine_encode_with(
    ch: char,
    rotation: i64,
    alphabet: &Alphabet,
    params: AffineParams,
) -> CipherResult<char> {
    let m = alphabet.len();
    let index = alphabet.require_index(ch)?;
    let new_index = (params.multiplier * index + reduce(rotation, m)) % m;
    Ok(alphabet.char_at(new_index))
}

/// Affine decode with parameters computed ahead of time for `alphabet`
pub(crate) fn affine_decode_with(
    ch: char,
    rotation: i64,
    alphabet: &Alphabet,
    params: AffineParams,
) -> CipherResult<char> {
    let m = alphabet.len();
    let index = alphabet.require_index(ch)?;
    let shifted = (index + m - reduce(rotation, m)) % m;
    Ok(alphabet.char_at((params.inverse * shifted) % m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    const ROTATIONS: [i64; 9] = [0, 1, 3, 35, 36, 37, -1, -5, -1000];

    #[test]
    fn test_affine_params_for_alphanumeric() {
        let params = AffineParams::for_alphabet(&Alphabet::alphanumeric()).unwrap();
        assert_eq!(params.multiplier, 5);
        assert_eq!(params.inverse, 29);
    }

    #[test]
    fn test_affine_params_for_punctuation() {
        let params = AffineParams::for_alphabet(&Alphabet::punctuation()).unwrap();
        assert_eq!(params.multiplier, 3);
        assert_eq!(params.inverse, 11);
    }

    #[test]
    fn test_affine_encode_known_value() {
        let alphabet = Alphabet::alphanumeric();
        assert_eq!(affine_encode('a', 3, &alphabet).unwrap(), 'd');
        assert_eq!(affine_decode('d', 3, &alphabet).unwrap(), 'a');
        // index 1 -> 5 * 1 + 3 = 8
        assert_eq!(affine_encode('b', 3, &alphabet).unwrap(), 'i');
    }

    #[test]
    fn test_shift_encode_punctuation() {
        let alphabet = Alphabet::punctuation();
        assert_eq!(shift_encode('!', 1, &alphabet).unwrap(), '"');
        assert_eq!(shift_decode('"', 1, &alphabet).unwrap(), '!');
        assert_eq!(shift_encode('~', 1, &alphabet).unwrap(), '!');
    }

    #[test]
    fn test_shift_round_trip() {
        for alphabet in [Alphabet::punctuation(), Alphabet::alphanumeric()] {
            for n in ROTATIONS {
                for ch in alphabet.chars() {
                    let encoded = shift_encode(ch, n, &alphabet).unwrap();
                    assert_eq!(shift_decode(encoded, n, &alphabet).unwrap(), ch);
                }
            }
        }
    }

    #[test]
    fn test_affine_round_trip() {
        for alphabet in [Alphabet::punctuation(), Alphabet::alphanumeric()] {
            for n in ROTATIONS {
                for ch in alphabet.chars() {
                    let encoded = affine_encode(ch, n, &alphabet).unwrap();
                    assert_eq!(affine_decode(encoded, n, &alphabet).unwrap(), ch);
                }
            }
        }
    }

    #[test]
    fn test_zero_rotation() {
        let alphabet = Alphabet::alphanumeric();
        for ch in alphabet.chars() {
            assert_eq!(shift_encode(ch, 0, &alphabet).unwrap(), ch);
        }
        // The affine multiplier still moves characters when the key is zero
        assert_eq!(affine_encode('b', 0, &alphabet).unwrap(), 'f');
    }

    #[test]
    fn test_negative_rotation_symmetry() {
        let alphabet = Alphabet::alphanumeric();
        for ch in alphabet.chars() {
            assert_eq!(
                shift_encode(ch, -5, &alphabet).unwrap(),
                shift_decode(ch, 5, &alphabet).unwrap()
            );
        }
    }

    #[test]
    fn test_extreme_rotation() {
        let alphabet = Alphabet::alphanumeric();
        for n in [i64::MAX, i64::MIN] {
            let encoded = affine_encode('q', n, &alphabet).unwrap();
            assert_eq!(affine_decode(encoded, n, &alphabet).unwrap(), 'q');
            let shifted = shift_encode('q', n, &alphabet).unwrap();
            assert_eq!(shift_decode(shifted, n, &alphabet).unwrap(), 'q');
        }
    }

    #[test]
    fn test_affine_is_a_permutation() {
        let alphabet = Alphabet::alphanumeric();
        let mut seen: Vec<char> = alphabet
            .chars()
            .map(|ch| affine_encode(ch, 7, &alphabet).unwrap())
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), alphabet.len());
    }

    #[test]
    fn test_invalid_character() {
        let alphabet = Alphabet::alphanumeric();
        let expected = Err(CipherError::InvalidCharacter { ch: '!' });
        assert_eq!(shift_encode('!', 1, &alphabet), expected);
        assert_eq!(shift_decode('!', 1, &alphabet), expected);
        assert_eq!(affine_encode('!', 1, &alphabet), expected);
        assert_eq!(affine_decode('!', 1, &alphabet), expected);
    }

    #[test]
    fn test_affine_two_letter_alphabet() {
        let alphabet = Alphabet::new("ab").unwrap();
        assert_eq!(
            affine_encode('a', 1, &alphabet),
            Err(CipherError::NoCoPrime { modulus: 2 })
        );
        // shifting still works on the smallest alphabet
        assert_eq!(shift_encode('a', 1, &alphabet).unwrap(), 'b');
    }
}
