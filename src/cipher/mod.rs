//! The combined affine/Caesar cipher
//!
//! Provides the pure core of dumbcrypt:
//! - `number_theory`: co-primality, smallest co-prime, modular inverse
//! - `alphabet`: validated, ordered alphabets and the two built-in ones
//! - `transform`: shift and affine transforms of a single character
//! - `classifier`: per-character dispatch over a whole string
//!
//! None of these functions perform I/O or keep state.

pub mod alphabet;
pub mod classifier;
pub mod number_theory;
pub mod transform;

pub use alphabet::{Alphabet, ALPHANUMERIC, PUNCTUATION};
pub use classifier::{CharClass, CombinedCipher, Direction};
pub use number_theory::{gcd, is_co_prime, modular_inverse, smallest_co_prime};
pub use transform::{affine_decode, affine_encode, shift_decode, shift_encode, AffineParams};
