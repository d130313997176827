//! Number theory helpers for the affine transform
//!
//! The moduli involved are alphabet lengths (a few dozen at most), so the
//! searches below are exhaustive rather than clever.

use crate::error::{CipherError, CipherResult};

/// Greatest common divisor, with `gcd(a, 0) == a`
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Return true if `a` and `m` are co-prime
pub fn is_co_prime(a: usize, m: usize) -> bool {
    gcd(a, m) == 1
}

/// Find the smallest integer in `[2, m - 1]` that is co-prime with `m`
///
/// # Errors
///
/// Returns [`CipherError::NoCoPrime`] when the search range is empty,
/// i.e. for `m <= 2`.
pub fn smallest_co_prime(m: usize) -> CipherResult<usize> {
    (2..m)
        .find(|&candidate| is_co_prime(candidate, m))
        .ok_or(CipherError::NoCoPrime { modulus: m })
}

/// Find the smallest `x` in `[0, m - 1]` with `(a * x) mod m == 1`
///
/// # Errors
///
/// Returns [`CipherError::NoInverse`] when `a` and `m` are not co-prime
/// (which includes every `m <= 1`).
pub fn modular_inverse(a: usize, m: usize) -> CipherResult<usize> {
    let reduced = if m == 0 { 0 } else { a % m };
    (0..m)
        .find(|&x| (reduced * x) % m == 1)
        .ok_or(CipherError::NoInverse {
            value: a,
            modulus: m,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(5, 36), 1);
    }

    #[test]
    fn test_is_co_prime() {
        assert!(is_co_prime(5, 36));
        assert!(!is_co_prime(4, 36));
        assert!(is_co_prime(1, 1));
        assert!(!is_co_prime(3, 0));
    }

    #[test]
    fn test_smallest_co_prime() {
        assert_eq!(smallest_co_prime(36).unwrap(), 5);
        assert_eq!(smallest_co_prime(32).unwrap(), 3);
        assert_eq!(smallest_co_prime(3).unwrap(), 2);
        assert_eq!(smallest_co_prime(30).unwrap(), 7);
    }

    #[test]
    fn test_smallest_co_prime_is_minimal() {
        for m in 3..200 {
            let a = smallest_co_prime(m).unwrap();
            assert!(is_co_prime(a, m));
            assert!((2..a).all(|x| !is_co_prime(x, m)));
        }
    }

    #[test]
    fn test_smallest_co_prime_small_modulus() {
        assert_eq!(
            smallest_co_prime(2),
            Err(CipherError::NoCoPrime { modulus: 2 })
        );
        assert!(smallest_co_prime(1).is_err());
        assert!(smallest_co_prime(0).is_err());
    }

    #[test]
    fn test_modular_inverse() {
        assert_eq!(modular_inverse(5, 36).unwrap(), 29);
        assert_eq!(modular_inverse(3, 32).unwrap(), 11);
        assert_eq!(modular_inverse(1, 10).unwrap(), 1);
    }

    #[test]
    fn test_modular_inverse_missing() {
        assert_eq!(
            modular_inverse(4, 36),
            Err(CipherError::NoInverse {
                value: 4,
                modulus: 36
            })
        );
        assert!(modular_inverse(3, 1).is_err());
        assert!(modular_inverse(3, 0).is_err());
    }
}
