//! Alphabet report for `dumbcrypt inspect`
//!
//! Shows the values the affine transform derives from each alphabet.

use crate::cipher::{modular_inverse, smallest_co_prime, Alphabet, CombinedCipher};

/// Describe one alphabet: its modulus and the affine parameters it implies
pub fn format_alphabet_details(label: &str, alphabet: &Alphabet) -> String {
    let m = alphabet.len();
    let mut output = format!("{} ({} characters)\n", label, m);
    output.push_str(&format!("  Symbols:    {}\n", alphabet));

    match smallest_co_prime(m) {
        Ok(a) => {
            output.push_str(&format!("  Multiplier: {}\n", a));
            match modular_inverse(a, m) {
                Ok(inv) => output.push_str(&format!(
                    "  Inverse:    {} ({} x {} = 1 mod {})\n",
                    inv, a, inv, m
                )),
                Err(e) => output.push_str(&format!("  Inverse:    none ({})\n", e)),
            }
        }
        Err(e) => output.push_str(&format!("  Multiplier: none ({})\n", e)),
    }

    output
}

/// Describe both alphabets of `cipher` and how characters are routed
pub fn format_alphabet_report(cipher: &CombinedCipher) -> String {
    let mut output = String::new();
    output.push_str("Cipher Alphabets\n");
    output.push_str("================\n\n");
    output.push_str(&format_alphabet_details("Punctuation (shift)", cipher.punctuation()));
    output.push('\n');
    output.push_str(&format_alphabet_details(
        "Alphanumeric (affine)",
        cipher.alphanumeric(),
    ));
    output.push('\n');
    output.push_str("Letters are lowercased before lookup. Any other character,\n");
    output.push_str("including the space, rejects the whole string.\n");
    output
}
