//! dumbcrypt - a combined affine and Caesar substitution cipher
//!
//! Letters and digits go through an affine cipher, punctuation through a
//! Caesar shift, both keyed by a single integer rotation. It is a teaching
//! tool: the scheme offers no real secrecy.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `cipher`: number theory helpers, alphabets, transforms and the
//!   per-character dispatcher (pure, no I/O)
//! - `config`: configuration and path management
//! - `error`: custom error types
//! - `audit`: append-only audit log of operations
//! - `display`: terminal formatting
//! - `export`: audit history export (CSV, JSON, YAML)
//! - `cli`: command handlers and the interactive session
//!
//! # Example
//!
//! ```
//! use dumbcrypt::cipher::{affine_encode, smallest_co_prime, Alphabet, CombinedCipher};
//!
//! let alphabet = Alphabet::alphanumeric();
//! assert_eq!(smallest_co_prime(alphabet.len()).unwrap(), 5);
//! assert_eq!(affine_encode('a', 3, &alphabet).unwrap(), 'd');
//!
//! let cipher = CombinedCipher::default();
//! let secret = cipher.encrypt("Hello,World!", 7).unwrap();
//! assert_eq!(cipher.decrypt(&secret, 7).unwrap(), "hello,world!");
//! assert!(cipher.encrypt("hello world", 7).is_err());
//! ```

pub mod audit;
pub mod cipher;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;

pub use cipher::{Alphabet, CombinedCipher, Direction};
pub use error::{CipherError, CipherResult};
