//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the cipher core.

pub mod config;
pub mod history;
pub mod session;
pub mod transform;

pub use config::{handle_config_command, ConfigCommands};
pub use history::{handle_history_command, HistoryArgs, HistoryFormat};
pub use session::{handle_session_command, run_session, SessionArgs, SessionSummary};
pub use transform::{handle_transform_command, CipherReport, TransformArgs};

use crate::cipher::CombinedCipher;
use crate::display::format_alphabet_report;
use crate::error::{CipherError, CipherResult};

/// Parse a rotation typed by the user; any sign, surrounding whitespace ignored
pub fn parse_rotation(input: &str) -> CipherResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CipherError::invalid_key(trimmed))
}

/// Handle `inspect`
pub fn handle_inspect_command(cipher: &CombinedCipher) -> CipherResult<()> {
    print!("{}", format_alphabet_report(cipher));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rotation() {
        assert_eq!(parse_rotation("3").unwrap(), 3);
        assert_eq!(parse_rotation("  -12 ").unwrap(), -12);
        assert_eq!(parse_rotation("+4").unwrap(), 4);
        assert_eq!(parse_rotation("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_rotation_rejects_non_integers() {
        for bad in ["", "abc", "1.5", "3e2", "99999999999999999999"] {
            assert!(
                matches!(parse_rotation(bad), Err(CipherError::InvalidKey(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
