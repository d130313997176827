//! Audit entry data structures
//!
//! Defines the structure of audit log entries. Entries describe what was
//! done, never the text, any character of it, or the rotation key involved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cipher::Direction;
use crate::error::CipherError;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A string was pushed through the cipher forwards
    Encrypt,
    /// A string was pushed through the cipher backwards
    Decrypt,
}

impl From<Direction> for Operation {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Encrypt => Operation::Encrypt,
            Direction::Decrypt => Operation::Decrypt,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "ENCRYPT"),
            Operation::Decrypt => write!(f, "DECRYPT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Session (interactive run or one-shot command) the entry belongs to
    pub session_id: Uuid,

    /// Type of operation performed
    pub operation: Operation,

    /// Number of characters in the input
    pub input_length: usize,

    /// Number of characters in the output, absent when rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_length: Option<usize>,

    /// Why the input was rejected: the error kind and position only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    /// Create an entry for a completed operation
    pub fn completed(
        session_id: Uuid,
        direction: Direction,
        input: &str,
        output: &str,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
            operation: direction.into(),
            input_length: input.chars().count(),
            output_length: Some(output.chars().count()),
            error: None,
        }
    }

    /// Create an entry for an input the cipher refused
    pub fn rejected(
        session_id: Uuid,
        direction: Direction,
        input: &str,
        error: &CipherError,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            session_id,
            operation: direction.into(),
            input_length: input.chars().count(),
            output_length: None,
            error: Some(rejection_reason(error)),
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

/// Describe a rejection without echoing the offending character
fn rejection_reason(error: &CipherError) -> String {
    match error {
        CipherError::UnsupportedCharacter { position, .. } => {
            format!("unsupported character at position {}", position)
        }
        CipherError::InvalidCharacter { .. } => "character not in alphabet".to_string(),
        CipherError::InvalidKey(_) => "invalid rotation".to_string(),
        other => other.to_string(),
    }
}
