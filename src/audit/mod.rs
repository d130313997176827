//! Audit logging system for dumbcrypt
//!
//! Records every encrypt and decrypt request, including rejected ones, in an
//! append-only audit log.
//!
//! - `AuditEntry`: one operation with timestamp, session id, lengths and the
//!   rejection reason if any. Plain text, cipher text and keys are never
//!   recorded.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL) and reads them back.
//! - `SessionRecorder`: stamps entries with a session id and skips writing
//!   when auditing is disabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use dumbcrypt::audit::{AuditLogger, SessionRecorder};
//! use dumbcrypt::cipher::Direction;
//!
//! let recorder = SessionRecorder::new(Some(AuditLogger::new(audit_log_path)));
//! let outcome = cipher.encrypt(&input, rotation);
//! recorder.record(Direction::Encrypt, &input, &outcome)?;
//! ```

mod entry;
mod logger;
mod recorder;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
pub use recorder::SessionRecorder;
