//! Per-session audit recording
//!
//! Ties a session id to an optional logger so callers can record every
//! outcome without caring whether auditing is switched on.

use uuid::Uuid;

use crate::cipher::Direction;
use crate::error::CipherResult;

use super::entry::AuditEntry;
use super::logger::AuditLogger;

/// Records the outcomes of one session
pub struct SessionRecorder {
    session_id: Uuid,
    logger: Option<AuditLogger>,
}

impl SessionRecorder {
    /// Start a new session writing to `logger`, or recording nothing if `None`
    pub fn new(logger: Option<AuditLogger>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            logger,
        }
    }

    /// A recorder that discards everything
    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn is_enabled(&self) -> bool {
        self.logger.is_some()
    }

    /// Record the outcome of pushing `input` through the cipher
    pub fn record(
        &self,
        direction: Direction,
        input: &str,
        outcome: &CipherResult<String>,
    ) -> CipherResult<()> {
        let Some(logger) = &self.logger else {
            return Ok(());
        };

        let entry = match outcome {
            Ok(output) => AuditEntry::completed(self.session_id, direction, input, output),
            Err(err) => AuditEntry::rejected(self.session_id, direction, input, err),
        };

        logger.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;
    use tempfile::TempDir;

    #[test]
    fn test_records_both_outcomes() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let recorder = SessionRecorder::new(Some(AuditLogger::new(log_path.clone())));

        recorder
            .record(Direction::Encrypt, "abc", &Ok("din".to_string()))
            .unwrap();
        recorder
            .record(
                Direction::Encrypt,
                "a b",
                &Err(CipherError::unsupported(' ', 1)),
            )
            .unwrap();

        let entries = AuditLogger::new(log_path).read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.session_id == recorder.session_id()));
        assert!(!entries[0].is_rejected());
        assert!(entries[1].is_rejected());
    }

    #[test]
    fn test_disabled_recorder_writes_nothing() {
        let recorder = SessionRecorder::disabled();
        assert!(!recorder.is_enabled());
        recorder
            .record(Direction::Decrypt, "x", &Ok("y".to_string()))
            .unwrap();
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(
            SessionRecorder::disabled().session_id(),
            SessionRecorder::disabled().session_id()
        );
    }
}
