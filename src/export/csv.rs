//! CSV Export functionality
//!
//! Exports audit history to CSV, one row per entry.

use std::io::Write;

use crate::audit::AuditEntry;
use crate::error::{CipherError, CipherResult};

/// Export audit history as CSV
pub fn export_history_csv<W: Write>(entries: &[AuditEntry], writer: &mut W) -> CipherResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Timestamp",
            "Session",
            "Operation",
            "Input Length",
            "Output Length",
            "Error",
        ])
        .map_err(|e| CipherError::Export(e.to_string()))?;

    for entry in entries {
        csv_writer
            .write_record([
                entry.timestamp.to_rfc3339(),
                entry.session_id.to_string(),
                entry.operation.to_string(),
                entry.input_length.to_string(),
                entry
                    .output_length
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                entry.error.clone().unwrap_or_default(),
            ])
            .map_err(|e| CipherError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CipherError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Direction;
    use uuid::Uuid;

    #[test]
    fn test_export_history_csv() {
        let session = Uuid::new_v4();
        let entries = vec![
            AuditEntry::completed(session, Direction::Encrypt, "abc", "din"),
            AuditEntry::rejected(
                session,
                Direction::Encrypt,
                "a, b",
                &CipherError::unsupported(' ', 2),
            ),
        ];

        let mut buffer = Vec::new();
        export_history_csv(&entries, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Timestamp,Session,Operation"));
        assert!(lines[1].contains("ENCRYPT,3,3,"));
        assert!(lines[2].contains("ENCRYPT,4,,"));
    }

    #[test]
    fn test_csv_round_trips_through_reader() {
        let entries = vec![AuditEntry::completed(
            Uuid::new_v4(),
            Direction::Decrypt,
            "x",
            "y",
        )];

        let mut buffer = Vec::new();
        export_history_csv(&entries, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][2], "DECRYPT");
    }
}
