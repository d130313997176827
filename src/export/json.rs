//! JSON Export functionality
//!
//! Exports audit history to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::audit::AuditEntry;
use crate::error::{CipherError, CipherResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Audit history export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of rejected operations among `entries`
    pub rejected_count: usize,

    /// Exported entries, oldest first
    pub entries: Vec<AuditEntry>,
}

impl HistoryExport {
    pub fn new(entries: Vec<AuditEntry>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            rejected_count: entries.iter().filter(|e| e.is_rejected()).count(),
            entries,
        }
    }
}

/// Export audit history as JSON
pub fn export_history_json<W: Write>(
    entries: &[AuditEntry],
    writer: &mut W,
    pretty: bool,
) -> CipherResult<()> {
    let export = HistoryExport::new(entries.to_vec());

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| CipherError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| CipherError::Export(e.to_string()))?;

    Ok(())
}
