//! YAML Export functionality
//!
//! Exports audit history to YAML for human reading.

use std::io::Write;

use crate::audit::AuditEntry;
use crate::error::{CipherError, CipherResult};
use crate::export::json::HistoryExport;

/// Export audit history as YAML
pub fn export_history_yaml<W: Write>(entries: &[AuditEntry], writer: &mut W) -> CipherResult<()> {
    let export = HistoryExport::new(entries.to_vec());

    writeln!(writer, "# dumbcrypt audit history")
        .map_err(|e| CipherError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| CipherError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CipherError::Export(e.to_string()))?;

    Ok(())
}
