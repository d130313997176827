//! Audit history display formatting
//!
//! Renders audit log entries as a terminal table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Time (UTC)")]
    time: String,
    #[tabled(rename = "Session")]
    session: String,
    #[tabled(rename = "Operation")]
    operation: String,
    #[tabled(rename = "In")]
    input_length: usize,
    #[tabled(rename = "Out")]
    output_length: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&AuditEntry> for HistoryRow {
    fn from(entry: &AuditEntry) -> Self {
        let mut session = entry.session_id.simple().to_string();
        session.truncate(8);

        Self {
            time: entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            session,
            operation: entry.operation.to_string(),
            input_length: entry.input_length,
            output_length: entry
                .output_length
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            status: entry.error.clone().unwrap_or_else(|| "ok".to_string()),
        }
    }
}

/// Format audit entries as a table, oldest first
pub fn format_history_table(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No operations recorded.".to_string();
    }

    let rows: Vec<HistoryRow> = entries.iter().map(HistoryRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}
