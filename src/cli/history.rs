//! Audit history command
//!
//! Shows recent operations from the audit log as a table or exports them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::CipherPaths;
use crate::display::format_history_table;
use crate::error::{CipherError, CipherResult};
use crate::export::{export_history_csv, export_history_json, export_history_yaml};

/// History output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistoryFormat {
    /// Terminal table
    Table,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// CSV rows
    Csv,
}

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of most recent entries to show (0 for all)
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: HistoryFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `history`
pub fn handle_history_command(paths: &CipherPaths, args: HistoryArgs) -> CipherResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = if args.limit == 0 {
        logger.read_all()?
    } else {
        logger.read_recent(args.limit)?
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CipherError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_history(&entries, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| CipherError::Export(e.to_string()))?;
            println!("Wrote {} entries to {}", entries.len(), path.display());
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            write_history(&entries, args.format, &mut stdout.lock())
        }
    }
}

/// Render `entries` in `format` to `writer`
pub fn write_history<W: Write>(
    entries: &[AuditEntry],
    format: HistoryFormat,
    writer: &mut W,
) -> CipherResult<()> {
    match format {
        HistoryFormat::Table => {
            writeln!(writer, "{}", format_history_table(entries))?;
            Ok(())
        }
        HistoryFormat::Json => export_history_json(entries, writer, true),
        HistoryFormat::Yaml => export_history_yaml(entries, writer),
        HistoryFormat::Csv => export_history_csv(entries, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Direction;
    use tempfile::TempDir;
    use uuid::Uuid;

    #[test]
    fn test_write_history_formats() {
        let entries = vec![AuditEntry::completed(
            Uuid::new_v4(),
            Direction::Encrypt,
            "abc",
            "din",
        )];

        for format in [
            HistoryFormat::Table,
            HistoryFormat::Json,
            HistoryFormat::Yaml,
            HistoryFormat::Csv,
        ] {
            let mut buffer = Vec::new();
            write_history(&entries, format, &mut buffer).unwrap();
            let text = String::from_utf8(buffer).unwrap();
            assert!(
                text.to_lowercase().contains("encrypt"),
                "{:?} output missing operation",
                format
            );
        }
    }

    #[test]
    fn test_history_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CipherPaths::with_base_dir(temp_dir.path().to_path_buf());
        let logger = AuditLogger::new(paths.audit_log());
        for _ in 0..3 {
            logger
                .log(&AuditEntry::completed(
                    Uuid::new_v4(),
                    Direction::Decrypt,
                    "x",
                    "y",
                ))
                .unwrap();
        }

        let output = temp_dir.path().join("history.csv");
        handle_history_command(
            &paths,
            HistoryArgs {
                limit: 2,
                format: HistoryFormat::Csv,
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let text = std::fs::read_to_string(output).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
