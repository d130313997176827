//! Export module for dumbcrypt
//!
//! Exports the audit history in multiple formats:
//! - CSV: spreadsheet-compatible, one row per operation
//! - JSON: machine-readable, with schema version
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_history_csv;
pub use json::{export_history_json, HistoryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_history_yaml;
