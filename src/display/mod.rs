//! Display formatting for terminal output
//!
//! Provides the session banner, the alphabet report and the audit history
//! table.

pub mod banner;
pub mod history;
pub mod report;

pub use banner::{format_banner, BANNER};
pub use history::format_history_table;
pub use report::{format_alphabet_details, format_alphabet_report};
