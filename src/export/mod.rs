//! Export module for divvy
//!
//! Read-only projections of a group's data in shareable formats:
//! - Text: human-readable summary for sharing
//! - CSV: expense and balance data for spreadsheets

pub mod csv;
pub mod text;

pub use csv::export_summary_csv;
pub use text::export_summary_text;
