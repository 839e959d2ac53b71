//! CSV export functionality
//!
//! Exports a group's expenses, balances, and summary statistics as three
//! CSV sections separated by blank lines (spreadsheet-compatible).

use chrono::Utc;
use std::io::Write;

use crate::error::{DivvyError, DivvyResult};
use crate::models::{Group, Settlement};
use crate::reports::GroupSummary;

/// Write a CSV summary of the group to the given writer
pub fn export_summary_csv<W: Write>(
    group: &Group,
    settlements: &[Settlement],
    writer: &mut W,
) -> DivvyResult<()> {
    let summary = GroupSummary::build(group, settlements)?;

    // Expenses section
    let mut section = csv::Writer::from_writer(vec![]);
    section
        .write_record(["Category", "Description", "Amount", "Currency", "Payer", "Date"])
        .map_err(|e| DivvyError::Export(e.to_string()))?;
    for expense in &group.expenses {
        section
            .write_record([
                expense.category.to_string(),
                expense.description.clone(),
                format!("{:.2}", expense.amount.to_decimal()),
                expense.currency.clone(),
                expense.payer.clone(),
                expense.date.format("%Y-%m-%d").to_string(),
            ])
            .map_err(|e| DivvyError::Export(e.to_string()))?;
    }
    write_section(writer, section)?;

    writeln!(writer).map_err(|e| DivvyError::Export(e.to_string()))?;

    // Balances section
    let mut section = csv::Writer::from_writer(vec![]);
    section
        .write_record(["Participant", "Balance", "Direction"])
        .map_err(|e| DivvyError::Export(e.to_string()))?;
    for (name, balance) in &summary.balances {
        let direction = if balance.is_negative() { "Owes" } else { "Owed" };
        section
            .write_record([
                name.clone(),
                format!("{:.2}", balance.abs().to_decimal()),
                direction.to_string(),
            ])
            .map_err(|e| DivvyError::Export(e.to_string()))?;
    }
    write_section(writer, section)?;

    writeln!(writer).map_err(|e| DivvyError::Export(e.to_string()))?;

    // Summary section
    let mut section = csv::Writer::from_writer(vec![]);
    section
        .write_record(["Summary", "Value"])
        .map_err(|e| DivvyError::Export(e.to_string()))?;
    let rows = [
        (
            "Total Expenses".to_string(),
            format!("{:.2}", summary.total_expenses.to_decimal()),
        ),
        (
            "Total Participants".to_string(),
            summary.participant_count.to_string(),
        ),
        ("Group Currency".to_string(), group.currency.clone()),
        (
            "Generated Date".to_string(),
            Utc::now().format("%Y-%m-%d").to_string(),
        ),
    ];
    for (label, value) in rows {
        section
            .write_record([label, value])
            .map_err(|e| DivvyError::Export(e.to_string()))?;
    }
    write_section(writer, section)?;

    Ok(())
}

fn write_section<W: Write>(writer: &mut W, section: csv::Writer<Vec<u8>>) -> DivvyResult<()> {
    let bytes = section
        .into_inner()
        .map_err(|e| DivvyError::Export(e.to_string()))?;
    writer
        .write_all(&bytes)
        .map_err(|e| DivvyError::Export(e.to_string()))
}
