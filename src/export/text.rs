//! Plain-text summary export
//!
//! Renders a shareable text summary of a group: participants, expenses,
//! balances, and the expense total.

use chrono::Utc;
use std::io::Write;

use crate::display::format_currency;
use crate::error::{DivvyError, DivvyResult};
use crate::models::{Group, Settlement};
use crate::reports::GroupSummary;

/// Write a text summary of the group to the given writer
pub fn export_summary_text<W: Write>(
    group: &Group,
    settlements: &[Settlement],
    writer: &mut W,
) -> DivvyResult<()> {
    let summary = GroupSummary::build(group, settlements)?;

    let mut out = String::new();
    out.push_str(&format!(
        "EXPENSE SUMMARY - {}\n",
        group.name.to_uppercase()
    ));
    out.push_str(&format!(
        "Generated on: {}\n\n",
        Utc::now().format("%Y-%m-%d")
    ));

    out.push_str("PARTICIPANTS:\n");
    for participant in &group.participants {
        out.push_str(&format!("- {}\n", participant.name));
    }

    out.push_str("\nEXPENSES:\n");
    for expense in &group.expenses {
        out.push_str(&format!(
            "- {}: {} ({}, paid by {})\n",
            expense.description,
            format_currency(expense.amount, &expense.currency),
            expense.category,
            expense.payer
        ));
    }

    out.push_str("\nBALANCES:\n");
    for (name, balance) in &summary.balances {
        let direction = if balance.is_negative() { "owes" } else { "owed" };
        out.push_str(&format!(
            "- {}: {} {}\n",
            name,
            format_currency(balance.abs(), &group.currency),
            direction
        ));
    }

    out.push_str(&format!(
        "\nTOTAL EXPENSES: {}\n",
        format_currency(summary.total_expenses, &group.currency)
    ));

    writer
        .write_all(out.as_bytes())
        .map_err(|e| DivvyError::Export(e.to_string()))
}
