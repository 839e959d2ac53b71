//! Group display formatting

use super::format_currency;
use crate::models::Group;
use crate::reports::GroupSummary;

/// Format a list of groups as a table
pub fn format_group_list(groups: &[Group]) -> String {
    if groups.is_empty() {
        return "No groups yet. Create one with 'divvy group create <name>'.".to_string();
    }

    let name_width = groups.iter().map(|g| g.name.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<8}  {:>12}  {:>8}\n",
        "ID",
        "Name",
        "Currency",
        "Participants",
        "Expenses",
        name_width = name_width,
    ));

    for group in groups {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<8}  {:>12}  {:>8}\n",
            group.id.to_string(),
            group.name,
            group.currency,
            group.participants.len(),
            group.expenses.len(),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single group's details with its summary statistics
pub fn format_group_details(group: &Group, summary: &GroupSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Group: {}\n", group.name));
    output.push_str(&format!("  ID:                 {}\n", group.id));
    output.push_str(&format!("  Currency:           {}\n", group.currency));
    output.push_str(&format!(
        "  Created:            {}\n",
        group.created_at.format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "  Participants:       {}\n",
        summary.participant_count
    ));
    output.push_str(&format!(
        "  Expenses:           {} totalling {}\n",
        summary.expense_count,
        format_currency(summary.total_expenses, &group.currency)
    ));
    output.push_str(&format!(
        "  Average per person: {}\n",
        format_currency(summary.average_per_person, &group.currency)
    ));
    output.push_str(&format!(
        "  Settlements:        {}\n",
        format_currency(summary.total_settlements, &group.currency)
    ));

    if !group.participants.is_empty() {
        output.push_str("\nMembers:\n");
        for participant in &group.participants {
            output.push_str(&format!(
                "  - {} (joined {})\n",
                participant.name, participant.join_date
            ));
        }
    }

    output
}
