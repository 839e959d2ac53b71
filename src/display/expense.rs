//! Expense display formatting

use super::format_currency;
use crate::models::Expense;

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses added yet.".to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| e.description.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let payer_width = expenses
        .iter()
        .map(|e| e.payer.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<desc_width$}  {:<14}  {:<payer_width$}  {:>12}\n",
        "ID",
        "Date",
        "Description",
        "Category",
        "Payer",
        "Amount",
        desc_width = desc_width,
        payer_width = payer_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<desc_width$}  {:-<14}  {:-<payer_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
        payer_width = payer_width,
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<desc_width$}  {:<14}  {:<payer_width$}  {:>12}\n",
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d"),
            expense.description,
            expense.category.to_string(),
            expense.payer,
            format_currency(expense.amount, &expense.currency),
            desc_width = desc_width,
            payer_width = payer_width,
        ));
    }

    output
}
