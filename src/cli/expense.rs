//! Expense CLI commands

use clap::Subcommand;

use crate::display::expense::format_expense_list;
use crate::display::format_currency;
use crate::error::{DivvyError, DivvyResult};
use crate::models::{Category, ExpenseId, Group, SplitMethod};
use crate::services::{ExpenseService, ExpenseUpdate, GroupService, NewExpense, SplitInput};
use crate::storage::Storage;

use super::{parse_amount_arg, parse_split_entries};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense to a group
    Add {
        /// Group name or ID
        group: String,
        /// What the expense was for
        description: String,
        /// Total amount, like "25.50"
        amount: String,
        /// Category (food, transportation, accommodation, entertainment,
        /// utilities, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Name of the participant who paid
        #[arg(short, long)]
        payer: String,
        /// Split method (equal, custom, percentage)
        #[arg(short, long, default_value = "equal")]
        split: String,
        /// Split entries as Name=Amount (custom) or Name=Percent (percentage)
        entries: Vec<String>,
    },
    /// List a group's expenses
    List {
        /// Group name or ID
        group: String,
    },
    /// Edit an expense
    Edit {
        /// Group name or ID
        group: String,
        /// Expense ID
        expense: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New total amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New payer
        #[arg(short, long)]
        payer: Option<String>,
        /// New split method; requires entries for custom and percentage
        #[arg(short, long)]
        split: Option<String>,
        /// Split entries as Name=Amount or Name=Percent
        entries: Vec<String>,
    },
    /// Delete an expense
    Delete {
        /// Group name or ID
        group: String,
        /// Expense ID
        expense: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> DivvyResult<()> {
    let groups = GroupService::new(storage);
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            group,
            description,
            amount,
            category,
            payer,
            split,
            entries,
        } => {
            let found = groups.require(&group)?;
            let amount = parse_amount_arg(&amount)?;
            let category = parse_category(&category)?;
            let split = build_split_input(&split, &entries)?;

            let expense = service.add(
                found.id,
                NewExpense {
                    description,
                    amount,
                    category,
                    payer,
                    split,
                },
            )?;

            println!(
                "Added expense: {} for {}",
                expense.description,
                format_currency(expense.amount, &expense.currency)
            );
            println!("  ID: {}", expense.id);
            println!("  Split ({}):", expense.split_method);
            for (name, owed) in &expense.split_details {
                println!("    {}: {}", name, format_currency(*owed, &expense.currency));
            }
        }

        ExpenseCommands::List { group } => {
            let found = groups.require(&group)?;
            let expenses = service.list(found.id)?;
            print!("{}", format_expense_list(&expenses));
        }

        ExpenseCommands::Edit {
            group,
            expense,
            description,
            amount,
            category,
            payer,
            split,
            entries,
        } => {
            let found = groups.require(&group)?;
            let expense_id = resolve_expense_id(&found, &expense)?;

            let update = ExpenseUpdate {
                description,
                amount: amount.as_deref().map(parse_amount_arg).transpose()?,
                category: category.as_deref().map(parse_category).transpose()?,
                payer,
                split: split
                    .as_deref()
                    .map(|s| build_split_input(s, &entries))
                    .transpose()?,
            };

            let updated = service.edit(found.id, expense_id, update)?;
            println!(
                "Updated expense: {} for {}",
                updated.description,
                format_currency(updated.amount, &updated.currency)
            );
        }

        ExpenseCommands::Delete { group, expense } => {
            let found = groups.require(&group)?;
            let expense_id = resolve_expense_id(&found, &expense)?;
            service.delete(found.id, expense_id)?;
            println!("Deleted expense: {}", expense);
        }
    }

    Ok(())
}

/// Resolve an expense ID argument against a group's expenses
///
/// Accepts a full UUID or a unique prefix of one, with or without the
/// `exp-` display prefix.
fn resolve_expense_id(group: &Group, input: &str) -> DivvyResult<ExpenseId> {
    if let Ok(id) = input.parse::<ExpenseId>() {
        if group.find_expense(id).is_some() {
            return Ok(id);
        }
    }

    let needle = input.strip_prefix("exp-").unwrap_or(input);
    let mut matches = group
        .expenses
        .iter()
        .filter(|e| e.id.as_uuid().to_string().starts_with(needle));

    match (matches.next(), matches.next()) {
        (Some(expense), None) => Ok(expense.id),
        (Some(_), Some(_)) => Err(DivvyError::Validation(format!(
            "Expense ID '{}' is ambiguous",
            input
        ))),
        (None, _) => Err(DivvyError::expense_not_found(input)),
    }
}

fn parse_category(input: &str) -> DivvyResult<Category> {
    Category::parse(input).ok_or_else(|| {
        DivvyError::Validation(format!(
            "Unknown category '{}'. Valid categories: food, transportation, \
             accommodation, entertainment, utilities, other",
            input
        ))
    })
}

/// Build a split input from the method name and "Name=Value" entries
fn build_split_input(method: &str, entries: &[String]) -> DivvyResult<SplitInput> {
    let method = SplitMethod::parse(method).ok_or_else(|| {
        DivvyError::Validation(format!(
            "Unknown split method '{}'. Valid methods: equal, custom, percentage",
            method
        ))
    })?;

    match method {
        SplitMethod::Equal => Ok(SplitInput::Equal),
        SplitMethod::Custom => {
            let parsed = parse_split_entries(entries)?;
            let amounts = parsed
                .into_iter()
                .map(|(name, value)| Ok((name, parse_amount_arg(&value)?)))
                .collect::<DivvyResult<Vec<_>>>()?;
            Ok(SplitInput::Custom(amounts))
        }
        SplitMethod::Percentage => {
            let parsed = parse_split_entries(entries)?;
            let percentages = parsed
                .into_iter()
                .map(|(name, value)| {
                    let pct: f64 = value.parse().map_err(|_| {
                        DivvyError::Validation(format!("Invalid percentage '{}'", value))
                    })?;
                    Ok((name, pct))
                })
                .collect::<DivvyResult<Vec<_>>>()?;
            Ok(SplitInput::Percentage(percentages))
        }
    }
}
