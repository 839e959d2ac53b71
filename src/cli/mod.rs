//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod balance;
pub mod expense;
pub mod export;
pub mod group;
pub mod participant;
pub mod settlement;

pub use balance::handle_balance_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use group::{handle_group_command, GroupCommands};
pub use participant::{handle_participant_command, ParticipantCommands};
pub use settlement::{handle_settlement_command, SettlementCommands};

use crate::error::{DivvyError, DivvyResult};
use crate::models::Money;

/// Parse a user-entered expense or settlement amount
///
/// Accepts only a plain positive decimal with at most two fraction digits,
/// like "25" or "25.50".
pub(crate) fn parse_amount_arg(input: &str) -> DivvyResult<Money> {
    let input = input.trim();

    let valid = match input.split_once('.') {
        None => !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()),
        Some((whole, frac)) => {
            !whole.is_empty()
                && whole.chars().all(|c| c.is_ascii_digit())
                && (1..=2).contains(&frac.len())
                && frac.chars().all(|c| c.is_ascii_digit())
        }
    };
    if !valid {
        return Err(DivvyError::InvalidAmount {
            value: input.to_string(),
        });
    }

    let amount = Money::parse(input).map_err(|_| DivvyError::InvalidAmount {
        value: input.to_string(),
    })?;
    if !amount.is_positive() {
        return Err(DivvyError::InvalidAmount {
            value: input.to_string(),
        });
    }

    Ok(amount)
}

/// Parse "Name=Value" split entry arguments, preserving input order
pub(crate) fn parse_split_entries(entries: &[String]) -> DivvyResult<Vec<(String, String)>> {
    entries
        .iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
                .ok_or_else(|| {
                    DivvyError::Validation(format!(
                        "Invalid split entry '{}'. Use the form Name=Value",
                        entry
                    ))
                })
        })
        .collect()
}
