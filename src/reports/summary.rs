//! Group summary report
//!
//! Aggregate statistics for a group: totals, averages, and per-participant
//! balances. Derived on demand, never stored.

use std::collections::BTreeMap;

use crate::error::DivvyResult;
use crate::models::{Group, Money, Settlement};
use crate::services::balance::compute_balances;

/// Summary statistics for a group
#[derive(Debug, Clone)]
pub struct GroupSummary {
    /// Total of all expenses
    pub total_expenses: Money,
    /// Number of participants
    pub participant_count: usize,
    /// Total expenses divided by participant count (zero when empty)
    pub average_per_person: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Total of all recorded settlements
    pub total_settlements: Money,
    /// Net balance per participant
    pub balances: BTreeMap<String, Money>,
}

impl GroupSummary {
    /// Build a summary for a group and its settlements
    pub fn build(group: &Group, settlements: &[Settlement]) -> DivvyResult<Self> {
        let total_expenses = group.total_expenses();
        let participant_count = group.participants.len();
        let average_per_person = if participant_count > 0 {
            Money::from_cents(total_expenses.cents() / participant_count as i64)
        } else {
            Money::zero()
        };
        let total_settlements = settlements.iter().map(|s| s.amount).sum();
        let balances = compute_balances(group, settlements)?;

        Ok(Self {
            total_expenses,
            participant_count,
            average_per_person,
            expense_count: group.expenses.len(),
            total_settlements,
            balances,
        })
    }
}
