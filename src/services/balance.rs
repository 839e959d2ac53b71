//! Balance engine
//!
//! Folds a group's expenses and settlements into per-participant net
//! balances. Pure functions over snapshots: no state is retained, and the
//! store is never mutated. Positive balance means the participant is owed
//! money; negative means they owe. Balances always sum to zero.
//!
//! References to names that are not current participants fail with
//! `UnknownParticipant` rather than being skipped, so a stale record
//! surfaces immediately instead of silently corrupting totals.

use std::collections::BTreeMap;

use crate::error::{DivvyError, DivvyResult};
use crate::models::{Group, Money, Settlement};

/// Compute net balances for every participant in the group.
///
/// Every current participant appears in the result, with zero balance if
/// they have no activity.
pub fn compute_balances(
    group: &Group,
    settlements: &[Settlement],
) -> DivvyResult<BTreeMap<String, Money>> {
    let mut balances: BTreeMap<String, Money> = group
        .participants
        .iter()
        .map(|p| (p.name.clone(), Money::zero()))
        .collect();

    for expense in &group.expenses {
        credit(&mut balances, &expense.payer, expense.amount)?;
        for (name, owed) in &expense.split_details {
            debit(&mut balances, name, *owed)?;
        }
    }

    for settlement in settlements {
        debit(&mut balances, &settlement.from, settlement.amount)?;
        credit(&mut balances, &settlement.to, settlement.amount)?;
    }

    Ok(balances)
}

/// Compute balances relative to one participant's viewpoint.
///
/// For every other participant p, `relative[p] = balance[p] - balance[user]`.
/// Positive means p owes the user; negative means the user owes p. The user
/// is excluded from the result.
pub fn compute_balances_from_perspective(
    group: &Group,
    settlements: &[Settlement],
    user: &str,
) -> DivvyResult<BTreeMap<String, Money>> {
    let balances = compute_balances(group, settlements)?;

    let user_balance = *balances
        .get(user)
        .ok_or_else(|| DivvyError::unknown_participant(user))?;

    Ok(balances
        .into_iter()
        .filter(|(name, _)| name != user)
        .map(|(name, balance)| (name, balance - user_balance))
        .collect())
}

fn credit(
    balances: &mut BTreeMap<String, Money>,
    name: &str,
    amount: Money,
) -> DivvyResult<()> {
    match balances.get_mut(name) {
        Some(balance) => {
            *balance += amount;
            Ok(())
        }
        None => Err(DivvyError::unknown_participant(name)),
    }
}

fn debit(balances: &mut BTreeMap<String, Money>, name: &str, amount: Money) -> DivvyResult<()> {
    match balances.get_mut(name) {
        Some(balance) => {
            *balance -= amount;
            Ok(())
        }
        None => Err(DivvyError::unknown_participant(name)),
    }
}
