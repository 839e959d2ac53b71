//! Split calculator
//!
//! Divides an expense total among participants according to the chosen
//! method. All allocation happens in integer cents; the cents sum of every
//! returned map equals the total's cents exactly, regardless of
//! divisibility. Remainder distribution is deterministic so repeated calls
//! with identical inputs produce identical splits.

use std::collections::BTreeMap;

use crate::error::{DivvyError, DivvyResult};
use crate::models::Money;

/// Tolerance when checking that percentages sum to 100
const PERCENT_TOLERANCE: f64 = 1e-4;

/// Split a total evenly among participants, in their given order.
///
/// Each participant receives `floor(cents / n)`; the first
/// `cents - base * n` participants receive one extra cent.
pub fn equal_split(participants: &[String], total: Money) -> DivvyResult<BTreeMap<String, Money>> {
    if participants.is_empty() {
        return Err(DivvyError::EmptySplit);
    }
    if !total.is_positive() {
        return Err(DivvyError::InvalidAmount {
            value: total.to_string(),
        });
    }

    let cents = total.cents();
    let n = participants.len() as i64;
    let base = cents / n;
    let mut remainder = cents - base * n;

    let mut split = BTreeMap::new();
    for name in participants {
        let mut share = base;
        if remainder > 0 {
            share += 1; // leftover pennies go to the first participants in order
            remainder -= 1;
        }
        split.insert(name.clone(), Money::from_cents(share));
    }

    Ok(split)
}

/// Build a split from explicit per-participant amounts.
///
/// Zero entries are dropped. The remaining entries must sum to `total` in
/// cents exactly.
pub fn custom_split(
    entries: &[(String, Money)],
    total: Money,
) -> DivvyResult<BTreeMap<String, Money>> {
    if !total.is_positive() {
        return Err(DivvyError::InvalidAmount {
            value: total.to_string(),
        });
    }

    let mut split = BTreeMap::new();
    let mut entered = Money::zero();
    for (name, amount) in entries {
        if amount.is_positive() {
            split.insert(name.clone(), *amount);
            entered += *amount;
        }
    }

    if split.is_empty() {
        return Err(DivvyError::EmptySplit);
    }
    if entered != total {
        return Err(DivvyError::SplitMismatch {
            entered,
            expected: total,
        });
    }

    Ok(split)
}

/// Build a split from per-participant percentages of the total.
///
/// Zero entries are dropped; the remaining percentages must sum to 100
/// within tolerance. Each participant is allocated
/// `floor(pct / 100 * total_cents)`; the difference from the total is
/// corrected one cent at a time, cycling through the entries in input order
/// starting from the first. Sums slightly above 100 within tolerance can
/// over-allocate at the floor step, so the correction runs in both
/// directions.
pub fn percentage_split(
    entries: &[(String, f64)],
    total: Money,
) -> DivvyResult<BTreeMap<String, Money>> {
    if !total.is_positive() {
        return Err(DivvyError::InvalidAmount {
            value: total.to_string(),
        });
    }

    let nonzero: Vec<(&String, f64)> = entries
        .iter()
        .filter(|(_, pct)| *pct > 0.0)
        .map(|(name, pct)| (name, *pct))
        .collect();

    let total_percent: f64 = nonzero.iter().map(|(_, pct)| pct).sum();
    if nonzero.is_empty() || (total_percent - 100.0).abs() > PERCENT_TOLERANCE {
        return Err(DivvyError::PercentageSum {
            total: total_percent,
        });
    }

    let total_cents = total.cents();
    let mut shares: Vec<i64> = nonzero
        .iter()
        .map(|(_, pct)| ((pct / 100.0) * total_cents as f64).floor() as i64)
        .collect();

    // Cycle the cent difference through the entries in input order so the
    // distribution is reproducible. A tolerance-boundary sum above 100 can
    // leave a negative remainder, which is clawed back the same way.
    let n = shares.len();
    let mut remainder = total_cents - shares.iter().sum::<i64>();
    let mut i = 0;
    while remainder != 0 {
        let idx = i % n;
        if remainder > 0 {
            shares[idx] += 1;
            remainder -= 1;
        } else if shares[idx] > 0 {
            shares[idx] -= 1;
            remainder += 1;
        }
        i += 1;
    }

    Ok(nonzero
        .iter()
        .zip(shares)
        .map(|((name, _), cents)| ((*name).clone(), Money::from_cents(cents)))
        .collect())
}
