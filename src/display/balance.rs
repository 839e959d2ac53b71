//! Balance display formatting
//!
//! Renders net and perspective-relative balances for terminal output.

use std::collections::BTreeMap;

use super::format_currency;
use crate::models::Money;

/// Format absolute balances, one line per participant
pub fn format_balances(balances: &BTreeMap<String, Money>, currency: &str) -> String {
    if balances.is_empty() {
        return "No participants.".to_string();
    }

    let name_width = balances.keys().map(|n| n.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    for (name, balance) in balances {
        let direction = if balance.is_negative() { "owes" } else { "is owed" };
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {}\n",
            name,
            format_currency(balance.abs(), currency),
            if balance.is_zero() { "settled up" } else { direction },
            name_width = name_width,
        ));
    }

    output
}

/// Format balances relative to one participant's viewpoint
///
/// Positive entries mean the other participant owes the user; negative
/// entries mean the user owes them.
pub fn format_perspective_balances(
    balances: &BTreeMap<String, Money>,
    user: &str,
    currency: &str,
) -> String {
    if balances.is_empty() {
        return "No other participants.".to_string();
    }

    let mut output = String::new();
    for (name, balance) in balances {
        let line = if balance.is_positive() {
            format!("{} owes {} {}", name, user, format_currency(*balance, currency))
        } else if balance.is_negative() {
            format!(
                "{} owes {} {}",
                user,
                name,
                format_currency(balance.abs(), currency)
            )
        } else {
            format!("{} and {} are settled up", name, user)
        };
        output.push_str(&line);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances_of(entries: &[(&str, i64)]) -> BTreeMap<String, Money> {
        entries
            .iter()
            .map(|(name, cents)| (name.to_string(), Money::from_cents(*cents)))
            .collect()
    }

    #[test]
    fn test_format_balances() {
        let balances = balances_of(&[("Alice", 666), ("Bob", -333), ("Carol", 0)]);
        let output = format_balances(&balances, "USD");

        assert!(output.contains("Alice"));
        assert!(output.contains("$6.66"));
        assert!(output.contains("is owed"));
        assert!(output.contains("owes"));
        assert!(output.contains("settled up"));
    }

    #[test]
    fn test_format_perspective() {
        let balances = balances_of(&[("Bob", 500), ("Carol", -250)]);
        let output = format_perspective_balances(&balances, "Alice", "USD");

        assert!(output.contains("Bob owes Alice $5.00"));
        assert!(output.contains("Alice owes Carol $2.50"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_balances(&BTreeMap::new(), "USD"), "No participants.");
    }
}
