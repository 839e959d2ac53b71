//! Expense model
//!
//! Represents a shared expense with its split details: how much each
//! participant owes toward the total. Split details are produced by the
//! split calculator and must always reconcile to the expense amount in
//! cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transportation,
    Accommodation,
    Entertainment,
    Utilities,
    #[default]
    Other,
}

impl Category {
    /// Parse a category from its lowercase name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transportation" => Some(Self::Transportation),
            "accommodation" => Some(Self::Accommodation),
            "entertainment" => Some(Self::Entertainment),
            "utilities" => Some(Self::Utilities),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Food => write!(f, "food"),
            Self::Transportation => write!(f, "transportation"),
            Self::Accommodation => write!(f, "accommodation"),
            Self::Entertainment => write!(f, "entertainment"),
            Self::Utilities => write!(f, "utilities"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// How an expense is divided among participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitMethod {
    /// Divided evenly, leftover cents going to the first participants in order
    #[default]
    Equal,
    /// Caller supplies exact per-participant amounts
    Custom,
    /// Caller supplies per-participant percentages of the total
    Percentage,
}

impl SplitMethod {
    /// Parse a split method from its lowercase name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "equal" => Some(Self::Equal),
            "custom" => Some(Self::Custom),
            "percentage" => Some(Self::Percentage),
            _ => None,
        }
    }
}

impl fmt::Display for SplitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Custom => write!(f, "custom"),
            Self::Percentage => write!(f, "percentage"),
        }
    }
}

/// A shared expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the expense was for
    pub description: String,

    /// Total amount paid
    pub amount: Money,

    /// Expense category
    #[serde(default)]
    pub category: Category,

    /// Name of the participant who paid
    pub payer: String,

    /// ISO currency code, always the group's currency
    pub currency: String,

    /// How the expense was divided
    pub split_method: SplitMethod,

    /// Amount owed per participant; cents must sum to `amount`
    pub split_details: BTreeMap<String, Money>,

    /// When the expense occurred
    pub date: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense dated now
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        payer: impl Into<String>,
        currency: impl Into<String>,
        split_method: SplitMethod,
        split_details: BTreeMap<String, Money>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category,
            payer: payer.into(),
            currency: currency.into(),
            split_method,
            split_details,
            date: Utc::now(),
        }
    }

    /// Get the total of all split entries (should equal the expense amount)
    pub fn split_total(&self) -> Money {
        self.split_details.values().copied().sum()
    }

    /// Check whether a participant is referenced as payer or in the split
    pub fn references(&self, name: &str) -> bool {
        self.payer == name || self.split_details.contains_key(name)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount {
                amount: self.amount,
            });
        }

        if self.split_details.is_empty() {
            return Err(ExpenseValidationError::NoSplitEntries);
        }

        let split_total = self.split_total();
        if split_total != self.amount {
            return Err(ExpenseValidationError::SplitMismatch {
                expense_amount: self.amount,
                split_total,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (paid by {})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.payer
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount {
        amount: Money,
    },
    NoSplitEntries,
    SplitMismatch {
        expense_amount: Money,
        split_total: Money,
    },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount { amount } => {
                write!(f, "Expense amount must be greater than 0 (got {})", amount)
            }
            Self::NoSplitEntries => write!(f, "Expense has no split entries"),
            Self::SplitMismatch {
                expense_amount,
                split_total,
            } => write!(
                f,
                "Split totals ({}) do not match expense amount ({})",
                split_total, expense_amount
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_of(entries: &[(&str, i64)]) -> BTreeMap<String, Money> {
        entries
            .iter()
            .map(|(name, cents)| (name.to_string(), Money::from_cents(*cents)))
            .collect()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            "Dinner",
            Money::from_cents(3000),
            Category::Food,
            "Alice",
            "USD",
            SplitMethod::Equal,
            split_of(&[("Alice", 1500), ("Bob", 1500)]),
        );

        assert_eq!(expense.payer, "Alice");
        assert_eq!(expense.split_total(), Money::from_cents(3000));
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validate_split_mismatch() {
        let expense = Expense::new(
            "Taxi",
            Money::from_cents(2000),
            Category::Transportation,
            "Bob",
            "USD",
            SplitMethod::Custom,
            split_of(&[("Alice", 1000), ("Bob", 500)]),
        );

        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::SplitMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_non_positive_amount() {
        let expense = Expense::new(
            "Refund",
            Money::zero(),
            Category::Other,
            "Alice",
            "USD",
            SplitMethod::Equal,
            split_of(&[("Alice", 0)]),
        );

        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_references() {
        let expense = Expense::new(
            "Hotel",
            Money::from_cents(10000),
            Category::Accommodation,
            "Alice",
            "USD",
            SplitMethod::Custom,
            split_of(&[("Bob", 10000)]),
        );

        assert!(expense.references("Alice")); // payer
        assert!(expense.references("Bob")); // in split
        assert!(!expense.references("Carol"));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse("FOOD"), Some(Category::Food));
        assert_eq!(Category::parse("bogus"), None);
    }

    #[test]
    fn test_split_method_serialization() {
        assert_eq!(
            serde_json::to_string(&SplitMethod::Percentage).unwrap(),
            r#""percentage""#
        );
        let m: SplitMethod = serde_json::from_str(r#""equal""#).unwrap();
        assert_eq!(m, SplitMethod::Equal);
    }

    #[test]
    fn test_serialization_round_trip() {
        let expense = Expense::new(
            "Groceries",
            Money::from_cents(4550),
            Category::Food,
            "Carol",
            "EUR",
            SplitMethod::Equal,
            split_of(&[("Carol", 2275), ("Dave", 2275)]),
        );

        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.id, deserialized.id);
        assert_eq!(expense.amount, deserialized.amount);
        assert_eq!(expense.split_details, deserialized.split_details);
    }
}
