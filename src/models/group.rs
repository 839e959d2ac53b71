//! Group model
//!
//! A group owns its participants and expenses exclusively. Participant and
//! expense order is preserved: equal splits hand leftover cents to the first
//! participants in group order, so ordering is part of the data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::ids::{ExpenseId, GroupId};
use super::participant::Participant;

/// Currency codes with known display symbols
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("CAD", "C$"),
    ("INR", "₹"),
];

/// Get the display symbol for an ISO currency code, defaulting to "$"
pub fn currency_symbol(code: &str) -> &'static str {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| *s)
        .unwrap_or("$")
}

/// An expense-sharing group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,

    /// Group name
    pub name: String,

    /// ISO currency code used for all of the group's amounts
    pub currency: String,

    /// Members, in join order
    #[serde(default)]
    pub participants: Vec<Participant>,

    /// Expenses, in entry order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// When the group was created
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Create a new empty group
    pub fn new(name: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            currency: currency.into(),
            participants: Vec::new(),
            expenses: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Participant names in group order
    pub fn participant_names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    /// Check whether a name belongs to a current participant
    pub fn is_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name == name)
    }

    /// Find an expense by ID
    pub fn find_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by ID, mutably
    pub fn find_expense_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Check whether any expense references a participant
    pub fn references_participant(&self, name: &str) -> bool {
        self.expenses.iter().any(|e| e.references(name))
    }

    /// Total of all expenses
    pub fn total_expenses(&self) -> super::Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} participants, {} expenses)",
            self.name,
            self.participants.len(),
            self.expenses.len()
        )
    }
}
