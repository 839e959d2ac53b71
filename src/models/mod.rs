//! Core data models for divvy
//!
//! This module contains all the data structures that represent the
//! expense-splitting domain: groups, participants, expenses, settlements.

pub mod expense;
pub mod group;
pub mod ids;
pub mod money;
pub mod participant;
pub mod settlement;

pub use expense::{Category, Expense, SplitMethod};
pub use group::{currency_symbol, Group};
pub use ids::{ExpenseId, GroupId, SettlementId};
pub use money::Money;
pub use participant::Participant;
pub use settlement::Settlement;
