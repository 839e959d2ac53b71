//! Service layer for divvy
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, split computation, and balance folding. The split
//! calculator and balance engine are pure functions; the entity services
//! wrap them with persistence.

pub mod balance;
pub mod expense;
pub mod group;
pub mod settlement;
pub mod split;

pub use balance::{compute_balances, compute_balances_from_perspective};
pub use expense::{ExpenseService, ExpenseUpdate, NewExpense, SplitInput};
pub use group::GroupService;
pub use settlement::SettlementService;
pub use split::{custom_split, equal_split, percentage_split};
