//! Display formatting for terminal output

pub mod balance;
pub mod expense;
pub mod group;

pub use balance::{format_balances, format_perspective_balances};
pub use expense::format_expense_list;
pub use group::{format_group_details, format_group_list};

use crate::models::{currency_symbol, Money};

/// Format an amount with the symbol for an ISO currency code
pub fn format_currency(amount: Money, currency: &str) -> String {
    amount.format_with_symbol(currency_symbol(currency))
}
