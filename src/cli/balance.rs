//! Balance CLI command

use crate::display::balance::{format_balances, format_perspective_balances};
use crate::error::{DivvyError, DivvyResult};
use crate::services::{compute_balances, compute_balances_from_perspective};
use crate::services::{GroupService, SettlementService};
use crate::storage::Storage;

/// Show net balances for a group, optionally from one participant's
/// point of view
pub fn handle_balance_command(
    storage: &Storage,
    group: &str,
    perspective: Option<&str>,
) -> DivvyResult<()> {
    let found = GroupService::new(storage).require(group)?;
    let settlements = SettlementService::new(storage).list(found.id)?;

    match perspective {
        Some(user) => {
            if !found.is_participant(user) {
                return Err(DivvyError::unknown_participant(user));
            }
            let balances = compute_balances_from_perspective(&found, &settlements, user)?;
            println!("Balances from {}'s perspective:", user);
            print!(
                "{}",
                format_perspective_balances(&balances, user, &found.currency)
            );
        }
        None => {
            let balances = compute_balances(&found, &settlements)?;
            println!("Balances for {}:", found.name);
            print!("{}", format_balances(&balances, &found.currency));
        }
    }

    Ok(())
}
