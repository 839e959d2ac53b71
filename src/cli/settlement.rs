//! Settlement CLI commands

use clap::Subcommand;

use crate::display::format_currency;
use crate::error::DivvyResult;
use crate::services::{GroupService, SettlementService};
use crate::storage::Storage;

use super::parse_amount_arg;

/// Settlement subcommands
#[derive(Subcommand)]
pub enum SettlementCommands {
    /// Record a payment between two participants
    Record {
        /// Group name or ID
        group: String,
        /// Participant who paid
        from: String,
        /// Participant who received the payment
        to: String,
        /// Amount paid, like "25.50"
        amount: String,
    },
    /// List a group's settlements
    List {
        /// Group name or ID
        group: String,
    },
}

/// Handle a settlement command
pub fn handle_settlement_command(storage: &Storage, cmd: SettlementCommands) -> DivvyResult<()> {
    let groups = GroupService::new(storage);
    let service = SettlementService::new(storage);

    match cmd {
        SettlementCommands::Record {
            group,
            from,
            to,
            amount,
        } => {
            let found = groups.require(&group)?;
            let amount = parse_amount_arg(&amount)?;
            let settlement = service.record(found.id, &from, &to, amount)?;
            println!(
                "Recorded settlement: {} paid {} {}",
                settlement.from,
                settlement.to,
                format_currency(settlement.amount, &found.currency)
            );
        }

        SettlementCommands::List { group } => {
            let found = groups.require(&group)?;
            let settlements = service.list(found.id)?;
            if settlements.is_empty() {
                println!("No settlements recorded yet.");
            } else {
                for settlement in &settlements {
                    println!(
                        "{}  {} paid {} {}",
                        settlement.date.format("%Y-%m-%d"),
                        settlement.from,
                        settlement.to,
                        format_currency(settlement.amount, &found.currency)
                    );
                }
            }
        }
    }

    Ok(())
}
