//! Group CLI commands
//!
//! Implements CLI commands for group management.

use clap::Subcommand;

use crate::display::group::{format_group_details, format_group_list};
use crate::error::DivvyResult;
use crate::reports::GroupSummary;
use crate::services::{GroupService, SettlementService};
use crate::storage::Storage;

/// Group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a new group
    Create {
        /// Group name
        name: String,
        /// ISO currency code (USD, EUR, GBP, CAD, INR)
        #[arg(short, long, default_value = "USD")]
        currency: String,
    },
    /// List all groups
    List,
    /// Show group details and summary statistics
    Show {
        /// Group name or ID
        group: String,
    },
    /// Rename a group
    Rename {
        /// Group name or ID
        group: String,
        /// New name
        name: String,
    },
    /// Delete a group and its settlements
    Delete {
        /// Group name or ID
        group: String,
    },
}

/// Handle a group command
pub fn handle_group_command(storage: &Storage, cmd: GroupCommands) -> DivvyResult<()> {
    let service = GroupService::new(storage);

    match cmd {
        GroupCommands::Create { name, currency } => {
            let group = service.create(&name, &currency.to_uppercase())?;
            println!("Created group: {}", group.name);
            println!("  Currency: {}", group.currency);
            println!("  ID: {}", group.id);
        }

        GroupCommands::List => {
            let groups = service.list()?;
            print!("{}", format_group_list(&groups));
        }

        GroupCommands::Show { group } => {
            let found = service.require(&group)?;
            let settlements = SettlementService::new(storage).list(found.id)?;
            let summary = GroupSummary::build(&found, &settlements)?;
            print!("{}", format_group_details(&found, &summary));
        }

        GroupCommands::Rename { group, name } => {
            let found = service.require(&group)?;
            let renamed = service.rename(found.id, &name)?;
            println!("Renamed group to: {}", renamed.name);
        }

        GroupCommands::Delete { group } => {
            let found = service.require(&group)?;
            service.delete(found.id)?;
            println!("Deleted group: {}", found.name);
        }
    }

    Ok(())
}
