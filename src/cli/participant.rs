//! Participant CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::error::{DivvyError, DivvyResult};
use crate::services::GroupService;
use crate::storage::Storage;

/// Participant subcommands
#[derive(Subcommand)]
pub enum ParticipantCommands {
    /// Add a participant to a group
    Add {
        /// Group name or ID
        group: String,
        /// Participant name
        name: String,
        /// Join date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        join_date: Option<String>,
    },
    /// Remove a participant from a group
    ///
    /// Rejected if the participant is referenced by any expense or
    /// settlement, or is the last member.
    Remove {
        /// Group name or ID
        group: String,
        /// Participant name
        name: String,
    },
    /// List a group's participants
    List {
        /// Group name or ID
        group: String,
    },
}

/// Handle a participant command
pub fn handle_participant_command(storage: &Storage, cmd: ParticipantCommands) -> DivvyResult<()> {
    let service = GroupService::new(storage);

    match cmd {
        ParticipantCommands::Add {
            group,
            name,
            join_date,
        } => {
            let found = service.require(&group)?;

            let join_date = join_date
                .map(|d| {
                    NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                        DivvyError::Validation(format!(
                            "Invalid join date '{}'. Use the form YYYY-MM-DD",
                            d
                        ))
                    })
                })
                .transpose()?;

            let participant = service.add_participant(found.id, &name, join_date)?;
            println!(
                "Added participant \"{}\" to {} (joined {})",
                participant.name, found.name, participant.join_date
            );
        }

        ParticipantCommands::Remove { group, name } => {
            let found = service.require(&group)?;
            service.remove_participant(found.id, &name)?;
            println!("Removed participant \"{}\" from {}", name, found.name);
        }

        ParticipantCommands::List { group } => {
            let found = service.require(&group)?;
            if found.participants.is_empty() {
                println!("No participants yet.");
            } else {
                for participant in &found.participants {
                    println!("{} (joined {})", participant.name, participant.join_date);
                }
            }
        }
    }

    Ok(())
}
