use anyhow::Result;
use clap::{Parser, Subcommand};

use divvy::cli::{
    handle_balance_command, handle_expense_command, handle_export_command, handle_group_command,
    handle_participant_command, handle_settlement_command,
};
use divvy::config::paths::DivvyPaths;
use divvy::storage::Storage;

#[derive(Parser)]
#[command(
    name = "divvy",
    version,
    about = "Track and split shared expenses from the command line",
    long_about = "divvy tracks shared expenses within groups and computes who owes \
                  whom. Expenses can be split equally, by custom amounts, or by \
                  percentages; settlements record payments between participants."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group management commands
    #[command(subcommand)]
    Group(divvy::cli::GroupCommands),

    /// Participant management commands
    #[command(subcommand)]
    Participant(divvy::cli::ParticipantCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(divvy::cli::ExpenseCommands),

    /// Settlement commands
    #[command(subcommand)]
    Settlement(divvy::cli::SettlementCommands),

    /// Show net balances for a group
    Balance {
        /// Group name or ID
        group: String,
        /// Show balances from this participant's point of view
        #[arg(short, long)]
        perspective: Option<String>,
    },

    /// Export a group summary
    #[command(subcommand)]
    Export(divvy::cli::ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DivvyPaths::new()?;
    let storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Commands::Group(cmd) => handle_group_command(&storage, cmd)?,
        Commands::Participant(cmd) => handle_participant_command(&storage, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&storage, cmd)?,
        Commands::Settlement(cmd) => handle_settlement_command(&storage, cmd)?,
        Commands::Balance { group, perspective } => {
            handle_balance_command(&storage, &group, perspective.as_deref())?
        }
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
    }

    Ok(())
}
