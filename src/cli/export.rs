//! Export CLI commands

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::DivvyResult;
use crate::export::{export_summary_csv, export_summary_text};
use crate::services::{GroupService, SettlementService};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export a group summary as plain text
    Text {
        /// Group name or ID
        group: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a group summary as CSV
    Csv {
        /// Group name or ID
        group: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> DivvyResult<()> {
    let groups = GroupService::new(storage);

    let (group, output, as_csv) = match cmd {
        ExportCommands::Text { group, output } => (group, output, false),
        ExportCommands::Csv { group, output } => (group, output, true),
    };

    let found = groups.require(&group)?;
    let settlements = SettlementService::new(storage).list(found.id)?;

    match output {
        Some(path) => {
            let mut file = File::create(&path)?;
            if as_csv {
                export_summary_csv(&found, &settlements, &mut file)?;
            } else {
                export_summary_text(&found, &settlements, &mut file)?;
            }
            println!("Exported summary to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if as_csv {
                export_summary_csv(&found, &settlements, &mut handle)?;
            } else {
                export_summary_text(&found, &settlements, &mut handle)?;
            }
        }
    }

    Ok(())
}
