//! Storage layer for divvy
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The services read snapshots from here, compute, and persist
//! results back; the balance engine itself never touches storage.

pub mod file_io;
pub mod groups;
pub mod settlements;

pub use file_io::{read_json, write_json_atomic};
pub use groups::GroupRepository;
pub use settlements::SettlementRepository;

use crate::config::paths::DivvyPaths;
use crate::error::DivvyError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: DivvyPaths,
    pub groups: GroupRepository,
    pub settlements: SettlementRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: DivvyPaths) -> Result<Self, DivvyError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            groups: GroupRepository::new(paths.groups_file()),
            settlements: SettlementRepository::new(paths.settlements_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DivvyPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), DivvyError> {
        self.groups.load()?;
        self.settlements.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), DivvyError> {
        self.groups.save()?;
        self.settlements.save()?;
        Ok(())
    }
}
