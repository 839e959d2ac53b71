//! Path management for divvy
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `DIVVY_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/divvy-cli` or `~/.config/divvy-cli`
//! 3. Windows: `%APPDATA%\divvy-cli`

use std::path::PathBuf;

use crate::error::DivvyError;

/// Manages all paths used by divvy
#[derive(Debug, Clone)]
pub struct DivvyPaths {
    /// Base directory for all divvy data
    base_dir: PathBuf,
}

impl DivvyPaths {
    /// Create a new DivvyPaths instance
    ///
    /// Path resolution:
    /// 1. `DIVVY_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/divvy-cli` or `~/.config/divvy-cli`
    /// 3. Windows: `%APPDATA%\divvy-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, DivvyError> {
        let base_dir = if let Ok(custom) = std::env::var("DIVVY_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create DivvyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/divvy-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/divvy-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to groups.json
    pub fn groups_file(&self) -> PathBuf {
        self.data_dir().join("groups.json")
    }

    /// Get the path to settlements.json
    pub fn settlements_file(&self) -> PathBuf {
        self.data_dir().join("settlements.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), DivvyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DivvyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DivvyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, DivvyError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("divvy-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, DivvyError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| DivvyError::Io("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("divvy-cli"))
}
