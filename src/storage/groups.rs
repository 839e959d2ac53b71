//! Group repository for JSON storage
//!
//! Manages loading and saving groups to groups.json. Legacy participant
//! records (bare name strings) are upgraded to the typed form as part of
//! deserialization, so every group in memory is fully migrated.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::DivvyError;
use crate::models::{Group, GroupId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable group data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GroupData {
    groups: Vec<Group>,
}

/// Repository for group persistence
pub struct GroupRepository {
    path: PathBuf,
    data: RwLock<HashMap<GroupId, Group>>,
}

impl GroupRepository {
    /// Create a new group repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load groups from disk
    pub fn load(&self) -> Result<(), DivvyError> {
        let file_data: GroupData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for group in file_data.groups {
            data.insert(group.id, group);
        }

        Ok(())
    }

    /// Save groups to disk
    pub fn save(&self) -> Result<(), DivvyError> {
        let data = self
            .data
            .read()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut groups: Vec<_> = data.values().cloned().collect();
        groups.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &GroupData { groups })
    }

    /// Get a group by ID
    pub fn get(&self, id: GroupId) -> Result<Option<Group>, DivvyError> {
        let data = self
            .data
            .read()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all groups, oldest first
    pub fn get_all(&self) -> Result<Vec<Group>, DivvyError> {
        let data = self
            .data
            .read()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut groups: Vec<_> = data.values().cloned().collect();
        groups.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.name.cmp(&b.name)));
        Ok(groups)
    }

    /// Get a group by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Group>, DivvyError> {
        let data = self
            .data
            .read()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|g| g.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a group
    pub fn upsert(&self, group: Group) -> Result<(), DivvyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(group.id, group);
        Ok(())
    }

    /// Delete a group
    pub fn delete(&self, id: GroupId) -> Result<bool, DivvyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a group name is already taken
    pub fn name_exists(&self, name: &str, exclude_id: Option<GroupId>) -> Result<bool, DivvyError> {
        let data = self
            .data
            .read()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .any(|g| g.name.to_lowercase() == name_lower && Some(g.id) != exclude_id))
    }

    /// Count groups
    pub fn count(&self) -> Result<usize, DivvyError> {
        let data = self
            .data
            .read()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
