//! Settlement repository for JSON storage
//!
//! Manages loading and saving settlements to settlements.json, indexed by
//! group. Entry order within a group is preserved.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::DivvyError;
use crate::models::{GroupId, Settlement};

use super::file_io::{read_json, write_json_atomic};

/// Serializable settlement data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct SettlementData {
    settlements: Vec<Settlement>,
}

/// Repository for settlement persistence
pub struct SettlementRepository {
    path: PathBuf,
    data: RwLock<HashMap<GroupId, Vec<Settlement>>>,
}

impl SettlementRepository {
    /// Create a new settlement repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load settlements from disk
    pub fn load(&self) -> Result<(), DivvyError> {
        let file_data: SettlementData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for settlement in file_data.settlements {
            data.entry(settlement.group_id)
                .or_insert_with(Vec::new)
                .push(settlement);
        }

        Ok(())
    }

    /// Save settlements to disk
    pub fn save(&self) -> Result<(), DivvyError> {
        let data = self
            .data
            .read()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut settlements: Vec<_> = data.values().flatten().cloned().collect();
        settlements.sort_by(|a, b| a.date.cmp(&b.date));

        write_json_atomic(&self.path, &SettlementData { settlements })
    }

    /// Get a group's settlements in entry order
    pub fn get_for_group(&self, group_id: GroupId) -> Result<Vec<Settlement>, DivvyError> {
        let data = self
            .data
            .read()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&group_id).cloned().unwrap_or_default())
    }

    /// Add a settlement
    pub fn add(&self, settlement: Settlement) -> Result<(), DivvyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.entry(settlement.group_id)
            .or_insert_with(Vec::new)
            .push(settlement);
        Ok(())
    }

    /// Remove all settlements belonging to a group
    pub fn delete_group(&self, group_id: GroupId) -> Result<(), DivvyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.remove(&group_id);
        Ok(())
    }

    /// Count settlements across all groups
    pub fn count(&self) -> Result<usize, DivvyError> {
        let data = self
            .data
            .read()
            .map_err(|e| DivvyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().map(|v| v.len()).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, SettlementRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settlements.json");
        let repo = SettlementRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_add_and_get_per_group() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let group_a = GroupId::new();
        let group_b = GroupId::new();

        repo.add(Settlement::new(group_a, "Bob", "Alice", Money::from_cents(500)))
            .unwrap();
        repo.add(Settlement::new(group_b, "Eve", "Dan", Money::from_cents(300)))
            .unwrap();

        let for_a = repo.get_for_group(group_a).unwrap();
        assert_eq!(for_a.len(), 1);
        assert_eq!(for_a[0].from, "Bob");

        assert_eq!(repo.get_for_group(group_b).unwrap().len(), 1);
        assert!(repo.get_for_group(GroupId::new()).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let group_id = GroupId::new();
        repo.add(Settlement::new(group_id, "Bob", "Alice", Money::from_cents(500)))
            .unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("settlements.json");
        let repo2 = SettlementRepository::new(path);
        repo2.load().unwrap();

        let loaded = repo2.get_for_group(group_id).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].amount, Money::from_cents(500));
    }

    #[test]
    fn test_delete_group() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let group_id = GroupId::new();
        repo.add(Settlement::new(group_id, "Bob", "Alice", Money::from_cents(500)))
            .unwrap();

        repo.delete_group(group_id).unwrap();
        assert!(repo.get_for_group(group_id).unwrap().is_empty());
    }
}
