//! Group service
//!
//! Provides business logic for group and participant management, including
//! the removal guards: a participant referenced by any expense or settlement
//! cannot be removed, and a group must always retain at least one
//! participant once members exist.

use chrono::NaiveDate;

use crate::error::{DivvyError, DivvyResult};
use crate::models::{Group, GroupId, Participant};
use crate::storage::Storage;

/// Service for group management
pub struct GroupService<'a> {
    storage: &'a Storage,
}

impl<'a> GroupService<'a> {
    /// Create a new group service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new group
    pub fn create(&self, name: &str, currency: &str) -> DivvyResult<Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DivvyError::Validation("Group name is required".into()));
        }

        if self.storage.groups.name_exists(name, None)? {
            return Err(DivvyError::Duplicate {
                entity_type: "Group",
                identifier: name.to_string(),
            });
        }

        let group = Group::new(name, currency);
        self.storage.groups.upsert(group.clone())?;
        self.storage.groups.save()?;

        Ok(group)
    }

    /// List all groups, oldest first
    pub fn list(&self) -> DivvyResult<Vec<Group>> {
        self.storage.groups.get_all()
    }

    /// Find a group by name or ID
    ///
    /// IDs display truncated (`grp-` plus the first eight UUID characters),
    /// so besides exact names and full UUIDs a unique UUID prefix resolves
    /// too.
    pub fn find(&self, identifier: &str) -> DivvyResult<Option<Group>> {
        if let Ok(id) = identifier.parse::<GroupId>() {
            if let Some(group) = self.storage.groups.get(id)? {
                return Ok(Some(group));
            }
        }
        if let Some(group) = self.storage.groups.get_by_name(identifier)? {
            return Ok(Some(group));
        }

        let needle = identifier.strip_prefix("grp-").unwrap_or(identifier);
        let mut matches = self
            .storage
            .groups
            .get_all()?
            .into_iter()
            .filter(|g| g.id.as_uuid().to_string().starts_with(needle));

        match (matches.next(), matches.next()) {
            (Some(group), None) => Ok(Some(group)),
            (Some(_), Some(_)) => Err(DivvyError::Validation(format!(
                "Group ID '{}' is ambiguous",
                identifier
            ))),
            (None, _) => Ok(None),
        }
    }

    /// Find a group by name or ID, erroring if absent
    pub fn require(&self, identifier: &str) -> DivvyResult<Group> {
        self.find(identifier)?
            .ok_or_else(|| DivvyError::group_not_found(identifier))
    }

    /// Rename a group
    pub fn rename(&self, id: GroupId, new_name: &str) -> DivvyResult<Group> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(DivvyError::Validation("Group name is required".into()));
        }

        if self.storage.groups.name_exists(new_name, Some(id))? {
            return Err(DivvyError::Duplicate {
                entity_type: "Group",
                identifier: new_name.to_string(),
            });
        }

        let mut group = self
            .storage
            .groups
            .get(id)?
            .ok_or_else(|| DivvyError::group_not_found(id.to_string()))?;

        group.name = new_name.to_string();
        self.storage.groups.upsert(group.clone())?;
        self.storage.groups.save()?;

        Ok(group)
    }

    /// Delete a group and its settlements
    pub fn delete(&self, id: GroupId) -> DivvyResult<()> {
        if !self.storage.groups.delete(id)? {
            return Err(DivvyError::group_not_found(id.to_string()));
        }
        self.storage.settlements.delete_group(id)?;
        self.storage.groups.save()?;
        self.storage.settlements.save()?;
        Ok(())
    }

    /// Add a participant to a group
    pub fn add_participant(
        &self,
        group_id: GroupId,
        name: &str,
        join_date: Option<NaiveDate>,
    ) -> DivvyResult<Participant> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DivvyError::Validation(
                "Participant name is required".into(),
            ));
        }

        let mut group = self
            .storage
            .groups
            .get(group_id)?
            .ok_or_else(|| DivvyError::group_not_found(group_id.to_string()))?;

        if group.is_participant(name) {
            return Err(DivvyError::Duplicate {
                entity_type: "Participant",
                identifier: name.to_string(),
            });
        }

        let participant = match join_date {
            Some(date) => Participant::with_join_date(name, date),
            None => Participant::new(name),
        };

        group.participants.push(participant.clone());
        self.storage.groups.upsert(group)?;
        self.storage.groups.save()?;

        Ok(participant)
    }

    /// Remove a participant from a group
    ///
    /// Rejected if the participant is the last one remaining, or is
    /// referenced by any expense (as payer or in a split) or settlement.
    pub fn remove_participant(&self, group_id: GroupId, name: &str) -> DivvyResult<()> {
        let mut group = self
            .storage
            .groups
            .get(group_id)?
            .ok_or_else(|| DivvyError::group_not_found(group_id.to_string()))?;

        if !group.is_participant(name) {
            return Err(DivvyError::participant_not_found(name));
        }

        if group.participants.len() <= 1 {
            return Err(DivvyError::LastParticipant);
        }

        let in_settlements = self
            .storage
            .settlements
            .get_for_group(group_id)?
            .iter()
            .any(|s| s.references(name));
        if group.references_participant(name) || in_settlements {
            return Err(DivvyError::ParticipantReferenced {
                name: name.to_string(),
            });
        }

        group.participants.retain(|p| p.name != name);
        self.storage.groups.upsert(group)?;
        self.storage.groups.save()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Settlement};
    use crate::services::expense::{ExpenseService, NewExpense, SplitInput};
    use crate::models::Category;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = crate::config::paths::DivvyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_and_find_group() {
        let (_tmp, storage) = test_storage();
        let service = GroupService::new(&storage);

        let group = service.create("Ski Trip", "USD").unwrap();
        let found = service.find("Ski Trip").unwrap().unwrap();
        assert_eq!(found.id, group.id);

        let by_id = service.find(&group.id.as_uuid().to_string()).unwrap();
        assert!(by_id.is_some());
    }

    #[test]
    fn test_find_group_by_id_prefix() {
        let (_tmp, storage) = test_storage();
        let service = GroupService::new(&storage);

        let group = service.create("Ski Trip", "USD").unwrap();

        // The truncated display form and a bare UUID prefix both resolve
        let by_display = service.find(&group.id.to_string()).unwrap().unwrap();
        assert_eq!(by_display.id, group.id);

        let prefix = &group.id.as_uuid().to_string()[..8];
        let by_prefix = service.find(prefix).unwrap().unwrap();
        assert_eq!(by_prefix.id, group.id);

        assert!(service.find("grp-ffffffff").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let (_tmp, storage) = test_storage();
        let service = GroupService::new(&storage);

        service.create("Trip", "USD").unwrap();
        assert!(matches!(
            service.create("Trip", "EUR"),
            Err(DivvyError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_add_participant_duplicate_rejected() {
        let (_tmp, storage) = test_storage();
        let service = GroupService::new(&storage);

        let group = service.create("Trip", "USD").unwrap();
        service.add_participant(group.id, "Alice", None).unwrap();
        assert!(matches!(
            service.add_participant(group.id, "Alice", None),
            Err(DivvyError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_remove_last_participant_rejected() {
        let (_tmp, storage) = test_storage();
        let service = GroupService::new(&storage);

        let group = service.create("Trip", "USD").unwrap();
        service.add_participant(group.id, "Alice", None).unwrap();

        assert!(matches!(
            service.remove_participant(group.id, "Alice"),
            Err(DivvyError::LastParticipant)
        ));
    }

    #[test]
    fn test_remove_unreferenced_participant() {
        let (_tmp, storage) = test_storage();
        let service = GroupService::new(&storage);

        let group = service.create("Trip", "USD").unwrap();
        service.add_participant(group.id, "Alice", None).unwrap();
        service.add_participant(group.id, "Bob", None).unwrap();

        service.remove_participant(group.id, "Bob").unwrap();
        let reloaded = service.require("Trip").unwrap();
        assert_eq!(reloaded.participant_names(), vec!["Alice"]);
    }

    #[test]
    fn test_remove_participant_referenced_by_expense() {
        let (_tmp, storage) = test_storage();
        let groups = GroupService::new(&storage);
        let expenses = ExpenseService::new(&storage);

        let group = groups.create("Trip", "USD").unwrap();
        groups.add_participant(group.id, "Alice", None).unwrap();
        groups.add_participant(group.id, "Bob", None).unwrap();

        expenses
            .add(
                group.id,
                NewExpense {
                    description: "Dinner".into(),
                    amount: Money::from_cents(2000),
                    category: Category::Food,
                    payer: "Alice".into(),
                    split: SplitInput::Equal,
                },
            )
            .unwrap();

        assert!(matches!(
            groups.remove_participant(group.id, "Bob"),
            Err(DivvyError::ParticipantReferenced { .. })
        ));
    }

    #[test]
    fn test_remove_participant_referenced_by_settlement() {
        let (_tmp, storage) = test_storage();
        let groups = GroupService::new(&storage);

        let group = groups.create("Trip", "USD").unwrap();
        groups.add_participant(group.id, "Alice", None).unwrap();
        groups.add_participant(group.id, "Bob", None).unwrap();
        groups.add_participant(group.id, "Carol", None).unwrap();

        let settlement = Settlement::new(group.id, "Bob", "Alice", Money::from_cents(100));
        storage.settlements.add(settlement).unwrap();

        assert!(matches!(
            groups.remove_participant(group.id, "Bob"),
            Err(DivvyError::ParticipantReferenced { .. })
        ));
        // Carol is untouched by any record and can leave
        groups.remove_participant(group.id, "Carol").unwrap();
    }

    #[test]
    fn test_delete_group_removes_settlements() {
        let (_tmp, storage) = test_storage();
        let groups = GroupService::new(&storage);

        let group = groups.create("Trip", "USD").unwrap();
        groups.add_participant(group.id, "Alice", None).unwrap();
        groups.add_participant(group.id, "Bob", None).unwrap();
        let settlement = Settlement::new(group.id, "Bob", "Alice", Money::from_cents(100));
        storage.settlements.add(settlement).unwrap();

        groups.delete(group.id).unwrap();
        assert!(groups.find("Trip").unwrap().is_none());
        assert!(storage.settlements.get_for_group(group.id).unwrap().is_empty());
    }
}
