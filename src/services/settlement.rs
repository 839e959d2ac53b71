//! Settlement service
//!
//! Records direct payments between participants and lists them per group.

use crate::error::{DivvyError, DivvyResult};
use crate::models::{GroupId, Money, Settlement};
use crate::storage::Storage;

/// Service for settlement management
pub struct SettlementService<'a> {
    storage: &'a Storage,
}

impl<'a> SettlementService<'a> {
    /// Create a new settlement service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a settlement between two participants of a group
    pub fn record(
        &self,
        group_id: GroupId,
        from: &str,
        to: &str,
        amount: Money,
    ) -> DivvyResult<Settlement> {
        let group = self
            .storage
            .groups
            .get(group_id)?
            .ok_or_else(|| DivvyError::group_not_found(group_id.to_string()))?;

        if !group.is_participant(from) {
            return Err(DivvyError::unknown_participant(from));
        }
        if !group.is_participant(to) {
            return Err(DivvyError::unknown_participant(to));
        }

        let settlement = Settlement::new(group_id, from, to, amount);
        settlement
            .validate()
            .map_err(|e| DivvyError::Validation(e.to_string()))?;

        self.storage.settlements.add(settlement.clone())?;
        self.storage.settlements.save()?;

        Ok(settlement)
    }

    /// List a group's settlements in entry order
    pub fn list(&self, group_id: GroupId) -> DivvyResult<Vec<Settlement>> {
        self.storage.settlements.get_for_group(group_id)
    }
}
