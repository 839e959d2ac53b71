//! Settlement model
//!
//! A direct payment between two participants that reduces outstanding
//! balances. Stored per group, separately from the group's expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{GroupId, SettlementId};
use super::money::Money;

/// A recorded payment from one participant to another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    /// Unique identifier
    pub id: SettlementId,

    /// The group this settlement belongs to
    pub group_id: GroupId,

    /// Who paid
    pub from: String,

    /// Who received
    pub to: String,

    /// Amount paid, always positive
    pub amount: Money,

    /// When the settlement was recorded
    pub date: DateTime<Utc>,
}

impl Settlement {
    /// Create a new settlement dated now
    pub fn new(
        group_id: GroupId,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: SettlementId::new(),
            group_id,
            from: from.into(),
            to: to.into(),
            amount,
            date: Utc::now(),
        }
    }

    /// Check whether a participant is a party to this settlement
    pub fn references(&self, name: &str) -> bool {
        self.from == name || self.to == name
    }

    /// Validate the settlement
    pub fn validate(&self) -> Result<(), SettlementValidationError> {
        if self.from == self.to {
            return Err(SettlementValidationError::SelfSettlement);
        }
        if !self.amount.is_positive() {
            return Err(SettlementValidationError::NonPositiveAmount {
                amount: self.amount,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.date.format("%Y-%m-%d"),
            self.from,
            self.to,
            self.amount
        )
    }
}

/// Validation errors for settlements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettlementValidationError {
    SelfSettlement,
    NonPositiveAmount { amount: Money },
}

impl fmt::Display for SettlementValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfSettlement => write!(f, "Cannot settle with yourself"),
            Self::NonPositiveAmount { amount } => {
                write!(f, "Settlement amount must be greater than 0 (got {})", amount)
            }
        }
    }
}

impl std::error::Error for SettlementValidationError {}
