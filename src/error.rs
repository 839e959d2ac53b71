//! Custom error types for divvy
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is recoverable: the core
//! returns them to the CLI layer for presentation and never aborts.

use thiserror::Error;

use crate::models::Money;

/// The main error type for divvy operations
#[derive(Error, Debug)]
pub enum DivvyError {
    /// Custom split amounts don't sum to the expense total
    #[error("Custom split amounts ({entered}) must equal the total expense amount ({expected})")]
    SplitMismatch { entered: Money, expected: Money },

    /// No nonzero split entries were supplied
    #[error("At least one nonzero split entry is required")]
    EmptySplit,

    /// Percentages don't sum to 100 within tolerance, or are all zero
    #[error("Percentages must add up to 100% with at least one non-zero participant (got {total}%)")]
    PercentageSum { total: f64 },

    /// A record references someone who is not a group participant
    #[error("Unknown participant: {name}")]
    UnknownParticipant { name: String },

    /// Non-positive or malformed monetary amount
    #[error("Invalid amount: '{value}'. Amount must be a positive number like 25.50")]
    InvalidAmount { value: String },

    /// Removal would leave the group with no participants
    #[error("Cannot remove the last participant from a group")]
    LastParticipant,

    /// Removal blocked because the participant is referenced by records
    #[error("Cannot remove '{name}': referenced by expenses or settlements. Edit or delete those records first.")]
    ParticipantReferenced { name: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl DivvyError {
    /// Create a "not found" error for groups
    pub fn group_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Group",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for participants
    pub fn participant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Participant",
            identifier: identifier.into(),
        }
    }

    /// Create an unknown-participant error
    pub fn unknown_participant(name: impl Into<String>) -> Self {
        Self::UnknownParticipant { name: name.into() }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DivvyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DivvyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for divvy operations
pub type DivvyResult<T> = Result<T, DivvyError>;
