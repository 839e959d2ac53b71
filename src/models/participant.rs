//! Participant model
//!
//! Participants are identified by name within their group; there is no
//! separate ID. Older data files stored participants as bare strings, so
//! deserialization accepts both forms and upgrades legacy records once at
//! the load boundary.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A member of an expense group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    /// Display name, unique within the group
    pub name: String,

    /// The date the participant joined the group
    pub join_date: NaiveDate,
}

impl Participant {
    /// Create a new participant joining today
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            join_date: Utc::now().date_naive(),
        }
    }

    /// Create a participant with an explicit join date
    pub fn with_join_date(name: impl Into<String>, join_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            join_date,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Stored participant forms: legacy files hold bare name strings, current
/// files hold the full record. Converted to [`Participant`] on load.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredParticipant {
    Full { name: String, join_date: NaiveDate },
    Legacy(String),
}

impl From<StoredParticipant> for Participant {
    fn from(stored: StoredParticipant) -> Self {
        match stored {
            StoredParticipant::Full { name, join_date } => Self { name, join_date },
            StoredParticipant::Legacy(name) => Self::new(name),
        }
    }
}

impl<'de> Deserialize<'de> for Participant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        StoredParticipant::deserialize(deserializer).map(Participant::from)
    }
}
