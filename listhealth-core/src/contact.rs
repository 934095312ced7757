//! Contact records as supplied by the contact store.

use crate::activity::{days_since_activity, REENGAGEMENT_COOLDOWN_DAYS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contact record. Date-like fields stay raw strings so malformed values
/// can degrade to the stale sentinel instead of failing at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Unique identifier for this contact
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Date the contact was added (display only)
    #[serde(default)]
    pub created_on: Option<String>,
    /// Raw status from either status vocabulary; may be unrecognized
    pub status: String,
    /// Most recent engagement or event, if any
    #[serde(default)]
    pub last_activity: Option<String>,
    /// Last re-engagement send, used only for the 30-day cooldown
    #[serde(default)]
    pub last_reengagement: Option<String>,
    /// Explicit inactive reason; wins verbatim over any derived reason
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Contact {
    /// Create a new Contact with no activity history or tags.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            address: None,
            created_on: None,
            status: status.into(),
            last_activity: None,
            last_reengagement: None,
            reason: None,
            tags: Vec::new(),
        }
    }

    /// Whole days since this contact's last activity (sentinel when unknown).
    pub fn days_since_activity(&self, reference: NaiveDate) -> i64 {
        days_since_activity(self.last_activity.as_deref(), reference)
    }

    /// Eligible for a new re-engagement send: no prior send, or the last
    /// one is at least 30 days old.
    pub fn can_send_reengagement(&self, reference: NaiveDate) -> bool {
        days_since_activity(self.last_reengagement.as_deref(), reference)
            >= REENGAGEMENT_COOLDOWN_DAYS
    }
}
