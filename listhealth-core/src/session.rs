//! Operator override state: disabled contacts and per-contact status
//! overrides.
//!
//! Owned by the UI/session layer. The classifier and export resolver only
//! ever see the merged "effective" contacts; nothing here is persisted and
//! the core never mutates this state on its own.

use crate::contact::Contact;
use std::collections::{HashMap, HashSet};

/// Effective status applied to contacts in the disabled set.
pub const DISABLED_STATUS: &str = "DISABLED";

/// Effective status for a re-enabled contact: back through vetting rather
/// than straight to its stored status.
pub const REENABLED_STATUS: &str = "PENDING_VETTING";

/// Snapshot of operator overrides applied before classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionOverrides {
    disabled: HashSet<String>,
    status_overrides: HashMap<String, String>,
}

impl SessionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a contact as disabled. Clears any earlier status override.
    pub fn disable(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.status_overrides.remove(&id);
        self.disabled.insert(id);
    }

    /// Re-enable a disabled contact, recording a vetting-status override.
    /// No-op for ids that were not disabled.
    pub fn enable(&mut self, id: &str) {
        if self.disabled.remove(id) {
            self.status_overrides
                .insert(id.to_string(), REENABLED_STATUS.to_string());
        }
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled.contains(id)
    }

    pub fn status_override(&self, id: &str) -> Option<&str> {
        self.status_overrides.get(id).map(String::as_str)
    }

    /// Merge a raw record with any overrides into the effective contact fed
    /// to classification. The disabled set takes precedence.
    pub fn effective(&self, contact: &Contact) -> Contact {
        let mut effective = contact.clone();
        if self.disabled.contains(&effective.id) {
            effective.status = DISABLED_STATUS.to_string();
        } else if let Some(status) = self.status_overrides.get(&effective.id) {
            effective.status = status.clone();
        }
        effective
    }

    /// Effective view of a whole contact list.
    pub fn apply(&self, contacts: &[Contact]) -> Vec<Contact> {
        contacts.iter().map(|c| self.effective(c)).collect()
    }
}
