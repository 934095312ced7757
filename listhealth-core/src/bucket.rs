//! Six-bucket health classification: tile counts and table routing.
//!
//! Ordered decision list; the first matching rule wins. Unsubscribe and
//! hard-suppression statuses are absolute and short-circuit any
//! activity-based reasoning.

use crate::activity::{SUNSET_AFTER_DAYS, UNENGAGED_AFTER_DAYS};
use crate::contact::Contact;
use crate::status::{
    is_suppressed_status, is_unengaged_status, is_vetting_status, normalize_status,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The six mutually exclusive health buckets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bucket {
    Active,
    InVetting,
    Unengaged,
    Suppressed,
    Unsubscribed,
    Disabled,
}

impl Bucket {
    /// All buckets in tile display order.
    pub const ALL: [Bucket; 6] = [
        Bucket::Active,
        Bucket::Unengaged,
        Bucket::InVetting,
        Bucket::Suppressed,
        Bucket::Unsubscribed,
        Bucket::Disabled,
    ];

    /// Stable key (matches the wire vocabulary).
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Active => "ACTIVE",
            Bucket::InVetting => "IN_VETTING",
            Bucket::Unengaged => "UNENGAGED",
            Bucket::Suppressed => "SUPPRESSED",
            Bucket::Unsubscribed => "UNSUBSCRIBED",
            Bucket::Disabled => "DISABLED",
        }
    }

    /// Tile label
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Active => "Active",
            Bucket::InVetting => "In Vetting",
            Bucket::Unengaged => "Unengaged",
            Bucket::Suppressed => "Suppressed",
            Bucket::Unsubscribed => "Unsubscribed",
            Bucket::Disabled => "Disabled",
        }
    }
}

/// Assign a contact to exactly one bucket. Total: never fails, always one
/// of the six, even for statuses outside the known vocabulary.
pub fn classify(contact: &Contact, reference: NaiveDate) -> Bucket {
    let status = contact.status.as_str();
    let normalized = normalize_status(status);

    if normalized == "UNSUBSCRIBED" {
        return Bucket::Unsubscribed;
    }

    if is_suppressed_status(status) {
        return Bucket::Suppressed;
    }

    if status == "DISABLED" {
        return Bucket::Disabled;
    }

    if is_vetting_status(status) {
        return Bucket::InVetting;
    }

    // Activity-based re-derivation: time since last engagement is the
    // authoritative staleness signal, not the stored status alone. Applies
    // to GOOD_TO_GO (either scheme) and the unengaged dashboard statuses.
    if normalized == "GOOD_TO_GO" || is_unengaged_status(status) {
        let days = contact.days_since_activity(reference);
        if days > SUNSET_AFTER_DAYS {
            return Bucket::Suppressed; // derived sunset
        }
        if days >= UNENGAGED_AFTER_DAYS {
            return Bucket::Unengaged;
        }
        return Bucket::Active; // 0-59 days, including clamped future dates
    }

    // Unrecognized status: conservative default, never uncategorized
    Bucket::Suppressed
}

/// Per-bucket frequency tally for the tile row.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct BucketCounts {
    pub active: usize,
    pub in_vetting: usize,
    pub unengaged: usize,
    pub suppressed: usize,
    pub unsubscribed: usize,
    pub disabled: usize,
}

impl BucketCounts {
    /// Classify every contact and tally buckets.
    pub fn tally(contacts: &[Contact], reference: NaiveDate) -> Self {
        let mut counts = Self::default();
        for contact in contacts {
            match classify(contact, reference) {
                Bucket::Active => counts.active += 1,
                Bucket::InVetting => counts.in_vetting += 1,
                Bucket::Unengaged => counts.unengaged += 1,
                Bucket::Suppressed => counts.suppressed += 1,
                Bucket::Unsubscribed => counts.unsubscribed += 1,
                Bucket::Disabled => counts.disabled += 1,
            }
        }
        counts
    }

    pub fn get(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Active => self.active,
            Bucket::InVetting => self.in_vetting,
            Bucket::Unengaged => self.unengaged,
            Bucket::Suppressed => self.suppressed,
            Bucket::Unsubscribed => self.unsubscribed,
            Bucket::Disabled => self.disabled,
        }
    }

    pub fn total(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.get(*b)).sum()
    }
}
