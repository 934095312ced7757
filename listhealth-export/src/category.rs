//! Export-selectable categories and selection.
//!
//! A wider set than the six tile buckets: five derived/aggregate categories
//! plus every raw terminal status individually. SUNSET and SUPPRESSED are
//! deliberately separate, overlapping categories here even though the tile
//! classifier folds derived sunset into Suppressed.

use chrono::NaiveDate;
use listhealth_core::activity::{SUNSET_AFTER_DAYS, UNENGAGED_AFTER_DAYS, UNKNOWN_ACTIVITY_DAYS};
use listhealth_core::status::{
    is_good_to_go, is_suppressed_status, is_unengaged_status, is_vetting_status,
};
use listhealth_core::Contact;

/// One selectable export category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExportCategory {
    /// GOOD_TO_GO with activity in the last 0-59 days
    Active,
    /// Any vetting-set status
    PendingVetting,
    /// Derived unengaged window (60-365 days, or unknown activity on an
    /// unengaged-flavored status)
    Unengaged,
    /// Raw SUNSET or GOOD_TO_GO aged past 365 days
    Sunset,
    /// The hard-suppression set, plus derived sunset
    Suppressed,
    /// Exact raw-status match (UNSUBSCRIBED, DISABLED, SPAM_REPORT, ...)
    Status(String),
}

impl ExportCategory {
    /// Parse a picklist value. Unknown values become exact-status matches.
    pub fn from_value(value: &str) -> Self {
        match value {
            "ACTIVE" => ExportCategory::Active,
            "PENDING_VETTING" => ExportCategory::PendingVetting,
            "UNENGAGED" => ExportCategory::Unengaged,
            "SUNSET" => ExportCategory::Sunset,
            "SUPPRESSED" => ExportCategory::Suppressed,
            other => ExportCategory::Status(other.to_string()),
        }
    }

    /// Stable picklist value.
    pub fn value(&self) -> &str {
        match self {
            ExportCategory::Active => "ACTIVE",
            ExportCategory::PendingVetting => "PENDING_VETTING",
            ExportCategory::Unengaged => "UNENGAGED",
            ExportCategory::Sunset => "SUNSET",
            ExportCategory::Suppressed => "SUPPRESSED",
            ExportCategory::Status(status) => status,
        }
    }

    /// Category membership test for one contact.
    pub fn matches(&self, contact: &Contact, reference: NaiveDate) -> bool {
        let status = contact.status.as_str();
        let days = contact.days_since_activity(reference);

        match self {
            ExportCategory::Active => {
                is_good_to_go(status) && (0..UNENGAGED_AFTER_DAYS).contains(&days)
            }
            ExportCategory::PendingVetting => is_vetting_status(status),
            ExportCategory::Unengaged => {
                let in_window = (UNENGAGED_AFTER_DAYS..=SUNSET_AFTER_DAYS).contains(&days);
                (is_good_to_go(status) && in_window)
                    || (is_unengaged_status(status)
                        && (in_window || days == UNKNOWN_ACTIVITY_DAYS))
            }
            ExportCategory::Sunset => {
                status == "SUNSET" || (is_good_to_go(status) && days > SUNSET_AFTER_DAYS)
            }
            ExportCategory::Suppressed => {
                is_suppressed_status(status)
                    || (is_good_to_go(status) && days > SUNSET_AFTER_DAYS)
            }
            ExportCategory::Status(wanted) => status == wanted,
        }
    }
}

/// Contacts matching any selected category (OR), each contact at most once.
/// No categories selected means nothing to export, never "export all".
pub fn select_for_export<'a>(
    contacts: &'a [Contact],
    categories: &[ExportCategory],
    reference: NaiveDate,
) -> Vec<&'a Contact> {
    if categories.is_empty() {
        return Vec::new();
    }
    contacts
        .iter()
        .filter(|contact| categories.iter().any(|cat| cat.matches(contact, reference)))
        .collect()
}

/// Match count per category (categories overlap, so these can sum to more
/// than the selected row count).
pub fn category_counts(
    contacts: &[Contact],
    categories: &[ExportCategory],
    reference: NaiveDate,
) -> Vec<(ExportCategory, usize)> {
    categories
        .iter()
        .map(|cat| {
            let count = contacts
                .iter()
                .filter(|contact| cat.matches(contact, reference))
                .count();
            (cat.clone(), count)
        })
        .collect()
}

/// Whether a picklist entry is a derived bucket or a raw status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Bucket,
    Raw,
}

/// One entry in the export dialog picklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOption {
    pub value: &'static str,
    pub label: &'static str,
    pub kind: CategoryKind,
}

/// Selectable statuses/buckets for the export dialog, in display order.
pub const EXPORT_OPTIONS: &[ExportOption] = &[
    ExportOption {
        value: "ACTIVE",
        label: "Active (GOOD_TO_GO / ACTIVE)",
        kind: CategoryKind::Bucket,
    },
    ExportOption {
        value: "PENDING_VETTING",
        label: "In Vetting (TESTING / VETTING / PENDING_VETTING)",
        kind: CategoryKind::Bucket,
    },
    ExportOption {
        value: "UNENGAGED",
        label: "Unengaged (derived)",
        kind: CategoryKind::Bucket,
    },
    ExportOption {
        value: "SUNSET",
        label: "Sunset (raw or derived)",
        kind: CategoryKind::Bucket,
    },
    ExportOption {
        value: "SUPPRESSED",
        label: "Suppressed (bucket)",
        kind: CategoryKind::Bucket,
    },
    ExportOption {
        value: "UNSUBSCRIBED",
        label: "Unsubscribed",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "DISABLED",
        label: "Disabled",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "SPAM_REPORT",
        label: "SPAM_REPORT",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "BLOCKED",
        label: "BLOCKED",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "DEDUPED",
        label: "DEDUPED",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "BLOCKED_DOMAIN",
        label: "BLOCKED_DOMAIN",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "GLOBAL_BLOCKED_DOMAIN",
        label: "GLOBAL_BLOCKED_DOMAIN",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "ROLE",
        label: "ROLE",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "CUSTOMER",
        label: "CUSTOMER",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "PERM_DELETE",
        label: "PERM_DELETE",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "CANCELED",
        label: "CANCELED",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "CANCELED_DURING_TESTING",
        label: "CANCELED_DURING_TESTING",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "CANCELED_DISABLED",
        label: "CANCELED_DISABLED",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "DISABLED_DURING_TESTING",
        label: "DISABLED_DURING_TESTING",
        kind: CategoryKind::Raw,
    },
    ExportOption {
        value: "CANCELED_DISABLED_DURING_TESTING",
        label: "CANCELED_DISABLED_DURING_TESTING",
        kind: CategoryKind::Raw,
    },
];
