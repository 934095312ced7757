//! Status vocabularies and normalization.
//!
//! The contact store carries two overlapping naming schemes for the same
//! concepts: the dashboard vocabulary (ACTIVE, PENDING_VETTING, UNENGAGED,
//! UNENGAGED_AT_RISK) and the customer-facing one (GOOD_TO_GO, VETTING).
//! Downstream logic branches on the customer-facing form; these tables are
//! the single source of truth for the translation and the closed sets.

/// Statuses that are never eligible to receive email.
pub const SUPPRESSED_STATUSES: &[&str] = &[
    "SPAM_REPORT",
    "DEDUPED",
    "BLOCKED",
    "BLOCKED_DOMAIN",
    "GLOBAL_BLOCKED_DOMAIN",
    "ROLE",
    "CUSTOMER",
    "PERM_DELETE",
    "CANCELED",
    "CANCELED_DURING_TESTING",
    "CANCELED_DISABLED",
    "DISABLED_DURING_TESTING",
    "CANCELED_DISABLED_DURING_TESTING",
    "SUNSET",
];

/// Transitional statuses for contacts still being validated.
pub const IN_VETTING_STATUSES: &[&str] = &["TESTING", "VETTING", "PENDING_VETTING"];

/// Dashboard statuses whose bucket is re-derived from activity age.
pub const UNENGAGED_STATUSES: &[&str] = &["UNENGAGED", "UNENGAGED_AT_RISK"];

/// Map the dashboard vocabulary onto the customer-facing one
/// (ACTIVE -> GOOD_TO_GO, PENDING_VETTING -> VETTING). Every other status
/// passes through unchanged, including unrecognized values.
pub fn normalize_status(status: &str) -> &str {
    match status {
        "ACTIVE" => "GOOD_TO_GO",
        "PENDING_VETTING" => "VETTING",
        other => other,
    }
}

/// True if the raw status is in the hard-suppression set.
pub fn is_suppressed_status(status: &str) -> bool {
    SUPPRESSED_STATUSES.contains(&status)
}

/// True if the raw status is in the vetting set.
pub fn is_vetting_status(status: &str) -> bool {
    IN_VETTING_STATUSES.contains(&status)
}

/// True if the raw status is one of the unengaged dashboard statuses.
pub fn is_unengaged_status(status: &str) -> bool {
    UNENGAGED_STATUSES.contains(&status)
}

/// True if the status normalizes to GOOD_TO_GO (raw ACTIVE or GOOD_TO_GO).
pub fn is_good_to_go(status: &str) -> bool {
    normalize_status(status) == "GOOD_TO_GO"
}
