//! Effective status and inactive reason derivation for export rows.
//!
//! The export layer is more granular than the six-bucket tile model: a
//! contact whose activity aged past the sunset threshold keeps the distinct
//! SUNSET label here, while the classifier folds it into Suppressed.

use chrono::NaiveDate;
use listhealth_core::activity::SUNSET_AFTER_DAYS;
use listhealth_core::status::{is_good_to_go, is_vetting_status};
use listhealth_core::Contact;

/// Canonical "timed out" status label for export display.
pub const SUNSET_STATUS: &str = "SUNSET";

/// Status shown in the export: GOOD_TO_GO (either scheme) with activity
/// older than 365 days becomes SUNSET; otherwise the raw stored status.
pub fn effective_status(contact: &Contact, reference: NaiveDate) -> String {
    if is_good_to_go(&contact.status) && contact.days_since_activity(reference) > SUNSET_AFTER_DAYS
    {
        return SUNSET_STATUS.to_string();
    }
    contact.status.clone()
}

// Customer-facing reason per status. Active/vetting statuses are absent on
// purpose so they fall through to the generic messages below.
fn table_reason(status: &str) -> Option<&'static str> {
    let reason = match status {
        "DEDUPED" => "Owned by another account",
        "BLOCKED" => "Marked as bad email",
        "UNSUBSCRIBED" => "Opted out via unsubscribe link",
        "BLOCKED_DOMAIN" => "Domain blocked during testing",
        "GLOBAL_BLOCKED_DOMAIN" => "Domain blocked system-wide",
        "SPAM_REPORT" => "Marked as spam by recipient",
        "CANCELED" => "Was active before being canceled",
        "CANCELED_DURING_TESTING" => "Was in testing before being canceled",
        "DISABLED" => "Disabled by user",
        "ROLE" => "Role-based email detected",
        "CUSTOMER" => "Suppressed (current customer email)",
        "PERM_DELETE" => "Permanently removed",
        "CANCELED_DISABLED" => "Was disabled before being canceled",
        "DISABLED_DURING_TESTING" => "Disabled during testing",
        "CANCELED_DISABLED_DURING_TESTING" => "Disabled during testing before being canceled",
        "SUNSET" => "Inactive due to no engagement",
        _ => return None,
    };
    Some(reason)
}

/// Human-readable inactive reason. Fallback chain: the contact's explicit
/// reason verbatim, then the static status table (effective status first,
/// raw status second), then a generic message for active/vetting statuses,
/// else empty.
pub fn inactive_reason(contact: &Contact, effective_status: &str) -> String {
    if let Some(reason) = contact.reason.as_deref() {
        if !reason.is_empty() {
            return reason.to_string();
        }
    }

    if let Some(mapped) = table_reason(effective_status).or_else(|| table_reason(&contact.status))
    {
        return mapped.to_string();
    }

    if is_good_to_go(effective_status) {
        return "Active — receiving emails".to_string();
    }
    if is_vetting_status(effective_status) {
        return "Pending — validating".to_string();
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 28).unwrap()
    }

    fn contact(status: &str, last_activity: Option<&str>) -> Contact {
        let mut c = Contact::new("u_1", "Test", "test@example.com", status);
        c.last_activity = last_activity.map(str::to_string);
        c
    }

    #[test]
    fn test_stale_good_to_go_becomes_sunset() {
        let c = contact("ACTIVE", Some("2024-11-25")); // > 365 days
        assert_eq!(effective_status(&c, reference()), "SUNSET");
        let c = contact("GOOD_TO_GO", None); // sentinel is ancient
        assert_eq!(effective_status(&c, reference()), "SUNSET");
    }

    #[test]
    fn test_recent_status_is_returned_raw() {
        let c = contact("ACTIVE", Some("2025-11-20"));
        assert_eq!(effective_status(&c, reference()), "ACTIVE");
        // Exactly 365 days is not yet sunset
        let c = contact("GOOD_TO_GO", Some("2024-11-28"));
        assert_eq!(effective_status(&c, reference()), "GOOD_TO_GO");
    }

    #[test]
    fn test_non_active_statuses_never_sunset() {
        let c = contact("UNSUBSCRIBED", None);
        assert_eq!(effective_status(&c, reference()), "UNSUBSCRIBED");
        let c = contact("BLOCKED", Some("2020-01-01"));
        assert_eq!(effective_status(&c, reference()), "BLOCKED");
    }

    #[test]
    fn test_explicit_reason_wins_over_table() {
        let mut c = contact("BLOCKED", None);
        c.reason = Some("Bounced three times in a row".to_string());
        assert_eq!(
            inactive_reason(&c, "BLOCKED"),
            "Bounced three times in a row"
        );
    }

    #[test]
    fn test_table_reasons() {
        let c = contact("BLOCKED", None);
        assert_eq!(inactive_reason(&c, "BLOCKED"), "Marked as bad email");
        let c = contact("UNSUBSCRIBED", None);
        assert_eq!(
            inactive_reason(&c, "UNSUBSCRIBED"),
            "Opted out via unsubscribe link"
        );
    }

    #[test]
    fn test_derived_sunset_reason_uses_effective_status() {
        // Raw status ACTIVE, effective status SUNSET: the table is looked up
        // by effective status first.
        let c = contact("ACTIVE", Some("2024-11-25"));
        let status = effective_status(&c, reference());
        assert_eq!(inactive_reason(&c, &status), "Inactive due to no engagement");
    }

    #[test]
    fn test_generic_fallbacks() {
        let c = contact("ACTIVE", Some("2025-11-20"));
        assert_eq!(inactive_reason(&c, "ACTIVE"), "Active — receiving emails");
        let c = contact("PENDING_VETTING", None);
        assert_eq!(inactive_reason(&c, "PENDING_VETTING"), "Pending — validating");
        let c = contact("MYSTERY", None);
        assert_eq!(inactive_reason(&c, "MYSTERY"), "");
    }

    #[test]
    fn test_empty_explicit_reason_falls_through() {
        let mut c = contact("BLOCKED", None);
        c.reason = Some(String::new());
        assert_eq!(inactive_reason(&c, "BLOCKED"), "Marked as bad email");
    }
}
