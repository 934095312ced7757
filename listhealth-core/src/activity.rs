//! Activity-age math against a caller-supplied reference date.
//!
//! The reference date is always explicit so the same contact set is
//! reproducible across calls and tests; defaulting to "now" is a caller
//! concern.

use chrono::{DateTime, NaiveDate};

/// Sentinel for missing or unparseable activity timestamps ("infinitely stale").
pub const UNKNOWN_ACTIVITY_DAYS: i64 = 9999;

/// A contact silent for at least this many days enters the unengaged window.
pub const UNENGAGED_AFTER_DAYS: i64 = 60;

/// Past this many silent days a contact is sunset regardless of stored status.
pub const SUNSET_AFTER_DAYS: i64 = 365;

/// Minimum days between re-engagement sends to the same contact.
pub const REENGAGEMENT_COOLDOWN_DAYS: i64 = 30;

/// Parse a date-like value: `YYYY-MM-DD`, an RFC 3339 timestamp, or `M/D/YYYY`.
pub fn parse_activity_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%m/%d/%Y").ok()
}

/// Whole calendar days between the date-only portion of `last_activity` and
/// the reference date. Missing or unparseable values return
/// [`UNKNOWN_ACTIVITY_DAYS`]; a future-dated activity clamps to 0 (counts as
/// "today", not as an error).
pub fn days_since_activity(last_activity: Option<&str>, reference: NaiveDate) -> i64 {
    let Some(raw) = last_activity else {
        return UNKNOWN_ACTIVITY_DAYS;
    };
    let Some(date) = parse_activity_date(raw) else {
        return UNKNOWN_ACTIVITY_DAYS;
    };
    reference.signed_duration_since(date).num_days().max(0)
}
