//! listhealth-core: contact model and deliverability-health classification

pub mod activity;
pub mod bucket;
pub mod contact;
pub mod filter;
pub mod session;
pub mod status;

pub use activity::{
    days_since_activity, parse_activity_date, REENGAGEMENT_COOLDOWN_DAYS, SUNSET_AFTER_DAYS,
    UNENGAGED_AFTER_DAYS, UNKNOWN_ACTIVITY_DAYS,
};
pub use bucket::{classify, Bucket, BucketCounts};
pub use contact::Contact;
pub use filter::{ActivityWindow, ContactFilter, TagFilter};
pub use session::SessionOverrides;
pub use status::{
    is_good_to_go, is_suppressed_status, is_unengaged_status, is_vetting_status, normalize_status,
    IN_VETTING_STATUSES, SUPPRESSED_STATUSES, UNENGAGED_STATUSES,
};
