//! List filters for the contact tables: status, name/email search, tags,
//! and last-activity window. All predicates are ANDed.

use crate::activity::parse_activity_date;
use crate::contact::Contact;
use chrono::NaiveDate;

/// Tag filter modes for the "contacts that are:" picklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    /// No tag constraint
    #[default]
    Any,
    /// Contact carries at least one of the selected tags
    Specific(Vec<String>),
    /// Contact carries no tags at all
    Untagged,
}

/// Last-activity date window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityWindow {
    #[default]
    Any,
    /// Activity within the last N days of the reference date
    WithinDays(i64),
    /// Activity within an inclusive custom range
    Between(NaiveDate, NaiveDate),
}

/// Combined list filter. Defaults to matching everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFilter {
    /// Exact raw-status match
    pub status: Option<String>,
    /// Case-insensitive substring over name and email
    pub search: Option<String>,
    pub tags: TagFilter,
    pub activity: ActivityWindow,
}

impl ContactFilter {
    pub fn matches(&self, contact: &Contact, reference: NaiveDate) -> bool {
        if let Some(status) = &self.status {
            if contact.status != *status {
                return false;
            }
        }

        match &self.tags {
            TagFilter::Any => {}
            TagFilter::Specific(wanted) => {
                if !contact.tags.iter().any(|t| wanted.contains(t)) {
                    return false;
                }
            }
            TagFilter::Untagged => {
                if !contact.tags.is_empty() {
                    return false;
                }
            }
        }

        if !self.activity_matches(contact, reference) {
            return false;
        }

        if let Some(query) = &self.search {
            let query = query.trim().to_lowercase();
            if !query.is_empty()
                && !contact.name.to_lowercase().contains(&query)
                && !contact.email.to_lowercase().contains(&query)
            {
                return false;
            }
        }

        true
    }

    // Missing activity passes every window; an unparseable value fails the
    // bounded ones.
    fn activity_matches(&self, contact: &Contact, reference: NaiveDate) -> bool {
        let window = match self.activity {
            ActivityWindow::Any => return true,
            window => window,
        };
        let Some(raw) = contact.last_activity.as_deref() else {
            return true;
        };
        let Some(date) = parse_activity_date(raw) else {
            return false;
        };
        match window {
            ActivityWindow::Any => true,
            ActivityWindow::WithinDays(n) => {
                let days = reference.signed_duration_since(date).num_days();
                (0..=n).contains(&days)
            }
            ActivityWindow::Between(start, end) => date >= start && date <= end,
        }
    }

    /// Filter a contact list, preserving order.
    pub fn apply<'a>(&self, contacts: &'a [Contact], reference: NaiveDate) -> Vec<&'a Contact> {
        contacts
            .iter()
            .filter(|c| self.matches(c, reference))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 28).unwrap()
    }

    fn contact(name: &str, email: &str, status: &str, tags: &[&str]) -> Contact {
        let mut c = Contact::new("u_1", name, email, status);
        c.tags = tags.iter().map(|t| t.to_string()).collect();
        c.last_activity = Some("2025-11-20".to_string());
        c
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = ContactFilter::default();
        assert!(filter.matches(&contact("Ava", "ava@example.com", "ACTIVE", &[]), reference()));
    }

    #[test]
    fn test_status_filter_is_exact_raw_match() {
        let filter = ContactFilter {
            status: Some("UNENGAGED".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&contact("Ava", "a@x.com", "UNENGAGED", &[]), reference()));
        // UNENGAGED_AT_RISK is a different raw status
        assert!(!filter.matches(&contact("Ava", "a@x.com", "UNENGAGED_AT_RISK", &[]), reference()));
    }

    #[test]
    fn test_search_covers_name_and_email() {
        let filter = ContactFilter {
            search: Some("contoso".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&contact("Marcus Lee", "marcus.lee@contoso.com", "ACTIVE", &[]), reference()));
        assert!(!filter.matches(&contact("Ava", "ava@example.com", "ACTIVE", &[]), reference()));

        let by_name = ContactFilter {
            search: Some("marcus".to_string()),
            ..Default::default()
        };
        assert!(by_name.matches(&contact("Marcus Lee", "m@x.com", "ACTIVE", &[]), reference()));
    }

    #[test]
    fn test_tag_modes() {
        let tagged = contact("Ava", "a@x.com", "ACTIVE", &["Sphere", "Past client"]);
        let untagged = contact("Bo", "b@x.com", "ACTIVE", &[]);

        let specific = ContactFilter {
            tags: TagFilter::Specific(vec!["Sphere".to_string()]),
            ..Default::default()
        };
        assert!(specific.matches(&tagged, reference()));
        assert!(!specific.matches(&untagged, reference()));

        let none = ContactFilter {
            tags: TagFilter::Untagged,
            ..Default::default()
        };
        assert!(!none.matches(&tagged, reference()));
        assert!(none.matches(&untagged, reference()));
    }

    #[test]
    fn test_activity_window_within_days() {
        let filter = ContactFilter {
            activity: ActivityWindow::WithinDays(7),
            ..Default::default()
        };
        let mut c = contact("Ava", "a@x.com", "ACTIVE", &[]);
        c.last_activity = Some("2025-11-22".to_string()); // 6 days
        assert!(filter.matches(&c, reference()));
        c.last_activity = Some("2025-11-10".to_string()); // 18 days
        assert!(!filter.matches(&c, reference()));
        // Future-dated activity is outside a backward-looking window
        c.last_activity = Some("2025-12-05".to_string());
        assert!(!filter.matches(&c, reference()));
    }

    #[test]
    fn test_activity_window_custom_range_inclusive() {
        let filter = ContactFilter {
            activity: ActivityWindow::Between(
                NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
            ),
            ..Default::default()
        };
        let mut c = contact("Ava", "a@x.com", "ACTIVE", &[]);
        assert!(filter.matches(&c, reference())); // 2025-11-20, on the edge
        c.last_activity = Some("2025-11-21".to_string());
        assert!(!filter.matches(&c, reference()));
    }

    #[test]
    fn test_missing_activity_passes_unparseable_fails() {
        let filter = ContactFilter {
            activity: ActivityWindow::WithinDays(7),
            ..Default::default()
        };
        let mut c = contact("Ava", "a@x.com", "ACTIVE", &[]);
        c.last_activity = None;
        assert!(filter.matches(&c, reference()));
        c.last_activity = Some("garbage".to_string());
        assert!(!filter.matches(&c, reference()));
    }

    #[test]
    fn test_apply_preserves_order() {
        let contacts = vec![
            contact("Ava", "ava@example.com", "ACTIVE", &[]),
            contact("Marcus", "marcus@contoso.com", "UNENGAGED", &[]),
            contact("Priya", "priya@example.net", "ACTIVE", &[]),
        ];
        let filter = ContactFilter {
            status: Some("ACTIVE".to_string()),
            ..Default::default()
        };
        let hits = filter.apply(&contacts, reference());
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Ava");
        assert_eq!(hits[1].name, "Priya");
    }
}
