//! Built-in sample contact list so every subcommand runs without an input
//! file.

use listhealth_core::Contact;

struct Seed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    status: &'static str,
    last_activity: Option<&'static str>,
    last_reengagement: Option<&'static str>,
    reason: Option<&'static str>,
    tags: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "u_101",
        name: "Ava Thompson",
        email: "ava.thompson@example.com",
        status: "UNENGAGED",
        last_activity: Some("2025-04-21"),
        last_reengagement: None,
        reason: Some("No opens or clicks in 210 days"),
        tags: &["Sphere"],
    },
    Seed {
        id: "u_102",
        name: "Marcus Lee",
        email: "marcus.lee@contoso.com",
        status: "UNENGAGED",
        last_activity: Some("2025-02-10"),
        last_reengagement: Some("2025-11-05"),
        reason: Some("Viewed once, no activity since"),
        tags: &["Past client"],
    },
    Seed {
        id: "u_103",
        name: "Priya Natarajan",
        email: "priya.n@example.net",
        status: "UNENGAGED_AT_RISK",
        last_activity: Some("2024-11-25"),
        last_reengagement: Some("2025-08-01"),
        reason: Some("Will be sunset unless reengaged"),
        tags: &["Buyer lead"],
    },
    Seed {
        id: "a_201",
        name: "Active Buyer",
        email: "buyer@client.com",
        status: "ACTIVE",
        last_activity: Some("2025-11-20"),
        last_reengagement: None,
        reason: Some("Opened last weekly campaign"),
        tags: &["Buyer lead"],
    },
    Seed {
        id: "a_202",
        name: "Warm Vetting",
        email: "warm@vetting.io",
        status: "PENDING_VETTING",
        last_activity: Some("2025-11-15"),
        last_reengagement: None,
        reason: Some("Newly imported, currently being validated"),
        tags: &["Imported list"],
    },
    Seed {
        id: "a_203",
        name: "Jordan Kim",
        email: "jordan.kim@example.com",
        status: "ACTIVE",
        last_activity: Some("2025-11-25"),
        last_reengagement: None,
        reason: Some("Clicked CTA in last email"),
        tags: &["Buyer lead"],
    },
    Seed {
        id: "a_204",
        name: "Sam Rivera",
        email: "sam.rivera@contoso.com",
        status: "PENDING_VETTING",
        last_activity: Some("2025-11-18"),
        last_reengagement: None,
        reason: Some("Recently subscribed, in validation window"),
        tags: &["Sphere"],
    },
    Seed {
        id: "d_401",
        name: "Nina Torres",
        email: "nina.torres@example.com",
        status: "ACTIVE",
        last_activity: Some("2025-11-24"),
        last_reengagement: None,
        reason: Some("Temporarily disabled by user"),
        tags: &["Past client"],
    },
    Seed {
        id: "i_301",
        name: "Dormant Lead",
        email: "dl@example.org",
        status: "SUNSET",
        last_activity: Some("2024-12-01"),
        last_reengagement: None,
        reason: Some("No engagement in 365 days; permanently sunset"),
        tags: &["Old lead"],
    },
    Seed {
        id: "i_302",
        name: "Julia Park",
        email: "julia.park@example.com",
        status: "UNSUBSCRIBED",
        last_activity: Some("2025-06-11"),
        last_reengagement: None,
        reason: Some("Opted out via unsubscribe link"),
        tags: &["Past client"],
    },
    Seed {
        id: "i_303",
        name: "Tom Alvarez",
        email: "tom@northbeach.dev",
        status: "SPAM_REPORT",
        last_activity: Some("2025-05-02"),
        last_reengagement: None,
        reason: Some("Marked as spam; cannot be recontacted"),
        tags: &["Imported list"],
    },
];

/// Demo contact list covering every bucket.
pub fn sample_contacts() -> Vec<Contact> {
    SEEDS
        .iter()
        .map(|seed| Contact {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            email: seed.email.to_string(),
            address: None,
            created_on: None,
            status: seed.status.to_string(),
            last_activity: seed.last_activity.map(str::to_string),
            last_reengagement: seed.last_reengagement.map(str::to_string),
            reason: seed.reason.map(str::to_string),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}
