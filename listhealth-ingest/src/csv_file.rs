//! Parse contact CSV files into typed contacts.
//!
//! Expected columns:
//! id,name,email,address,created_on,status,last_activity,last_reengagement,
//! reason,tags (tags `;`-separated)

use anyhow::{Context, Result};
use listhealth_core::Contact;
use std::path::Path;

fn cell(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").trim().to_string()
}

fn opt_cell(record: &csv::StringRecord, index: usize) -> Option<String> {
    let value = cell(record, index);
    if value.is_empty() { None } else { Some(value) }
}

/// Parse a contact CSV file, returning all valid rows.
/// Rows missing an id or status are skipped; malformed dates are kept as
/// strings and resolved to the stale sentinel by the core.
pub fn parse_contacts_csv(path: impl AsRef<Path>) -> Result<Vec<Contact>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut contacts = Vec::new();
    for result in rdr.records() {
        let record = result?;

        let id = cell(&record, 0);
        let status = cell(&record, 5);
        if id.is_empty() || status.is_empty() {
            continue;
        }

        let tags: Vec<String> = cell(&record, 9)
            .split(';')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        contacts.push(Contact {
            id,
            name: cell(&record, 1),
            email: cell(&record, 2),
            address: opt_cell(&record, 3),
            created_on: opt_cell(&record, 4),
            status,
            last_activity: opt_cell(&record, 6),
            last_reengagement: opt_cell(&record, 7),
            reason: opt_cell(&record, 8),
            tags,
        });
    }

    Ok(contacts)
}
