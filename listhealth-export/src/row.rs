//! Export row shaping and CSV encoding.
//!
//! The core guarantees the field set and ordering; emitted rows never carry
//! nulls, missing display fields become empty strings.

use crate::resolver::{effective_status, inactive_reason};
use anyhow::Result;
use chrono::NaiveDate;
use listhealth_core::Contact;
use serde::Serialize;

/// CSV header row, matching the export preview columns.
pub const CSV_HEADERS: [&str; 7] = [
    "Name",
    "Email",
    "Address",
    "Added",
    "Last Activity",
    "Status",
    "Inactive Reason",
];

/// One shaped export row. `status` is the effective status (SUNSET when
/// derived), `inactive_reason` comes from the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub name: String,
    pub email: String,
    pub address: String,
    pub created_on: String,
    pub last_activity: String,
    pub status: String,
    pub inactive_reason: String,
}

/// Shape one contact into an export row.
pub fn build_export_row(contact: &Contact, reference: NaiveDate) -> ExportRow {
    let status = effective_status(contact, reference);
    let reason = inactive_reason(contact, &status);
    ExportRow {
        name: contact.name.clone(),
        email: contact.email.clone(),
        address: contact.address.clone().unwrap_or_default(),
        // Added date falls back to the activity date when absent
        created_on: contact
            .created_on
            .clone()
            .or_else(|| contact.last_activity.clone())
            .unwrap_or_default(),
        last_activity: contact.last_activity.clone().unwrap_or_default(),
        status,
        inactive_reason: reason,
    }
}

/// Shape a selected contact set, preserving selection order.
pub fn build_export_rows(contacts: &[&Contact], reference: NaiveDate) -> Vec<ExportRow> {
    contacts
        .iter()
        .map(|contact| build_export_row(contact, reference))
        .collect()
}

/// Encode rows as CSV: fixed header, CRLF terminators, standard quoting of
/// fields containing separators, quotes, or newlines.
pub fn to_csv_string(rows: &[ExportRow]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.write_record([
            row.name.as_str(),
            row.email.as_str(),
            row.address.as_str(),
            row.created_on.as_str(),
            row.last_activity.as_str(),
            row.status.as_str(),
            row.inactive_reason.as_str(),
        ])?;
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}
