//! listhealth-ingest: contact list ingestion (JSON and CSV files)

pub mod csv_file;
pub mod json_file;

pub use csv_file::parse_contacts_csv;
pub use json_file::parse_contacts_json;

use anyhow::{bail, Result};
use listhealth_core::Contact;
use std::path::Path;

/// Load a contact list, picking the parser from the file extension.
pub fn load_contacts(path: impl AsRef<Path>) -> Result<Vec<Contact>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_contacts_json(path),
        Some("csv") => parse_contacts_csv(path),
        _ => bail!("unsupported contact list format: {}", path.display()),
    }
}
