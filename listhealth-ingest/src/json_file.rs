//! Parse contact JSON files (an array of contact objects).

use anyhow::{Context, Result};
use listhealth_core::Contact;
use std::fs;
use std::path::Path;

/// Parse a JSON array of contacts. Optional fields may be omitted; date
/// fields are taken as-is (the core absorbs malformed values).
pub fn parse_contacts_json(path: impl AsRef<Path>) -> Result<Vec<Contact>> {
    let raw = fs::read_to_string(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.as_ref().display()))
}
