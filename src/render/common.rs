//! Shared helpers for invoice rendering.
//!
//! Date display formatting with a fixed fallback placeholder, and the
//! deterministic derivation of the output filename.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::policy::DATE_PLACEHOLDER;

/// Format today's date for display (e.g., "23.08.2026").
pub fn today_display() -> String {
    Local::now().format("%d.%m.%Y").to_string()
}

/// Format an optional ISO-8601 date string as "dd.mm.yyyy".
///
/// A trailing 'Z' is tolerated, as is a bare date without a time component.
/// Absent or unparseable values render as the fixed placeholder; a bad date
/// in the payload must never fail the whole invoice.
pub fn format_invoice_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return DATE_PLACEHOLDER.to_string();
    };

    let trimmed = raw.trim().trim_end_matches('Z');
    let parsed = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));

    match parsed {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => DATE_PLACEHOLDER.to_string(),
    }
}

/// Derive the output filename for a rendered invoice.
///
/// The customer part is lowercased with dots stripped and commas/spaces
/// turned into hyphens. The derivation is deterministic so that repeated
/// renders of the same invoice land on the same file, while differing
/// customer names keep their own files.
pub fn derive_filename(invoice_number: &str, customer_name: &str) -> String {
    let customer = customer_name
        .replace('.', "")
        .replace(',', "-")
        .replace(' ', "-")
        .replace("--", "-")
        .to_lowercase();

    format!("Invoice_{}_{}.pdf", invoice_number, customer)
}
