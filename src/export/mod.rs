//! Export module for the contact book
//!
//! Provides address book export in multiple formats:
//! - CSV: one row per contact (spreadsheet-compatible)
//! - JSON: machine-readable export with birthday countdowns
//! - YAML: human-readable export

pub mod csv;
pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use clap::ValueEnum;
use tracing::info;

use crate::error::{ContactsError, ContactsResult};
use crate::models::AddressBook;

pub use self::csv::export_contacts_csv;
pub use json::{export_full_json, ExportedContact, FullExport};
pub use yaml::export_full_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format
    Csv,
    /// JSON format
    Json,
    /// YAML format (human-readable)
    Yaml,
}

impl ExportFormat {
    /// Parse a format name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// Write `book` to `writer` in the requested format
pub fn export_book<W: Write>(
    book: &AddressBook,
    format: ExportFormat,
    today: NaiveDate,
    writer: &mut W,
) -> ContactsResult<()> {
    match format {
        ExportFormat::Csv => export_contacts_csv(book, writer),
        ExportFormat::Json => export_full_json(book, today, writer, true),
        ExportFormat::Yaml => export_full_yaml(book, today, writer),
    }
}

/// Export `book` to a file, overwriting it
pub fn export_to_file(
    book: &AddressBook,
    format: ExportFormat,
    today: NaiveDate,
    output: &Path,
) -> ContactsResult<()> {
    let file = File::create(output).map_err(|e| {
        ContactsError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    export_book(book, format, today, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ContactsError::Export(e.to_string()))?;

    info!(path = %output.display(), ?format, "address book exported");
    Ok(())
}
