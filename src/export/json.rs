//! JSON Export functionality
//!
//! Exports the whole address book with computed birthday countdowns.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Field, Record};

/// Full address book export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub contact_count: usize,

    pub contacts: Vec<ExportedContact>,
}

/// One contact in an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedContact {
    pub name: String,
    pub phones: Vec<String>,
    pub birthday: Option<String>,
    /// Days until the next birthday, as of the export date
    pub days_to_birthday: Option<i64>,
}

impl ExportedContact {
    pub fn from_record(record: &Record, today: NaiveDate) -> Self {
        Self {
            name: record.name().value(),
            phones: record.phones().iter().map(|p| p.value()).collect(),
            birthday: record.birthday().map(|b| b.value()),
            days_to_birthday: record.days_to_birthday_on(today),
        }
    }
}

impl FullExport {
    /// Build an export of `book` as seen on `today`
    pub fn from_book(book: &AddressBook, today: NaiveDate) -> Self {
        let contacts: Vec<_> = book
            .iter()
            .map(|r| ExportedContact::from_record(r, today))
            .collect();

        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_count: contacts.len(),
            contacts,
        }
    }
}

/// Export the address book to JSON
pub fn export_full_json<W: Write>(
    book: &AddressBook,
    today: NaiveDate,
    writer: &mut W,
    pretty: bool,
) -> ContactsResult<()> {
    let export = FullExport::from_book(book, today);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| ContactsError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ContactsError::Export(e.to_string()))?;
    Ok(())
}
