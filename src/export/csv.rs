//! CSV Export functionality
//!
//! One row per contact: `name,phones,birthday`, phones joined by `;`.

use std::io::Write;

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Field};

/// Export all contacts to CSV
pub fn export_contacts_csv<W: Write>(book: &AddressBook, writer: W) -> ContactsResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["name", "phones", "birthday"])
        .map_err(|e| ContactsError::Export(e.to_string()))?;

    for record in book {
        let birthday = record.birthday().map(|b| b.value()).unwrap_or_default();
        csv_writer
            .write_record([
                record.name().as_str(),
                record.phone_values().join(";").as_str(),
                birthday.as_str(),
            ])
            .map_err(|e| ContactsError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactsError::Export(e.to_string()))?;
    Ok(())
}
