//! YAML Export functionality
//!
//! Exports the address book to YAML for human reading.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{ContactsError, ContactsResult};
use crate::export::json::FullExport;
use crate::models::AddressBook;

/// Export the address book to YAML format
pub fn export_full_yaml<W: Write>(
    book: &AddressBook,
    today: NaiveDate,
    writer: &mut W,
) -> ContactsResult<()> {
    let export = FullExport::from_book(book, today);

    writeln!(writer, "# Contact book export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContactsError::Export(e.to_string()))?;

    Ok(())
}

fn export_error(e: std::io::Error) -> ContactsError {
    ContactsError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_yaml_export_round_trip() {
        let mut book = AddressBook::new();
        let mut mary = Record::new("mary", None).unwrap();
        mary.add_phone("5551234").unwrap();
        book.add_record(mary);

        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut output = Vec::new();
        export_full_yaml(&book, today, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Contact book export"));

        let imported: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(imported.contact_count, 1);
        assert_eq!(imported.contacts[0].name, "mary");
        assert_eq!(imported.contacts[0].phones, vec!["5551234".to_string()]);
        assert_eq!(imported.contacts[0].birthday, None);
    }
}
