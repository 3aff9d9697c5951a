//! Address book file format
//!
//! The book is stored as
//! `{"contacts": [{"name": .., "phone": [{"value": ..}], "birthday": "dd.mm" | null}]}`.
//! Loading rebuilds every record through the validating constructors, so a
//! corrupted phone or birthday fails the whole load.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ContactsError;
use crate::models::{AddressBook, Field, Record};

use super::file_io::{read_json_required, write_json_atomic};

/// Serializable address book document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookFile {
    pub contacts: Vec<ContactEntry>,
}

/// One contact as written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub name: String,
    pub phone: Vec<PhoneEntry>,
    pub birthday: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    pub value: String,
}

impl From<&Record> for ContactEntry {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().value(),
            phone: record
                .phones()
                .iter()
                .map(|p| PhoneEntry { value: p.value() })
                .collect(),
            birthday: record.birthday().map(|b| b.value()),
        }
    }
}

impl TryFrom<ContactEntry> for Record {
    type Error = ContactsError;

    fn try_from(entry: ContactEntry) -> Result<Self, Self::Error> {
        let mut record = Record::new(&entry.name, entry.birthday.as_deref())?;
        for phone in &entry.phone {
            record.add_phone(&phone.value)?;
        }
        Ok(record)
    }
}

impl From<&AddressBook> for BookFile {
    fn from(book: &AddressBook) -> Self {
        Self {
            contacts: book.iter().map(ContactEntry::from).collect(),
        }
    }
}

impl TryFrom<BookFile> for AddressBook {
    type Error = ContactsError;

    fn try_from(file: BookFile) -> Result<Self, Self::Error> {
        file.contacts
            .into_iter()
            .map(Record::try_from)
            .collect::<Result<AddressBook, _>>()
    }
}

/// Write an address book to `path`
pub fn write_book(path: impl AsRef<Path>, book: &AddressBook) -> Result<(), ContactsError> {
    let path = path.as_ref();
    write_json_atomic(path, &BookFile::from(book))?;
    info!(path = %path.display(), contacts = book.len(), "address book saved");
    Ok(())
}

/// Read and validate an address book from `path`
pub fn read_book(path: impl AsRef<Path>) -> Result<AddressBook, ContactsError> {
    let path = path.as_ref();
    let file: BookFile = read_json_required(path)?;
    let book = AddressBook::try_from(file)?;
    info!(path = %path.display(), contacts = book.len(), "address book loaded");
    Ok(book)
}
