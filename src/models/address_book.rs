//! Address book model
//!
//! Records keyed by name. Adding a record under an existing name replaces
//! the old one. Iteration is ordered by name.

use std::collections::btree_map::{self, BTreeMap};
use std::path::Path;

use crate::error::ContactsResult;
use crate::storage::book_file;

use super::record::Record;

/// In-memory collection of contact records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove a record by name
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in name order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.values(),
        }
    }

    /// Records whose name or any phone contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.iter().filter(|r| r.matches(&query)).collect()
    }

    /// Write all records to `path`, overwriting the file
    pub fn save(&self, path: impl AsRef<Path>) -> ContactsResult<()> {
        book_file::write_book(path, self)
    }

    /// Replace the contents of this book with the records stored at `path`
    ///
    /// Nothing is changed when reading or validating the file fails.
    pub fn load(&mut self, path: impl AsRef<Path>) -> ContactsResult<()> {
        *self = book_file::read_book(path)?;
        Ok(())
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

/// Lazy iterator over an address book's records
pub struct Iter<'a> {
    inner: btree_map::Values<'a, String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
