//! Contact service
//!
//! Provides the lookup and mutation operations the command layer uses on an
//! address book. Unknown names surface as `NotFound` errors.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Record};

/// Result of an `add` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created
    Added,
    /// A record with that name already existed and was left unchanged
    AlreadyExists,
}

/// One page of the name-ordered contact listing
#[derive(Debug)]
pub struct Page<'a> {
    pub records: Vec<&'a Record>,
    /// 1-based page number
    pub number: usize,
    pub total_pages: usize,
}

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Get a contact by exact name
    pub fn find(&self, name: &str) -> ContactsResult<&Record> {
        self.book
            .get(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))
    }

    fn find_mut(&mut self, name: &str) -> ContactsResult<&mut Record> {
        self.book
            .get_mut(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))
    }

    /// Create a contact with one phone and an optional birthday
    ///
    /// An existing contact is left untouched.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> ContactsResult<AddOutcome> {
        if self.book.contains(name) {
            debug!(name, "contact already exists");
            return Ok(AddOutcome::AlreadyExists);
        }

        let mut record = Record::new(name, birthday)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        debug!(name, "contact added");
        Ok(AddOutcome::Added)
    }

    /// Append a phone number to an existing contact
    pub fn add_phone(&mut self, name: &str, phone: &str) -> ContactsResult<()> {
        self.find_mut(name)?.add_phone(phone)?;
        Ok(())
    }

    /// Replace `old` with `new`, reporting whether `old` was present
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ContactsResult<bool> {
        Ok(self.find_mut(name)?.edit_phone(old, new)?)
    }

    /// Remove every occurrence of `phone`, returning how many were removed
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactsResult<usize> {
        Ok(self.find_mut(name)?.remove_phone(phone))
    }

    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> ContactsResult<()> {
        self.find_mut(name)?.set_birthday(birthday)?;
        Ok(())
    }

    /// Delete a contact, returning it
    pub fn delete(&mut self, name: &str) -> ContactsResult<Record> {
        self.book
            .remove(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))
    }

    /// Phone numbers of a contact
    pub fn phones(&self, name: &str) -> ContactsResult<Vec<&str>> {
        Ok(self.find(name)?.phone_values())
    }

    /// Days from `today` to a contact's next birthday, if one is set
    pub fn days_to_birthday(&self, name: &str, today: NaiveDate) -> ContactsResult<Option<i64>> {
        Ok(self.find(name)?.days_to_birthday_on(today))
    }

    /// Get page `number` (1-based) of `page_size` contacts
    ///
    /// An empty book yields an empty page with zero total pages.
    pub fn page(&self, number: usize, page_size: usize) -> ContactsResult<Page<'_>> {
        let page_size = page_size.max(1);
        let total_pages = self.book.len().div_ceil(page_size);

        if self.book.is_empty() {
            return Ok(Page {
                records: Vec::new(),
                number,
                total_pages,
            });
        }

        if number < 1 || number > total_pages {
            return Err(ContactsError::InvalidPage {
                page: number,
                total_pages,
            });
        }

        let records = self
            .book
            .iter()
            .skip((number - 1) * page_size)
            .take(page_size)
            .collect();

        Ok(Page {
            records,
            number,
            total_pages,
        })
    }

    /// Contacts whose name or phone contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.book.search(query)
    }
}
