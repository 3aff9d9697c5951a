//! contact-book - terminal address book
//!
//! This library provides the core functionality for the `contacts` command:
//! validated contact records, an address book persisted as JSON and the
//! line-oriented command loop that edits it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Fields, records and the address book
//! - `storage`: JSON file storage layer
//! - `services`: Contact lookups, edits and paging
//! - `display`: Text formatting of replies
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command parsing, handlers and the interactive loop
//!
//! # Example
//!
//! ```rust
//! use contact_book::models::{AddressBook, Record};
//!
//! let mut record = Record::new("john", Some("15.06")).unwrap();
//! record.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//! assert_eq!(book.search("JOHN").len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ContactsError, ContactsResult};
