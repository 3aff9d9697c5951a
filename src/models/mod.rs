//! Core data models for the contact book
//!
//! This module contains the validated fields, the contact record and the
//! address book that holds them.

pub mod address_book;
pub mod birthday;
pub mod field;
pub mod record;

pub use address_book::AddressBook;
pub use birthday::Birthday;
pub use field::{Field, FieldError, Name, Phone};
pub use record::Record;
