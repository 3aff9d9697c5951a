//! Storage layer for the contact book
//!
//! Provides JSON file storage with atomic writes and the on-disk address
//! book document.

pub mod book_file;
pub mod file_io;

pub use book_file::{read_book, write_book, BookFile, ContactEntry, PhoneEntry};
pub use file_io::{read_json_required, write_json_atomic};
