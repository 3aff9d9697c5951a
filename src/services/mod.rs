//! Service layer for the contact book
//!
//! The service layer provides business logic on top of the address book
//! model: lookups by name, validated edits and paging.

pub mod contact;

pub use contact::{AddOutcome, ContactService, Page};
