//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts as the text replies of the
//! command loop.

pub mod contact;

pub use contact::{
    format_days_to_birthday, format_page, format_phones, format_record_line,
    format_search_results,
};
