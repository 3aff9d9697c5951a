//! Contact display formatting
//!
//! Formats records for the command loop's text replies.

use crate::models::Record;
use crate::services::Page;

/// `name: phone, phone`
pub fn format_record_line(record: &Record) -> String {
    record.to_string()
}

/// Render one `show all` page followed by its `Page x/y` footer
pub fn format_page(page: &Page<'_>) -> String {
    if page.records.is_empty() {
        return "No contacts found.".to_string();
    }

    let mut output = String::new();
    for record in &page.records {
        output.push_str(&format_record_line(record));
        output.push('\n');
    }
    output.push_str(&format!("Page {}/{}", page.number, page.total_pages));
    output
}

/// Render search results
pub fn format_search_results(results: &[&Record]) -> String {
    if results.is_empty() {
        return "No contacts found for the search query.".to_string();
    }

    let lines: Vec<String> = results.iter().map(|r| format_record_line(r)).collect();
    format!("Search results:\n{}", lines.join("\n"))
}

/// Render a contact's phone numbers
pub fn format_phones(phones: &[&str]) -> String {
    if phones.is_empty() {
        "No phone numbers saved.".to_string()
    } else {
        phones.join(", ")
    }
}

/// Render the days-to-birthday reply
pub fn format_days_to_birthday(name: &str, days: Option<i64>) -> String {
    match days {
        Some(days) => format!("Days until {}'s birthday: {}", name, days),
        None => "No birthday date provided.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name, None).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_format_page() {
        let john = record("john", &["111", "222"]);
        let mary = record("mary", &[]);
        let page = Page {
            records: vec![&john, &mary],
            number: 1,
            total_pages: 3,
        };
        assert_eq!(format_page(&page), "john: 111, 222\nmary: \nPage 1/3");
    }

    #[test]
    fn test_format_empty_page() {
        let page = Page {
            records: Vec::new(),
            number: 1,
            total_pages: 0,
        };
        assert_eq!(format_page(&page), "No contacts found.");
    }

    #[test]
    fn test_format_search_results() {
        let john = record("john", &["111"]);
        assert_eq!(
            format_search_results(&[&john]),
            "Search results:\njohn: 111"
        );
        assert_eq!(
            format_search_results(&[]),
            "No contacts found for the search query."
        );
    }

    #[test]
    fn test_format_phones() {
        assert_eq!(format_phones(&["1", "2"]), "1, 2");
        assert_eq!(format_phones(&[]), "No phone numbers saved.");
    }

    #[test]
    fn test_format_days_to_birthday() {
        assert_eq!(
            format_days_to_birthday("john", Some(12)),
            "Days until john's birthday: 12"
        );
        assert_eq!(
            format_days_to_birthday("john", None),
            "No birthday date provided."
        );
    }
}
