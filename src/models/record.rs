//! Contact record model
//!
//! A record groups one contact's name, its phone numbers and an optional
//! birthday.

use chrono::{Local, NaiveDate};
use std::fmt;

use super::birthday::Birthday;
use super::field::{Field, FieldError, Name, Phone};

/// One contact entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, FieldError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: birthday.map(Birthday::new).transpose()?,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Phone numbers as plain strings, in insertion order
    pub fn phone_values(&self) -> Vec<&str> {
        self.phones.iter().map(Phone::as_str).collect()
    }

    /// Append a phone number (duplicates allowed)
    pub fn add_phone(&mut self, phone: &str) -> Result<(), FieldError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many were removed
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// Returns `Ok(false)` when `old` is not present. The new value is
    /// validated even when nothing would be replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, FieldError> {
        Phone::validate(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                phone.set_value(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set or replace the birthday
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), FieldError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Days until the next birthday, counted from the local date
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_on(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday (0 when it is today)
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<i64> {
        let next = self.birthday.as_ref()?.next_occurrence(today)?;
        Some((next - today).num_days())
    }

    /// Case-insensitive substring match against the name or any phone
    ///
    /// `query` is expected to be lowercase already.
    pub fn matches(&self, query: &str) -> bool {
        self.name.as_str().to_lowercase().contains(query)
            || self.phones.iter().any(|p| p.as_str().contains(query))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone_values().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record() {
        let record = Record::new("john", Some("15.06")).unwrap();
        assert_eq!(record.name().as_str(), "john");
        assert!(record.phones().is_empty());
        assert_eq!(record.birthday().map(|b| b.value()), Some("15.06".to_string()));

        assert!(Record::new("john", Some("15.13")).is_err());
        assert!(Record::new("", None).is_err());
    }

    #[test]
    fn test_phones() {
        let mut record = Record::new("john", None).unwrap();
        record.add_phone("111").unwrap();
        record.add_phone("222").unwrap();
        record.add_phone("111").unwrap();
        assert_eq!(record.phone_values(), vec!["111", "222", "111"]);

        assert!(record.add_phone("12ab").is_err());
        assert_eq!(record.phones().len(), 3);

        assert_eq!(record.remove_phone("111"), 2);
        assert_eq!(record.remove_phone("999"), 0);
        assert_eq!(record.phone_values(), vec!["222"]);
    }

    #[test]
    fn test_edit_phone_replaces_first_match() {
        let mut record = Record::new("john", None).unwrap();
        record.add_phone("111").unwrap();
        record.add_phone("111").unwrap();

        assert!(record.edit_phone("111", "333").unwrap());
        assert_eq!(record.phone_values(), vec!["333", "111"]);

        assert!(!record.edit_phone("999", "444").unwrap());
        assert_eq!(record.phone_values(), vec!["333", "111"]);

        assert!(record.edit_phone("111", "bad").is_err());
        assert_eq!(record.phone_values(), vec!["333", "111"]);
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        let record = Record::new("john", None).unwrap();
        assert_eq!(record.days_to_birthday(), None);
        assert_eq!(record.days_to_birthday_on(date(2025, 1, 1)), None);
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let record = Record::new("john", Some("10.03")).unwrap();
        assert_eq!(record.days_to_birthday_on(date(2025, 3, 10)), Some(0));
        assert_eq!(record.days_to_birthday_on(date(2025, 3, 1)), Some(9));
    }

    #[test]
    fn test_days_to_birthday_yesterday() {
        let record = Record::new("john", Some("09.03")).unwrap();
        // No Feb 29 between 2025-03-10 and 2026-03-09
        assert_eq!(record.days_to_birthday_on(date(2025, 3, 10)), Some(364));
        // Feb 29 2024 lies in the span
        assert_eq!(record.days_to_birthday_on(date(2023, 3, 10)), Some(365));
    }

    #[test]
    fn test_days_to_feb_29_birthday() {
        let record = Record::new("leap", Some("29.02")).unwrap();
        assert_eq!(record.days_to_birthday_on(date(2024, 2, 28)), Some(1));
        assert_eq!(record.days_to_birthday_on(date(2025, 2, 28)), Some(0));
        assert_eq!(record.days_to_birthday_on(date(2025, 3, 1)), Some(364));
    }

    #[test]
    fn test_days_to_birthday_is_in_range() {
        let record = Record::new("john", Some("01.01")).unwrap();
        let days = record.days_to_birthday().unwrap();
        assert!((0..=365).contains(&days));
    }

    #[test]
    fn test_matches() {
        let mut record = Record::new("John", None).unwrap();
        record.add_phone("5551234").unwrap();
        assert!(record.matches("joh"));
        assert!(record.matches("123"));
        assert!(!record.matches("mary"));
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("john", None).unwrap();
        record.add_phone("111").unwrap();
        record.add_phone("222").unwrap();
        assert_eq!(record.to_string(), "john: 111, 222");
    }
}
