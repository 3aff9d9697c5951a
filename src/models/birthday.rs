//! Birthday field
//!
//! A birthday is a day and month without a year, entered as `dd.mm`.
//! Validation uses the leap year 2000 as reference, so `29.02` is accepted.
//! In years without Feb 29 such a birthday falls on Feb 28.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::field::{Field, FieldError};

/// Leap year used to check that a day/month pair is a calendar date
const REFERENCE_YEAR: i32 = 2000;

/// A validated day/month birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday {
    day: u32,
    month: u32,
}

impl Birthday {
    /// Parse a `day.month` string
    pub fn new(value: &str) -> Result<Self, FieldError> {
        let mut parts = value.trim().split('.');
        let (day, month) = match (parts.next(), parts.next(), parts.next()) {
            (Some(day), Some(month), None) => (parse_number(day)?, parse_number(month)?),
            _ => return Err(FieldError::BirthdayFormat),
        };
        Self::from_day_month(day, month)
    }

    /// Build a birthday from numeric day and month
    pub fn from_day_month(day: u32, month: u32) -> Result<Self, FieldError> {
        if !(1..=12).contains(&month) {
            return Err(FieldError::BirthdayMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(FieldError::BirthdayDay(day));
        }
        if NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).is_none() {
            return Err(FieldError::BirthdayDate { day, month });
        }
        Ok(Self { day, month })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The date this birthday falls on in `year`
    ///
    /// Feb 29 maps to Feb 28 in non-leap years. Returns `None` only for years
    /// outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day).or_else(|| {
            if self.month == 2 && self.day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// The first occurrence on or after `today`
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

fn parse_number(part: &str) -> Result<u32, FieldError> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::BirthdayFormat);
    }
    part.parse().map_err(|_| FieldError::BirthdayFormat)
}

impl Field for Birthday {
    fn parse(value: &str) -> Result<Self, FieldError> {
        Self::new(value)
    }

    fn value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}", self.day, self.month)
    }
}

impl FromStr for Birthday {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_every_leap_year_date_is_accepted() {
        let mut day = date(2000, 1, 1);
        while day.year() == 2000 {
            let text = format!("{}.{}", day.day(), day.month());
            let birthday = Birthday::new(&text).unwrap();
            assert_eq!((birthday.day(), birthday.month()), (day.day(), day.month()));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_value_is_zero_padded() {
        let birthday = Birthday::new("5.3").unwrap();
        assert_eq!(birthday.value(), "05.03");
        assert_eq!(Birthday::new("05.03").unwrap(), birthday);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Birthday::new("10.13"), Err(FieldError::BirthdayMonth(13)));
        assert_eq!(Birthday::new("10.0"), Err(FieldError::BirthdayMonth(0)));
        assert_eq!(Birthday::new("0.5"), Err(FieldError::BirthdayDay(0)));
        assert_eq!(Birthday::new("32.1"), Err(FieldError::BirthdayDay(32)));
        assert_eq!(
            Birthday::new("31.04"),
            Err(FieldError::BirthdayDate { day: 31, month: 4 })
        );
        assert!(Birthday::new("30.02").is_err());
    }

    #[test]
    fn test_bad_format() {
        for input in ["", "12", "12.", ".12", "1.2.3", "aa.bb", "12/05", "-1.5", "+1.5"] {
            assert_eq!(Birthday::new(input), Err(FieldError::BirthdayFormat), "{input}");
        }
    }

    #[test]
    fn test_feb_29_clamps_in_common_years() {
        let birthday = Birthday::new("29.02").unwrap();
        assert_eq!(birthday.occurrence_in(2024), Some(date(2024, 2, 29)));
        assert_eq!(birthday.occurrence_in(2025), Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_next_occurrence() {
        let birthday = Birthday::new("10.03").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2025, 3, 10)),
            Some(date(2025, 3, 10))
        );
        assert_eq!(
            birthday.next_occurrence(date(2025, 3, 11)),
            Some(date(2026, 3, 10))
        );
        assert_eq!(
            birthday.next_occurrence(date(2025, 1, 1)),
            Some(date(2025, 3, 10))
        );
    }
}
