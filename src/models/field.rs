//! Validated scalar fields
//!
//! Every field checks its value before storing it. Construction and
//! reassignment go through the same validator, so a field can never hold a
//! value its validator would reject.

use std::fmt;
use std::str::FromStr;

/// A validated scalar value holder
pub trait Field: Sized {
    /// Build the field from text, running its validator
    fn parse(value: &str) -> Result<Self, FieldError>;

    /// Text form of the stored value
    fn value(&self) -> String;

    /// Check a candidate value without building a field
    fn validate(value: &str) -> Result<(), FieldError> {
        Self::parse(value).map(|_| ())
    }

    /// Replace the stored value; on failure the prior value is kept
    fn set_value(&mut self, value: &str) -> Result<(), FieldError> {
        *self = Self::parse(value)?;
        Ok(())
    }
}

/// Macro to generate text-backed field newtypes
macro_rules! define_text_field {
    ($name:ident, $validator:path) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Create a new validated value
            pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
                let value = value.into();
                $validator(&value)?;
                Ok(Self(value))
            }

            /// Borrow the stored text
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Field for $name {
            fn parse(value: &str) -> Result<Self, FieldError> {
                Self::new(value)
            }

            fn value(&self) -> String {
                self.0.clone()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = FieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

define_text_field!(Name, validate_name);
define_text_field!(Phone, validate_phone);

fn validate_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::EmptyName);
    }
    Ok(())
}

fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::PhoneNotDigits);
    }
    Ok(())
}

/// Validation errors for fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    EmptyName,
    PhoneNotDigits,
    BirthdayFormat,
    BirthdayMonth(u32),
    BirthdayDay(u32),
    BirthdayDate { day: u32, month: u32 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty."),
            Self::PhoneNotDigits => write!(f, "Phone number should only contain digits."),
            Self::BirthdayFormat => {
                write!(f, "Invalid birthday format. Please use dd.mm format.")
            }
            Self::BirthdayMonth(_) => write!(f, "Invalid month value."),
            Self::BirthdayDay(_) => write!(f, "Invalid day value."),
            Self::BirthdayDate { .. } => write!(f, "Invalid birthday date."),
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_only_phone_keeps_value() {
        for input in ["0", "1234567890", "0049301234567"] {
            let phone = Phone::new(input).unwrap();
            assert_eq!(phone.as_str(), input);
            assert_eq!(phone.value(), input);
        }
    }

    #[test]
    fn test_phone_rejects_non_digits() {
        for input in ["", "123-456", "+380501234567", "12 34", "12a", "١٢٣"] {
            assert_eq!(Phone::new(input), Err(FieldError::PhoneNotDigits), "{input}");
        }
    }

    #[test]
    fn test_failed_set_keeps_prior_value() {
        let mut phone = Phone::new("111").unwrap();
        assert!(phone.set_value("abc").is_err());
        assert_eq!(phone.as_str(), "111");

        phone.set_value("222").unwrap();
        assert_eq!(phone.as_str(), "222");
    }

    #[test]
    fn test_name_validation() {
        assert!(Name::new("john").is_ok());
        assert!(Name::new("Mary Ann").is_ok());
        assert_eq!(Name::new("   "), Err(FieldError::EmptyName));
        assert!(Name::validate("").is_err());
    }

    #[test]
    fn test_from_str() {
        let phone: Phone = "555".parse().unwrap();
        assert_eq!(phone.to_string(), "555");
        assert!("5x5".parse::<Phone>().is_err());
    }
}
