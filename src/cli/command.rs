//! Command line parsing for the interactive loop
//!
//! Keywords are matched case-insensitively; arguments are kept verbatim.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ContactsError, ContactsResult};
use crate::export::ExportFormat;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    /// `add <name> <phone> [birthday]`
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    /// `change <name> <phone>`: append a phone
    Change { name: String, phone: String },
    /// `change <name> <old> <new>`: replace a phone
    ChangePhone {
        name: String,
        old: String,
        new: String,
    },
    /// `remove <name> <phone>`
    Remove { name: String, phone: String },
    /// `delete <name>`
    Delete { name: String },
    /// `birthday <name> <dd.mm>`
    Birthday { name: String, birthday: String },
    /// `phone <name>`
    Phone { name: String },
    /// `days to birthday <name>`
    DaysToBirthday { name: String },
    /// `show all [page]`
    ShowAll { page: usize },
    /// `save [file]`
    Save { path: Option<PathBuf> },
    /// `load [file]`
    Load { path: Option<PathBuf> },
    /// `search <query>`
    Search { query: String },
    /// `export <format> <file>`
    Export { format: ExportFormat, path: PathBuf },
    /// `good bye`, `close` or `exit`
    Exit,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> ContactsResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let keywords: Vec<&str> = lowered.iter().map(String::as_str).collect();
        let invalid = || ContactsError::invalid_command(line.trim());

        let command = match keywords.as_slice() {
            ["hello"] => Self::Hello,
            ["help"] => Self::Help,
            ["good", "bye"] | ["close"] | ["exit"] => Self::Exit,
            ["add", ..] => match &tokens[1..] {
                [name, phone] => Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday: None,
                },
                [name, phone, birthday] => Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday: Some(birthday.to_string()),
                },
                _ => return Err(invalid()),
            },
            ["change", ..] => match &tokens[1..] {
                [name, phone] => Self::Change {
                    name: name.to_string(),
                    phone: phone.to_string(),
                },
                [name, old, new] => Self::ChangePhone {
                    name: name.to_string(),
                    old: old.to_string(),
                    new: new.to_string(),
                },
                _ => return Err(invalid()),
            },
            ["remove", ..] => match &tokens[1..] {
                [name, phone] => Self::Remove {
                    name: name.to_string(),
                    phone: phone.to_string(),
                },
                _ => return Err(invalid()),
            },
            ["delete", ..] => match &tokens[1..] {
                [name] => Self::Delete {
                    name: name.to_string(),
                },
                _ => return Err(invalid()),
            },
            ["birthday", ..] => match &tokens[1..] {
                [name, birthday] => Self::Birthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                },
                _ => return Err(invalid()),
            },
            ["phone", ..] => match &tokens[1..] {
                [name] => Self::Phone {
                    name: name.to_string(),
                },
                _ => return Err(invalid()),
            },
            ["days", "to", "birthday", ..] => match &tokens[3..] {
                [name] => Self::DaysToBirthday {
                    name: name.to_string(),
                },
                _ => return Err(invalid()),
            },
            ["show", "all", ..] => match &tokens[2..] {
                [] => Self::ShowAll { page: 1 },
                [page] => Self::ShowAll {
                    page: page.parse().map_err(|_| invalid())?,
                },
                _ => return Err(invalid()),
            },
            ["save", ..] => match &tokens[1..] {
                [] => Self::Save { path: None },
                [path] => Self::Save {
                    path: Some(PathBuf::from(*path)),
                },
                _ => return Err(invalid()),
            },
            ["load", ..] => match &tokens[1..] {
                [] => Self::Load { path: None },
                [path] => Self::Load {
                    path: Some(PathBuf::from(*path)),
                },
                _ => return Err(invalid()),
            },
            ["search", ..] if tokens.len() > 1 => Self::Search {
                query: tokens[1..].join(" "),
            },
            ["export", ..] => match &tokens[1..] {
                [format, path] => Self::Export {
                    format: ExportFormat::parse(format).ok_or_else(invalid)?,
                    path: PathBuf::from(*path),
                },
                _ => return Err(invalid()),
            },
            _ => return Err(invalid()),
        };

        Ok(command)
    }
}

impl FromStr for Command {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap()
    }

    fn is_invalid(line: &str) -> bool {
        matches!(Command::parse(line), Err(ContactsError::InvalidCommand(_)))
    }

    #[test]
    fn test_simple_keywords() {
        assert_eq!(parse("hello"), Command::Hello);
        assert_eq!(parse("  HELLO  "), Command::Hello);
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("good bye"), Command::Exit);
        assert_eq!(parse("Good   Bye"), Command::Exit);
        assert_eq!(parse("close"), Command::Exit);
        assert_eq!(parse("exit"), Command::Exit);
    }

    #[test]
    fn test_add() {
        assert_eq!(
            parse("add john 1234567890"),
            Command::Add {
                name: "john".into(),
                phone: "1234567890".into(),
                birthday: None,
            }
        );
        assert_eq!(
            parse("ADD John 123 01.02"),
            Command::Add {
                name: "John".into(),
                phone: "123".into(),
                birthday: Some("01.02".into()),
            }
        );
        assert!(is_invalid("add john"));
        assert!(is_invalid("add john 1 2 3"));
    }

    #[test]
    fn test_change() {
        assert_eq!(
            parse("change john 555"),
            Command::Change {
                name: "john".into(),
                phone: "555".into(),
            }
        );
        assert_eq!(
            parse("change john 555 666"),
            Command::ChangePhone {
                name: "john".into(),
                old: "555".into(),
                new: "666".into(),
            }
        );
        assert!(is_invalid("change john"));
    }

    #[test]
    fn test_multi_word_keywords() {
        assert_eq!(
            parse("days to birthday john"),
            Command::DaysToBirthday { name: "john".into() }
        );
        assert!(is_invalid("days to birthday"));
        assert_eq!(parse("show all"), Command::ShowAll { page: 1 });
        assert_eq!(parse("Show All 3"), Command::ShowAll { page: 3 });
        assert!(is_invalid("show all two"));
        assert!(is_invalid("show all -1"));
        assert!(is_invalid("show"));
    }

    #[test]
    fn test_files() {
        assert_eq!(parse("save"), Command::Save { path: None });
        assert_eq!(
            parse("save Book.json"),
            Command::Save {
                path: Some(PathBuf::from("Book.json"))
            }
        );
        assert_eq!(
            parse("load book.json"),
            Command::Load {
                path: Some(PathBuf::from("book.json"))
            }
        );
        assert_eq!(
            parse("export yaml out.yaml"),
            Command::Export {
                format: ExportFormat::Yaml,
                path: PathBuf::from("out.yaml"),
            }
        );
        assert!(is_invalid("export xml out.xml"));
    }

    #[test]
    fn test_search() {
        assert_eq!(parse("search Jo"), Command::Search { query: "Jo".into() });
        assert!(is_invalid("search"));
    }

    #[test]
    fn test_unknown() {
        assert!(is_invalid(""));
        assert!(is_invalid("   "));
        assert!(is_invalid("goodbye"));
        assert!(is_invalid("phone"));
        assert!(is_invalid("phone a b"));
        assert!(is_invalid("frobnicate"));
    }
}
