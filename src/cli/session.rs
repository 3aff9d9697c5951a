//! Interactive session state
//!
//! A session owns the address book being edited, the user's settings and
//! the default file `save`/`load` fall back to.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::config::{ContactPaths, Settings};
use crate::error::ContactsResult;
use crate::models::AddressBook;

/// State shared by every command of one run
#[derive(Debug)]
pub struct Session {
    book: AddressBook,
    settings: Settings,
    default_book: PathBuf,
    today: Option<NaiveDate>,
    load_error: Option<String>,
}

impl Session {
    /// Create a session with an empty book
    pub fn new(settings: Settings, default_book: PathBuf) -> Self {
        Self {
            book: AddressBook::new(),
            settings,
            default_book,
            today: None,
            load_error: None,
        }
    }

    /// Create a session for the configured paths
    ///
    /// An explicit `book_file` replaces the default book location and is
    /// loaded whenever it exists. The default book is loaded only when
    /// `autoload` is set.
    pub fn open(
        paths: &ContactPaths,
        settings: Settings,
        book_file: Option<PathBuf>,
    ) -> ContactsResult<Self> {
        let explicit = book_file.is_some();
        let default_book = book_file.unwrap_or_else(|| paths.book_file());
        let mut session = Self::new(settings, default_book);
        session.load_default(explicit)?;
        Ok(session)
    }

    /// Like `open`, but a book that fails to load leaves the session empty
    ///
    /// The error is kept in `load_error` and autosave is skipped for the
    /// rest of the session, so the unreadable file is never replaced by the
    /// empty book.
    pub fn open_or_empty(
        paths: &ContactPaths,
        settings: Settings,
        book_file: Option<PathBuf>,
    ) -> Self {
        let explicit = book_file.is_some();
        let default_book = book_file.unwrap_or_else(|| paths.book_file());
        let mut session = Self::new(settings, default_book);

        if let Err(e) = session.load_default(explicit) {
            warn!(
                path = %session.default_book.display(),
                error = %e,
                "could not open address book, starting empty"
            );
            session.load_error = Some(e.to_string());
        }

        session
    }

    fn load_default(&mut self, explicit: bool) -> ContactsResult<()> {
        if (explicit || self.settings.autoload) && self.default_book.exists() {
            self.book.load(&self.default_book)?;
            info!(
                path = %self.default_book.display(),
                contacts = self.book.len(),
                "opened address book"
            );
        }
        Ok(())
    }

    /// Pin the date used for birthday calculations
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn default_book(&self) -> &Path {
        &self.default_book
    }

    /// The date birthdays are counted from
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// The given path, or the default book when none was given
    pub fn resolve_path(&self, path: Option<PathBuf>) -> PathBuf {
        path.unwrap_or_else(|| self.default_book.clone())
    }

    /// Why the default book could not be opened, if it failed to load
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Save the default book when `autosave` is enabled
    ///
    /// Nothing is written when the default book failed to load.
    pub fn finish(&self) -> ContactsResult<()> {
        if self.load_error.is_some() {
            warn!(path = %self.default_book.display(), "autosave skipped, address book was not loaded");
            return Ok(());
        }
        if self.settings.autosave {
            self.book.save(&self.default_book)?;
        }
        Ok(())
    }
}
