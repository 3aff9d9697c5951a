//! Command handlers
//!
//! Every command produces a text reply. Errors are turned into replies in
//! one place, `render_error`, so a failing command never ends the session.

use tracing::debug;

use crate::display::{format_days_to_birthday, format_page, format_phones, format_search_results};
use crate::error::{ContactsError, ContactsResult};
use crate::export::export_to_file;
use crate::services::{AddOutcome, ContactService};

use super::command::Command;
use super::session::Session;

/// Text printed by `help`
pub const HELP: &str = "\
Commands:
  hello                          greet
  add <name> <phone> [dd.mm]     add a contact
  change <name> <phone>          add a phone to a contact
  change <name> <old> <new>      replace a phone
  remove <name> <phone>          remove a phone
  delete <name>                  delete a contact
  birthday <name> <dd.mm>        set a birthday
  phone <name>                   show phone numbers
  days to birthday <name>        days until the next birthday
  show all [page]                list contacts
  search <query>                 find by name or phone
  save [file] / load [file]      write or read the address book
  export <csv|json|yaml> <file>  export the address book
  good bye | close | exit        quit";

/// Reply to one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// The session should end after this reply
    pub exit: bool,
}

/// Parse and run one input line
pub fn respond(session: &mut Session, line: &str) -> Reply {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(err) => {
            debug!(line, "unrecognized command");
            return Reply {
                text: render_error(&err),
                exit: false,
            };
        }
    };

    let exit = command == Command::Exit;
    debug!(?command, "running command");

    let text = match handle(session, command) {
        Ok(text) => text,
        Err(err) => {
            debug!(error = %err, "command failed");
            render_error(&err)
        }
    };

    Reply { text, exit }
}

/// Run a parsed command against the session
pub fn handle(session: &mut Session, command: Command) -> ContactsResult<String> {
    match command {
        Command::Save { path } => {
            let path = session.resolve_path(path);
            session.book().save(&path)?;
            Ok("Address book saved.".to_string())
        }
        Command::Load { path } => {
            let path = session.resolve_path(path);
            session.book_mut().load(&path)?;
            Ok("Address book loaded.".to_string())
        }
        Command::Export { format, path } => {
            export_to_file(session.book(), format, session.today(), &path)?;
            Ok(format!("Address book exported to {}.", path.display()))
        }
        command => handle_contact_command(session, command),
    }
}

fn handle_contact_command(session: &mut Session, command: Command) -> ContactsResult<String> {
    let today = session.today();
    let page_size = session.settings().page_size;
    let mut service = ContactService::new(session.book_mut());

    let text = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Help => HELP.to_string(),
        Command::Exit => "Good bye!".to_string(),

        Command::Add {
            name,
            phone,
            birthday,
        } => {
            match service.add_contact(&name, &phone, birthday.as_deref())? {
                AddOutcome::Added => "Contact added".to_string(),
                AddOutcome::AlreadyExists => "Contact added successfully.".to_string(),
            }
        }

        Command::Change { name, phone } => {
            service.add_phone(&name, &phone)?;
            "Phone number changed successfully.".to_string()
        }

        Command::ChangePhone { name, old, new } => {
            if service.change_phone(&name, &old, &new)? {
                "Phone number changed successfully.".to_string()
            } else {
                "Phone number not found.".to_string()
            }
        }

        Command::Remove { name, phone } => {
            if service.remove_phone(&name, &phone)? > 0 {
                "Phone number removed.".to_string()
            } else {
                "Phone number not found.".to_string()
            }
        }

        Command::Delete { name } => {
            service.delete(&name)?;
            "Contact deleted.".to_string()
        }

        Command::Birthday { name, birthday } => {
            service.set_birthday(&name, &birthday)?;
            "Birthday updated.".to_string()
        }

        Command::Phone { name } => format_phones(&service.phones(&name)?),

        Command::DaysToBirthday { name } => {
            format_days_to_birthday(&name, service.days_to_birthday(&name, today)?)
        }

        Command::ShowAll { page } => format_page(&service.page(page, page_size)?),

        Command::Search { query } => format_search_results(&service.search(&query)),

        Command::Save { .. } | Command::Load { .. } | Command::Export { .. } => {
            return Err(ContactsError::invalid_command("file command"));
        }
    };

    Ok(text)
}

/// Convert an error into the reply shown to the user
pub fn render_error(err: &ContactsError) -> String {
    match err {
        ContactsError::NotFound { .. } => "Contact not found.".to_string(),
        ContactsError::InvalidCommand(_) => "Invalid command.".to_string(),
        ContactsError::InvalidPage { .. } => "Invalid page number.".to_string(),
        ContactsError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}
