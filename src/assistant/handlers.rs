//! Command handlers and the dispatch boundary.
//!
//! Each handler returns `CommandResult<String>`. `Assistant::handle` is the
//! only place where errors become reply text.

use super::command::{parse_input, Command};
use crate::clock::{Clock, SystemClock};
use crate::directory::{ContactDirectory, DEFAULT_WINDOW_DAYS};
use crate::domain::{ContactName, Phone};
use crate::error::{CommandError, CommandResult};
use crate::models::ContactRecord;
use tracing::{debug, info, warn};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const BIRTHDAY_NOT_SET_FOR_CONTACT: &str = "Birthday not set for this contact.";

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next line
    Reply(String),
    /// Print the reply and end the session
    Exit(String),
}

/// Owns the directory and turns commands into replies.
pub struct Assistant {
    directory: ContactDirectory,
    clock: Box<dyn Clock>,
    window_days: u32,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(Box::new(SystemClock), DEFAULT_WINDOW_DAYS)
    }
}

impl Assistant {
    /// Create an assistant with an empty directory.
    ///
    /// # Arguments
    /// * `clock` - Source of today's date for `birthdays`
    /// * `window_days` - Days ahead covered by `birthdays`
    pub fn new(clock: Box<dyn Clock>, window_days: u32) -> Self {
        Self {
            directory: ContactDirectory::new(),
            clock,
            window_days,
        }
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    /// Parse and execute one line of input.
    pub fn handle(&mut self, line: &str) -> Outcome {
        let parsed = parse_input(line);
        self.execute(&parsed.command, &parsed.args)
    }

    /// Execute a parsed command, converting any failure to its message.
    pub fn execute(&mut self, command: &Command, args: &[String]) -> Outcome {
        debug!(%command, args = args.len(), "Dispatching command");

        let result = match command {
            Command::Exit => return Outcome::Exit(FAREWELL.to_string()),
            Command::Hello => Ok(GREETING.to_string()),
            Command::Add => self.add_contact(args),
            Command::Change => self.change_contact(args),
            Command::Phone => self.phone(args),
            Command::All => Ok(self.directory.render_all()),
            Command::AddBirthday => self.add_birthday(args),
            Command::ShowBirthday => self.show_birthday(args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Unknown(word) => {
                debug!(word = %word, "Unknown command");
                Ok(INVALID_COMMAND.to_string())
            }
        };

        match result {
            Ok(reply) => Outcome::Reply(reply),
            Err(e) => {
                warn!(%command, error = ?e, "Command failed");
                Outcome::Reply(e.to_string())
            }
        }
    }

    /// `add name phone`: create the contact if needed and append the phone.
    ///
    /// The phone is validated first so a bad number never creates a contact.
    fn add_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone, ..] = args else {
            return Err(CommandError::MissingArguments);
        };
        let phone = Phone::new(phone.as_str())?;

        if let Some(record) = self.directory.find_mut(name) {
            record.push_phone(phone);
            info!(name = %name, "Contact updated");
            return Ok(CONTACT_UPDATED.to_string());
        }

        let mut record = ContactRecord::new(ContactName::new(name.as_str())?);
        record.push_phone(phone);
        self.directory.add_record(record);
        info!(name = %name, "Contact added");
        Ok(CONTACT_ADDED.to_string())
    }

    /// `change name old new`
    fn change_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, old_phone, new_phone, ..] = args else {
            return Err(CommandError::MissingArguments);
        };
        let record = self.record_mut(name)?;
        record.edit_phone(old_phone, new_phone)?;
        info!(name = %name, "Phone changed");
        Ok(CONTACT_UPDATED.to_string())
    }

    /// `phone name`
    fn phone(&self, args: &[String]) -> CommandResult<String> {
        let name = args.first().ok_or(CommandError::MissingName)?;
        let record = self
            .directory
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
        Ok(record.joined_phones())
    }

    /// `add-birthday name DD.MM.YYYY`
    fn add_birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, birthday, ..] = args else {
            return Err(CommandError::MissingArguments);
        };
        let record = self.record_mut(name)?;
        record.add_birthday(birthday)?;
        info!(name = %name, "Birthday added");
        Ok(BIRTHDAY_ADDED.to_string())
    }

    /// `show-birthday name`
    fn show_birthday(&self, args: &[String]) -> CommandResult<String> {
        let name = args.first().ok_or(CommandError::MissingName)?;
        let reply = match self.directory.find(name) {
            Some(record) => record.describe_birthday(),
            None => BIRTHDAY_NOT_SET_FOR_CONTACT,
        };
        Ok(reply.to_string())
    }

    /// `birthdays`
    fn birthdays(&self) -> String {
        let today = self.clock.today();
        let upcoming = self.directory.upcoming_birthdays(today, self.window_days);
        debug!(%today, count = upcoming.len(), "Upcoming birthdays computed");

        if upcoming.is_empty() {
            return format!("No birthdays in the next {} days.", self.window_days);
        }

        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut ContactRecord> {
        self.directory
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}
