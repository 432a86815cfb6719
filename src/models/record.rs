//! Contact record: a name, its phone numbers, and an optional birthday.

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown by `describe_birthday` when no birthday is stored.
pub const BIRTHDAY_NOT_SET: &str = "Birthday not set";

/// A single contact in the directory.
///
/// The name is fixed at construction. Phones keep insertion order and are
/// not deduplicated. At most one birthday is stored; setting it again
/// replaces the previous one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it. The same number may be added twice.
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        let phone = Phone::new(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `raw`. Absent phones are ignored.
    pub fn remove_phone(&mut self, raw: &str) {
        if let Some(index) = self.phone_index(raw) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// The old phone is looked up before `new` is validated, so a missing
    /// `old` reports `PhoneNotFound` even when `new` is malformed.
    ///
    /// # Errors
    ///
    /// - `ContactError::PhoneNotFound` if `old` is not on this record
    /// - `ContactError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self
            .phone_index(old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        self.phones[index] = Phone::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Validate `raw` and store it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> ContactResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// The stored birthday as entered, or [`BIRTHDAY_NOT_SET`].
    pub fn describe_birthday(&self) -> &str {
        self.birthday
            .as_ref()
            .map_or(BIRTHDAY_NOT_SET, Birthday::as_str)
    }

    /// Phones joined with `", "`.
    pub fn joined_phones(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    fn phone_index(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone == raw)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self.birthday.as_ref().map_or("Not set", Birthday::as_str);
        write!(
            f,
            "Contact name: {}; phones: {}; birthday: {}",
            self.name,
            self.joined_phones(),
            birthday
        )
    }
}
