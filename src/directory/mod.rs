//! In-memory contact directory.
//!
//! The directory maps a contact name to its record and remembers the order
//! in which names were first added. Listing, rendering, and the birthday
//! query all follow that order.

pub mod upcoming;

pub use upcoming::{adjust_for_weekend, next_weekday, UpcomingBirthday};

use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Window used by the `birthdays` command unless configured otherwise.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// All contacts, keyed by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name.
    ///
    /// An existing record with the same name is replaced in place and keeps
    /// its position in the listing order.
    pub fn add_record(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            debug!(name = %key, "Record inserted");
            self.order.push(key);
        } else {
            debug!(name = %key, "Record replaced");
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        debug!(name, "Record deleted");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contacts whose weekend-adjusted birthday falls within
    /// `[today, today + window_days]`, in insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = upcoming::congratulation_date(birthday.date(), today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date,
                })
            })
            .collect()
    }

    /// One display line per record, in insertion order.
    pub fn render_all(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContactDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, record) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
