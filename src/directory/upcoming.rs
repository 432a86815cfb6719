//! Birthday window calculation.
//!
//! A birthday's next occurrence is taken in the current year, or the next
//! year once it has passed. Occurrences on a weekend are congratulated on
//! the following Monday.

use crate::domain::DATE_FORMAT;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// A contact to congratulate and the business day to do it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn congratulation_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date())
    }
}

/// The first `target` weekday strictly after `date`.
///
/// A `date` that already falls on `target` moves a full week ahead.
pub fn next_weekday(date: NaiveDate, target: Weekday) -> NaiveDate {
    let current = date.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;

    let mut days_ahead = wanted - current;
    if days_ahead <= 0 {
        days_ahead += 7;
    }

    date + Days::new(days_ahead as u64)
}

/// Move Saturday and Sunday to the next Monday; other days are unchanged.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

/// The birthday's month and day in `year`.
///
/// 29 February falls back to 28 February in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
}

/// The birthday's occurrence on or after `today`, before any weekend shift.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        return occurrence_in_year(birthday, today.year() + 1);
    }
    Some(this_year)
}

/// The congratulation date for `birthday` if it lies within
/// `[today, today + window_days]`.
pub fn congratulation_date(
    birthday: NaiveDate,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let date = adjust_for_weekend(next_occurrence(birthday, today)?);
    let days_until = date.signed_duration_since(today).num_days();

    (0..=i64::from(window_days))
        .contains(&days_until)
        .then_some(date)
}
