//! Shared helpers for integration tests.
//!
//! Sessions run against a fixed date so birthday output is deterministic.

use chrono::NaiveDate;
use contact_assistant::{run_session, Assistant, FixedClock, Outcome, DEFAULT_WINDOW_DAYS};

pub mod fixtures;

/// Build a date from day, month, year.
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// An assistant whose clock is frozen at `today`.
#[allow(dead_code)]
pub fn assistant_on(today: NaiveDate) -> Assistant {
    Assistant::new(Box::new(FixedClock(today)), DEFAULT_WINDOW_DAYS)
}

/// Send one line and return the reply, failing the test on exit.
#[allow(dead_code)]
pub fn send(assistant: &mut Assistant, line: &str) -> String {
    match assistant.handle(line) {
        Outcome::Reply(text) => text,
        Outcome::Exit(text) => panic!("Unexpected exit after {:?}: {}", line, text),
    }
}

/// Run a whole session over `script` and return everything printed.
#[allow(dead_code)]
pub fn run_script(assistant: &mut Assistant, script: &[&str]) -> String {
    let input = script.join("\n");
    let mut output = Vec::new();
    run_session(assistant, input.as_bytes(), &mut output).expect("in-memory I/O cannot fail");
    String::from_utf8(output).expect("transcript is UTF-8")
}
