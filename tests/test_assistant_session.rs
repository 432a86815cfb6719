//! End-to-end command scenarios through the assistant and its session loop.

mod support;

use contact_assistant::{Assistant, FixedClock};
use support::{assistant_on, date, run_script, send};

#[test]
fn test_add_then_update_scenario() {
    let mut bot = assistant_on(date(20, 8, 2024));

    assert_eq!(send(&mut bot, "add Alice 1234567890"), "Contact added.");
    assert_eq!(send(&mut bot, "add Alice 0987654321"), "Contact updated.");

    let alice = bot.directory().find("Alice").unwrap();
    assert_eq!(alice.phones().len(), 2);
    assert_eq!(send(&mut bot, "phone Alice"), "1234567890, 0987654321");
}

#[test]
fn test_birthday_on_saturday_moves_to_monday() {
    // 20.08.2024 is a Tuesday, 24.08.2024 a Saturday
    let mut bot = assistant_on(date(20, 8, 2024));
    send(&mut bot, "add Alice 1234567890");
    assert_eq!(send(&mut bot, "add-birthday Alice 24.08.1991"), "Birthday added.");

    assert_eq!(send(&mut bot, "birthdays"), "Alice: 26.08.2024");
}

#[test]
fn test_weekday_birthday_is_unchanged() {
    let mut bot = assistant_on(date(20, 8, 2024));
    send(&mut bot, "add Alice 1234567890");
    send(&mut bot, "add Bob 0987654321");
    send(&mut bot, "add-birthday Bob 22.08.1980");
    send(&mut bot, "add-birthday Alice 23.08.1991");

    assert_eq!(
        send(&mut bot, "birthdays"),
        "Alice: 23.08.2024\nBob: 22.08.2024"
    );
}

#[test]
fn test_missing_contacts() {
    let mut bot = assistant_on(date(20, 8, 2024));

    assert_eq!(
        send(&mut bot, "change Bob 1111111111 2222222222"),
        "Contact doesn't exist."
    );
    assert_eq!(send(&mut bot, "phone Ghost"), "Contact doesn't exist.");
    assert_eq!(
        send(&mut bot, "birthdays"),
        "No birthdays in the next 7 days."
    );
}

#[test]
fn test_error_wrapping_messages() {
    let mut bot = assistant_on(date(20, 8, 2024));

    assert_eq!(send(&mut bot, "add"), "Give me name and phone please.");
    assert_eq!(send(&mut bot, "change Alice"), "Give me name and phone please.");
    assert_eq!(send(&mut bot, "phone"), "Enter user name.");
    assert_eq!(send(&mut bot, "show-birthday"), "Enter user name.");
    assert_eq!(send(&mut bot, "add Alice 555-1234"), "phone must be 10 digits");
    assert_eq!(send(&mut bot, "jump"), "Invalid command.");
}

#[test]
fn test_full_session_transcript() {
    let mut bot = assistant_on(date(20, 8, 2024));
    let transcript = run_script(
        &mut bot,
        &[
            "hello",
            "ADD Alice 1234567890",
            "add-birthday Alice 24.08.1991",
            "all",
            "birthdays",
            "close",
            "hello",
        ],
    );

    assert_eq!(
        transcript,
        "Welcome to the assistant bot!\n\
         Enter a command: How can I help you?\n\
         Enter a command: Contact added.\n\
         Enter a command: Birthday added.\n\
         Enter a command: Contact name: Alice; phones: 1234567890; birthday: 24.08.1991\n\
         Enter a command: Alice: 26.08.2024\n\
         Enter a command: Good bye!\n"
    );
}

#[test]
fn test_window_from_configuration() {
    let mut bot = Assistant::new(Box::new(FixedClock(date(20, 8, 2024))), 14);
    send(&mut bot, "add Erin 5555555555");
    send(&mut bot, "add-birthday Erin 30.08.2001");

    assert_eq!(send(&mut bot, "birthdays"), "Erin: 30.08.2024");
}
