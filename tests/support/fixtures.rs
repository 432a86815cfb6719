//! Sample contacts for integration tests.

use contact_assistant::{ContactName, ContactRecord};

/// A record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> ContactRecord {
    let mut record = ContactRecord::new(ContactName::new(name).expect("valid name"));
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid birthday");
    }
    record
}

/// Contacts with birthdays spread around late August.
#[allow(dead_code)]
pub fn august_contacts() -> Vec<ContactRecord> {
    vec![
        sample_record("Alice", &["1234567890"], Some("24.08.1991")),
        sample_record("Bob", &["2222222222"], None),
        sample_record("Carol", &["3333333333"], Some("21.08.1985")),
        sample_record("Dave", &["4444444444"], Some("19.08.1970")),
        sample_record("Erin", &["5555555555"], Some("30.08.2001")),
    ]
}
