//! Data model for contacts held by the assistant.

pub mod record;

pub use record::{ContactRecord, BIRTHDAY_NOT_SET};
