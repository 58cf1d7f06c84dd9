//! Domain models for the contact book
//!
//! Contains the core business logic without any I/O concerns.

mod error;
mod fields;
mod record;
mod book;

pub use error::{BookError, FieldError};
pub use fields::{is_valid_phone, Birthday, Name, Phone, DATE_FORMAT};
pub use record::Record;
pub use book::{AddressBook, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
