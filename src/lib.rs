//! Assistant - an interactive contact book for the terminal
//!
//! Stores names, phone numbers and birthdays in a local snapshot file and
//! answers questions such as "whose birthday is coming up this week".

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{AddressBook, Birthday, Name, Phone, Record, UpcomingBirthday};
