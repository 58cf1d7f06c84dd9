//! Contact record
//!
//! A record owns a fixed [`Name`], an ordered list of phones and an
//! optional birthday. Phones may repeat; every phone operation works on
//! values, not positions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{BookError, FieldError};
use super::fields::{Birthday, Name, Phone};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Result<Self, FieldError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validates and appends a phone; duplicates are kept
    pub fn add_phone(&mut self, phone: &str) -> Result<(), FieldError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Removes the first phone equal to `phone`, if any
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p == phone) {
            self.phones.remove(pos);
        }
    }

    /// Replaces every phone equal to `old` with `new`
    ///
    /// All duplicates of `old` are rewritten, not just the first one.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), BookError> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }

        let new = Phone::new(new)?;
        for phone in self.phones.iter_mut().filter(|p| *p == old) {
            *phone = new.clone();
        }
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Parses and sets the birthday, replacing any previous one
    pub fn add_birthday(&mut self, value: &str) -> Result<(), FieldError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str("Not specified"),
        }
    }
}
