//! Validated field values
//!
//! Each field is a newtype that can only be constructed through its
//! validation rule:
//! - [`Name`]: any non-empty string
//! - [`Phone`]: exactly 10 ASCII digits (e.g., `0501234567`)
//! - [`Birthday`]: a calendar date written as `DD.MM.YYYY` (e.g., `24.08.1991`)
//!
//! All three serialize as plain strings and are re-validated when read back.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FieldError;

/// Text form used for birthdays everywhere (input, output and storage)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

const PHONE_DIGITS: usize = 10;

/// Contact name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if value.is_empty() {
            return Err(FieldError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// Phone number of exactly ten digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if !is_valid_phone(&value) {
            return Err(FieldError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Checks the phone rule without allocating
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Birthday stored as a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a strict `DD.MM.YYYY` string
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let invalid = || FieldError::InvalidBirthday(value.to_string());

        // chrono accepts unpadded fields, so check the shape first
        let shape_ok = value.len() == 10
            && value.bytes().enumerate().all(|(i, b)| match i {
                2 | 5 => b == b'.',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Projects the month and day onto another year
    ///
    /// Returns `None` for February 29 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_empty() {
        assert_eq!(Name::new(""), Err(FieldError::EmptyName));
        assert_eq!(Name::new("Alice").unwrap().as_str(), "Alice");
    }

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
        assert_eq!(phone.to_string(), "0501234567");
    }

    #[test]
    fn phone_rejects_bad_values() {
        for bad in ["", "123", "05012345678", "050123456a", "+380501234", "050 123 45"] {
            assert_eq!(
                Phone::new(bad),
                Err(FieldError::InvalidPhone(bad.to_string())),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(Phone::new("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn birthday_parses_and_formats() {
        let birthday = Birthday::parse("24.08.1991").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1991, 8, 24).unwrap());
        assert_eq!(birthday.to_string(), "24.08.1991");
    }

    #[test]
    fn birthday_rejects_bad_shapes() {
        for bad in ["1991-08-24", "24.8.1991", "4.08.1991", "24.08.91", "aa.bb.cccc", "", "24/08/1991"] {
            assert!(Birthday::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn birthday_rejects_impossible_dates() {
        assert!(Birthday::parse("32.01.2000").is_err());
        assert!(Birthday::parse("31.04.2000").is_err());
        assert!(Birthday::parse("29.02.2023").is_err());
        assert!(Birthday::parse("29.02.2024").is_ok());
    }

    #[test]
    fn birthday_error_message() {
        let err = Birthday::parse("tomorrow").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn leap_day_has_no_projection_in_common_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(birthday.in_year(2023), None);
        assert_eq!(birthday.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn fields_serialize_as_strings() {
        let json = serde_json::to_string(&Birthday::parse("01.02.2003").unwrap()).unwrap();
        assert_eq!(json, "\"01.02.2003\"");

        let phone: Result<Phone, _> = serde_json::from_str("\"12345\"");
        assert!(phone.is_err());

        let name: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(name.is_err());
    }
}
