//! Error taxonomy for the contact book
//!
//! [`FieldError`] covers malformed input values. [`BookError`] covers
//! operations on records and the book, and wraps field errors so callers
//! can propagate both with `?`.

use thiserror::Error;

/// A value failed its field rule
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must not be empty.")]
    EmptyName,

    #[error("Phone number must have 10 digits, got '{0}'")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

/// An operation on a record or the address book failed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] FieldError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone number to edit does not exist: {0}")]
    PhoneNotFound(String),

    #[error("Contact {0} has no phone numbers")]
    NoPhone(String),
}
