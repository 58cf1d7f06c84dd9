//! Command handlers
//!
//! Each handler applies one [`Command`] to the address book and reports
//! the outcome through a [`View`]. Handler bodies return `anyhow::Result`;
//! failures are turned into one of a few fixed user-facing messages by
//! [`error_message`] instead of aborting the session.

use anyhow::Result;
use chrono::{Local, NaiveDate};

use super::command::Command;
use super::view::View;
use crate::domain::{is_valid_phone, AddressBook, BookError, FieldError, Record, DEFAULT_WINDOW_DAYS};

pub const MSG_NOT_EXECUTABLE: &str = "This command cannot be executed.";
pub const MSG_GIVE_NAME_AND_PHONE: &str = "Give me name and phone please.";
pub const MSG_NO_INFORMATION: &str = "There is no such information.";

/// What the session should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Session-wide settings the handlers need
#[derive(Debug, Clone)]
pub struct Settings {
    /// Look-ahead of the `birthdays` command in days
    pub window_days: u32,
    /// Fixed date for `birthdays`; the local date when unset
    pub today: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            today: None,
        }
    }
}

impl Settings {
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Maps a handler failure to the message shown to the user
pub fn error_message(err: &anyhow::Error) -> String {
    if let Some(err) = err.downcast_ref::<BookError>() {
        let message = match err {
            BookError::ContactNotFound(_) | BookError::PhoneNotFound(_) => MSG_NOT_EXECUTABLE,
            BookError::Validation(_) => MSG_GIVE_NAME_AND_PHONE,
            BookError::NoPhone(_) => MSG_NO_INFORMATION,
        };
        return message.to_string();
    }

    if err.downcast_ref::<FieldError>().is_some() {
        return MSG_GIVE_NAME_AND_PHONE.to_string();
    }

    format!("Error: {}", err)
}

/// Runs a handler body, reporting any failure through the view
fn guarded<F>(view: &mut dyn View, body: F)
where
    F: FnOnce(&mut dyn View) -> Result<()>,
{
    if let Err(err) = body(&mut *view) {
        view.show_message(&error_message(&err));
    }
}

/// Applies a command to the book
pub fn execute(
    command: Command,
    book: &mut AddressBook,
    view: &mut dyn View,
    settings: &Settings,
) -> Flow {
    match command {
        Command::Hello => view.show_message("How can I help you?"),
        Command::Add { name, phone } => guarded(view, |view| add_contact(book, view, &name, &phone)),
        Command::Change { name, phone } => {
            guarded(view, |view| change_phone(book, view, &name, &phone))
        }
        Command::Phone { name } => guarded(view, |view| show_phone(book, view, &name)),
        Command::All => {
            let contacts: Vec<&Record> = book.records().collect();
            view.show_contacts(&contacts);
        }
        Command::AddBirthday { name, date } => {
            guarded(view, |view| add_birthday(book, view, &name, &date))
        }
        Command::ShowBirthday { name } => guarded(view, |view| show_birthday(book, view, &name)),
        Command::Birthdays => guarded(view, |view| birthdays(book, view, settings)),
        Command::Help => view.show_help(),
        Command::Exit => {
            view.show_message("Good bye!");
            return Flow::Exit;
        }
    }

    Flow::Continue
}

fn add_contact(book: &mut AddressBook, view: &mut dyn View, name: &str, phone: &str) -> Result<()> {
    if !is_valid_phone(phone) {
        view.show_message("Phone number must be a 10-digit number.");
        return Ok(());
    }

    let mut record = Record::new(name).map_err(BookError::from)?;
    record.add_phone(phone).map_err(BookError::from)?;
    book.add_record(record);

    view.show_message(&format!("Added new contact: {} - {}", name, phone));
    Ok(())
}

fn change_phone(book: &mut AddressBook, view: &mut dyn View, name: &str, phone: &str) -> Result<()> {
    let Some(record) = book.find_mut(name) else {
        view.show_message(&format!("Contact {} not found.", name));
        return Ok(());
    };

    if !is_valid_phone(phone) {
        view.show_message("New phone number must be a 10-digit number.");
        return Ok(());
    }

    let old = record
        .first_phone()
        .ok_or_else(|| BookError::NoPhone(name.to_string()))?
        .as_str()
        .to_string();
    record.edit_phone(&old, phone)?;

    view.show_message(&format!("Phone number changed for {}.", name));
    Ok(())
}

fn show_phone(book: &AddressBook, view: &mut dyn View, name: &str) -> Result<()> {
    let Some(record) = book.find(name) else {
        view.show_message(&format!("Contact {} not found.", name));
        return Ok(());
    };

    let phone = record
        .first_phone()
        .ok_or_else(|| BookError::NoPhone(name.to_string()))?;

    view.show_message(&format!("Phone number for {}: {}", name, phone));
    Ok(())
}

fn add_birthday(book: &mut AddressBook, view: &mut dyn View, name: &str, date: &str) -> Result<()> {
    let Some(record) = book.find_mut(name) else {
        view.show_message(&format!("Contact {} not found.", name));
        return Ok(());
    };

    match record.add_birthday(date) {
        Ok(()) => view.show_message(&format!("Birthday added for {}.", name)),
        Err(err) => view.show_message(&err.to_string()),
    }
    Ok(())
}

fn show_birthday(book: &AddressBook, view: &mut dyn View, name: &str) -> Result<()> {
    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => {
                view.show_message(&format!("{}'s birthday: {}", name, birthday))
            }
            None => view.show_message(&format!("{} does not have a birthday specified.", name)),
        },
        None => view.show_message(&format!("Contact {} not found.", name)),
    }
    Ok(())
}

fn birthdays(book: &AddressBook, view: &mut dyn View, settings: &Settings) -> Result<()> {
    let upcoming = book.upcoming_birthdays(settings.today(), settings.window_days);

    if upcoming.is_empty() {
        view.show_message("No upcoming birthdays.");
        return Ok(());
    }

    view.show_message("Upcoming birthdays:");
    for entry in &upcoming {
        view.show_message(&format!(
            "The congratulation date for {} is {}",
            entry.name, entry.congratulation_date
        ));
    }
    Ok(())
}
