//! Presentation seam for command results
//!
//! Command handlers report through a [`View`] instead of printing, so the
//! same handlers drive the console and in-memory renderers.

use serde::Serialize;

use super::output::Output;
use crate::domain::Record;

/// Usage and description of every command, in help order
pub const COMMANDS: &[(&str, &str)] = &[
    ("hello", "Greet the assistant"),
    ("add <name> <phone>", "Add a new contact"),
    ("change <name> <new_phone>", "Change phone number of a contact"),
    ("phone <name>", "Show phone number of a contact"),
    ("all", "Show all contacts"),
    ("add-birthday <name> <birthday>", "Add birthday to a contact (format DD.MM.YYYY)"),
    ("show-birthday <name>", "Show birthday of a contact"),
    ("birthdays", "Show upcoming birthdays"),
    ("help", "Show this help message"),
    ("close/exit", "Exit the program"),
];

/// Renders the help screen as text lines
pub fn help_lines() -> Vec<String> {
    let width = COMMANDS.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);

    std::iter::once("Available commands:".to_string())
        .chain(
            COMMANDS
                .iter()
                .map(|(usage, about)| format!("  {:<width$} - {}", usage, about, width = width)),
        )
        .collect()
}

/// Sink for everything a command wants to show the user
pub trait View {
    /// Shows a single message line
    fn show_message(&mut self, message: &str);

    /// Shows a list of contacts
    fn show_contacts(&mut self, contacts: &[&Record]);

    /// Shows the command summary
    fn show_help(&mut self);
}

/// Terminal renderer backed by [`Output`]
pub struct ConsoleView<'a> {
    output: &'a Output,
}

impl<'a> ConsoleView<'a> {
    pub fn new(output: &'a Output) -> Self {
        Self { output }
    }
}

#[derive(Serialize)]
struct HelpEntry<'a> {
    command: &'a str,
    description: &'a str,
}

impl View for ConsoleView<'_> {
    fn show_message(&mut self, message: &str) {
        self.output.message(message);
    }

    fn show_contacts(&mut self, contacts: &[&Record]) {
        if self.output.is_json() {
            self.output.data(&contacts);
        } else {
            for contact in contacts {
                self.output.message(&contact.to_string());
            }
        }
    }

    fn show_help(&mut self) {
        if self.output.is_json() {
            let entries: Vec<_> = COMMANDS
                .iter()
                .map(|&(command, description)| HelpEntry {
                    command,
                    description,
                })
                .collect();
            self.output.data(&entries);
        } else {
            for line in help_lines() {
                self.output.message(&line);
            }
        }
    }
}

/// Renderer that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemoryView {
    lines: Vec<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the most recent line, if any
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Drains the recorded lines
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl View for MemoryView {
    fn show_message(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn show_contacts(&mut self, contacts: &[&Record]) {
        self.lines
            .extend(contacts.iter().map(|contact| contact.to_string()));
    }

    fn show_help(&mut self) {
        self.lines.extend(help_lines());
    }
}
