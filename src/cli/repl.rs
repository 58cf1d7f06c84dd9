//! Interactive read-eval loop
//!
//! Reads one command per line until `close`/`exit` or end of input.
//! Each command is parsed, applied and reported before the next line is
//! read.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::command::Command;
use super::handlers::{execute, Flow, Settings};
use super::output::Output;
use super::view::View;
use crate::domain::AddressBook;

pub const PROMPT: &str = "Enter a command: ";
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Runs the session against `book` until the user leaves
///
/// The prompt is written to `prompt` so callers can silence it. Returning
/// `Ok` means the book should be persisted.
pub fn run<R, W>(
    mut input: R,
    mut prompt: W,
    book: &mut AddressBook,
    view: &mut dyn View,
    output: &Output,
    settings: &Settings,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    view.show_message(WELCOME);

    let mut buf = Vec::new();
    loop {
        write!(prompt, "{}", PROMPT).context("Failed to write prompt")?;
        prompt.flush().context("Failed to flush prompt")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read command")?;
        if read == 0 {
            output.verbose("End of input, leaving session");
            return Ok(());
        }

        // Undecodable bytes become U+FFFD and go through normal parsing
        let line = String::from_utf8_lossy(&buf);
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                output.verbose_ctx("parse", &format!("{:?}", err));
                view.show_message(&err.to_string());
                continue;
            }
        };

        output.verbose_ctx(command.word(), &format!("{:?}", command));
        if execute(command, book, view, settings) == Flow::Exit {
            return Ok(());
        }
    }
}
