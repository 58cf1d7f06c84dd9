//! # Command-Line Interface
//!
//! The interactive session and everything around it.
//!
//! ## Commands
//!
//! | Command | Arguments | Purpose |
//! |---------|-----------|---------|
//! | `hello` | | Greeting |
//! | `add` | `<name> <phone>` | Create or replace a contact |
//! | `change` | `<name> <phone>` | Replace the contact's first phone |
//! | `phone` | `<name>` | Show the first phone |
//! | `all` | | List every contact |
//! | `add-birthday` | `<name> <DD.MM.YYYY>` | Set the birthday |
//! | `show-birthday` | `<name>` | Show the birthday |
//! | `birthdays` | | Birthdays in the coming week |
//! | `help` | | Command summary |
//! | `close`, `exit` | | Save and quit |
//!
//! ## Output Formats
//!
//! `--format text` (default) prints plain lines; `--format json` prints one
//! JSON value per line and suppresses the prompt.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! assistant --verbose
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the session.

mod app;
mod output;
mod command;
mod handlers;
mod repl;
mod view;

pub use app::{run, Cli};
pub use command::{parse_input, Command, CommandError};
pub use handlers::{error_message, execute, Flow, Settings};
pub use output::{Output, OutputFormat};
pub use repl::{run as run_session, PROMPT, WELCOME};
pub use view::{help_lines, ConsoleView, MemoryView, View, COMMANDS};
