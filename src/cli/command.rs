//! Line parsing and command arity
//!
//! A line is split on whitespace; the first token (lowercased) names the
//! command and the rest are its arguments. Argument counts are checked
//! here, before any handler touches the address book.

use thiserror::Error;

/// A command whose arguments have the right shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Help,
    Exit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid number of arguments.")]
    Arity {
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid command. Type 'help' to see available commands.")]
    Unknown(String),
}

/// Splits a line into a lowercased command word and its arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.map(str::to_string).collect()))
}

/// Takes exactly `N` arguments or reports an arity error
fn exact<const N: usize>(command: &str, args: Vec<String>) -> Result<[String; N], CommandError> {
    let found = args.len();
    args.try_into().map_err(|_| CommandError::Arity {
        command: command.to_string(),
        expected: N,
        found,
    })
}

impl Command {
    /// Parses one input line; `Ok(None)` means the line was blank
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let Some((word, args)) = parse_input(line) else {
            return Ok(None);
        };
        Self::from_parts(&word, args).map(Some)
    }

    /// Builds a command from an already split line
    pub fn from_parts(word: &str, args: Vec<String>) -> Result<Self, CommandError> {
        let command = match word {
            // Greeting ignores whatever follows it
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = exact::<2>(word, args)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, phone] = exact::<2>(word, args)?;
                Command::Change { name, phone }
            }
            "phone" => {
                let [name] = exact::<1>(word, args)?;
                Command::Phone { name }
            }
            "all" => {
                exact::<0>(word, args)?;
                Command::All
            }
            "add-birthday" => {
                let [name, date] = exact::<2>(word, args)?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = exact::<1>(word, args)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => {
                exact::<0>(word, args)?;
                Command::Birthdays
            }
            "help" => {
                exact::<0>(word, args)?;
                Command::Help
            }
            "close" | "exit" => {
                exact::<0>(word, args)?;
                Command::Exit
            }
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }

    /// Returns the command word, for diagnostics
    pub fn word(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add { .. } => "add",
            Command::Change { .. } => "change",
            Command::Phone { .. } => "phone",
            Command::All => "all",
            Command::AddBirthday { .. } => "add-birthday",
            Command::ShowBirthday { .. } => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}
