//! Main CLI application structure

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;

use super::handlers::Settings;
use super::output::{Output, OutputFormat};
use super::repl;
use super::view::ConsoleView;
use crate::domain::Birthday;
use crate::storage::{BookStore, Config};

#[derive(Parser)]
#[command(name = "assistant")]
#[command(author, version, about = "Interactive contact book with birthday reminders")]
pub struct Cli {
    /// Address book file (defaults to the platform data directory)
    #[arg(long, env = "ASSISTANT_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, env = "ASSISTANT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the configured default)
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Date used as "today" by the birthdays command (DD.MM.YYYY)
    #[arg(long, hide = true, value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    Birthday::parse(value)
        .map(|birthday| birthday.date())
        .map_err(|e| e.to_string())
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let output = Output::new(cli.format.unwrap_or(config.default_format), cli.verbose);

    output.verbose("Assistant starting");

    let store = BookStore::new(config.data_file(cli.data_file.as_deref()));
    output.verbose_ctx("load", &format!("Reading address book from: {}", store.path().display()));

    let mut book = store.load()?;
    output.verbose_ctx("load", &format!("Loaded {} contact(s)", book.len()));

    let settings = Settings {
        window_days: config.birthday_window_days,
        today: cli.today,
    };

    // JSON mode keeps stdout machine-readable, so no prompt there
    let prompt: Box<dyn Write> = if output.is_text() {
        Box::new(io::stdout())
    } else {
        Box::new(io::sink())
    };

    let mut view = ConsoleView::new(&output);
    let session = repl::run(io::stdin().lock(), prompt, &mut book, &mut view, &output, &settings);

    // Edits made before a failure are still written
    store.save(&book)?;
    session?;
    output.verbose_ctx("save", &format!("Saved {} contact(s) to {}", book.len(), store.path().display()));

    output.verbose("Session completed successfully");
    Ok(())
}
