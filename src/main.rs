//! Assistant - interactive contact book

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = assistant_bot::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
