//! # Storage Layer
//!
//! Persistence and configuration for the contact book.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Address book | JSON snapshot | `<data dir>/addressbook.json` |
//! | Config | TOML | `<config dir>/config.toml` |
//!
//! The snapshot is read once at startup and written once at exit.
//! Writes are atomic (temp file + rename) and use `fs2` file locks.

mod config;
mod snapshot;

pub use config::{Config, ConfigError, DEFAULT_DATA_FILE};
pub use snapshot::{BookStore, StoreError, SNAPSHOT_VERSION};
