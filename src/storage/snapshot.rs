//! JSON snapshot storage for the address book
//!
//! The whole book is stored as one JSON document:
//!
//! ```json
//! {"version": 1, "contacts": [{"name": "John", "phones": ["0501234567"], "birthday": "24.08.1991"}]}
//! ```
//!
//! Reads take a shared lock, writes take an exclusive lock on a temp file
//! that is then renamed over the snapshot.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::AddressBook;

/// Snapshot layout version written by this build
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unsupported snapshot version {found} in {} (expected {})", .path.display(), SNAPSHOT_VERSION)]
    UnsupportedVersion { found: u32, path: PathBuf },
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: &'a AddressBook,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    #[serde(default)]
    contacts: AddressBook,
}

/// Store for the address book snapshot
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Creates a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the book, or an empty book when no snapshot exists yet
    pub fn load(&self) -> Result<AddressBook> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AddressBook::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to open address book: {}", self.path.display())
                })
            }
        };

        // Acquire shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on address book")?;

        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(&file))
            .with_context(|| format!("Failed to parse address book: {}", self.path.display()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                path: self.path.clone(),
            }
            .into());
        }

        // Lock is released when file is dropped
        Ok(snapshot.contacts)
    }

    /// Writes the whole book (full rewrite)
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on address book")?;

            let mut writer = BufWriter::new(&file);
            let snapshot = SnapshotRef {
                version: SNAPSHOT_VERSION,
                contacts: book,
            };
            serde_json::to_writer_pretty(&mut writer, &snapshot)
                .context("Failed to serialize address book")?;
            writeln!(writer).context("Failed to write address book")?;

            writer.flush().context("Failed to flush address book")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
