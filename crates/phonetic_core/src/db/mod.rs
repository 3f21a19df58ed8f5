//! SQLite address-book storage.
//!
//! # Responsibility
//! - Open and configure connections to the address-book file.
//! - Create the `contacts` table on first use and verify its shape.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A returned connection always has every column contact parsing reads.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory, open_db_read_only};

pub type DbResult<T> = Result<T, DbError>;

/// Address-book open/shape failure.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    /// Read-only open of a file that never held an address book.
    Uninitialized,
    /// `contacts` exists but lacks a column contacts are read from.
    MissingColumn(&'static str),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "address book schema v{found} is newer than this build (v{supported})"
            ),
            Self::Uninitialized => write!(f, "file does not contain an address book"),
            Self::MissingColumn(column) => {
                write!(f, "address book `contacts` table has no `{column}` column")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } | Self::Uninitialized | Self::MissingColumn(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
