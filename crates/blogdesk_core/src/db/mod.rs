//! SQLite storage for authors and posts.
//!
//! # Schema
//! - `authors(id, name, name_key, phone_number, created_at, updated_at)`:
//!   `name_key` holds the lower-cased name under a unique index, the storage
//!   backstop for case-insensitive name uniqueness (migration 2).
//! - `posts(id, title, content, category, summary, created_at, updated_at)`:
//!   `category` is constrained to `fiction` / `non-fiction` (migration 1).
//! - `created_at` defaults to the store clock in epoch milliseconds;
//!   `updated_at` stays NULL until a repository update stamps it.
//!
//! # Invariants
//! - Connections returned by `open_db*` are migrated to `latest_version()`.
//! - A database written by a newer binary is refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Connection bootstrap and migration failure.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
