//! Author domain model.
//!
//! # Responsibility
//! - Define the persisted author record and its write requests.
//!
//! # Invariants
//! - `name` is unique across authors under case-insensitive comparison.
//! - `phone_number` is exactly 10 decimal digits.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of an author record.
pub type AuthorId = Uuid;

/// Persisted author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub phone_number: String,
    /// Epoch milliseconds of the first insert.
    pub created_at: i64,
    /// Epoch milliseconds of the latest modification, `None` until modified.
    pub updated_at: Option<i64>,
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}

/// Create request for a new author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub phone_number: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Field update for an existing author.
///
/// Only `Some` fields are validated and written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl AuthorPatch {
    /// Returns whether the patch carries no field changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none()
    }
}
