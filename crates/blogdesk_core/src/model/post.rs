//! Post domain model.
//!
//! # Responsibility
//! - Define the persisted post record, its category and write requests.
//!
//! # Invariants
//! - `category` is always stored in its lower-case form.
//! - `content` has at least 250 characters; `summary` at most 250.
//! - `title` contains at least one whitelisted phrase.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a post record.
pub type PostId = Uuid;

/// Allowed post categories.
///
/// Serialized and stored as the lower-case names `fiction` / `non-fiction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostCategory {
    Fiction,
    NonFiction,
}

impl PostCategory {
    /// Returns the normalized stored form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "fiction",
            Self::NonFiction => "non-fiction",
        }
    }

    /// Parses an already-normalized stored value.
    ///
    /// Case-insensitive parsing of user input lives in the post validator.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "fiction" => Some(Self::Fiction),
            "non-fiction" => Some(Self::NonFiction),
            _ => None,
        }
    }
}

impl Display for PostCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub summary: Option<String>,
    /// Epoch milliseconds of the first insert.
    pub created_at: i64,
    /// Epoch milliseconds of the latest modification, `None` until modified.
    pub updated_at: Option<i64>,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Post(id={}, title={}, content={}, summary={})",
            self.id,
            self.title,
            self.content,
            self.summary.as_deref().unwrap_or("")
        )
    }
}

/// Create request for a new post.
///
/// `category` is raw user input; it is normalized during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub summary: Option<String>,
}

/// Field update for an existing post.
///
/// `summary: Some(None)` clears the summary; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub summary: Option<Option<String>>,
}

impl PostPatch {
    /// Returns whether the patch carries no field changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.summary.is_none()
    }
}

/// Validated field set handed to the repository on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub summary: Option<String>,
}
