//! Field-level validation rules for authors and posts.
//!
//! # Responsibility
//! - Define `ValidationError`, the single rule-failure kind.
//! - Expose one explicit validator function per persisted field.
//!
//! # Invariants
//! - Validators never mutate storage; the only shared read is the author
//!   name lookup injected through `AuthorNameLookup`.
//! - The first failing rule aborts a write; failures are not aggregated.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author;
pub mod post;

pub use author::{AuthorNameLookup, AuthorValidator};
pub use post::{
    validate_category, validate_content, validate_summary, validate_title, CLICKBAIT_PHRASES,
    MAX_SUMMARY_CHARS, MIN_CONTENT_CHARS,
};

/// Rule failure raised before a record is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    DuplicateName,
    MissingPhoneNumber,
    InvalidPhoneNumber,
    ContentTooShort { chars: usize },
    SummaryTooLong { chars: usize },
    InvalidCategory,
    MissingClickbaitPhrase,
}

impl ValidationError {
    /// Stable machine-readable code, safe to log.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::DuplicateName => "duplicate_name",
            Self::MissingPhoneNumber => "missing_phone_number",
            Self::InvalidPhoneNumber => "invalid_phone_number",
            Self::ContentTooShort { .. } => "content_too_short",
            Self::SummaryTooLong { .. } => "summary_too_long",
            Self::InvalidCategory => "invalid_category",
            Self::MissingClickbaitPhrase => "missing_clickbait_phrase",
        }
    }

    /// Name of the field whose rule failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::DuplicateName => "name",
            Self::MissingPhoneNumber | Self::InvalidPhoneNumber => "phone_number",
            Self::ContentTooShort { .. } => "content",
            Self::SummaryTooLong { .. } => "summary",
            Self::InvalidCategory => "category",
            Self::MissingClickbaitPhrase => "title",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "author must have a name"),
            Self::DuplicateName => write!(f, "an author with this name already exists"),
            Self::MissingPhoneNumber => write!(f, "phone number is required"),
            Self::InvalidPhoneNumber => write!(f, "phone number must be exactly 10 digits"),
            Self::ContentTooShort { chars } => write!(
                f,
                "content must be at least {MIN_CONTENT_CHARS} characters long (got {chars})"
            ),
            Self::SummaryTooLong { chars } => write!(
                f,
                "summary cannot exceed {MAX_SUMMARY_CHARS} characters (got {chars})"
            ),
            Self::InvalidCategory => {
                write!(f, "category must be either fiction or non-fiction")
            }
            Self::MissingClickbaitPhrase => write!(
                f,
                "title must contain one of: 'won't believe', 'secret', 'top', 'guess'"
            ),
        }
    }
}

impl Error for ValidationError {}
