//! Post field validators.
//!
//! # Responsibility
//! - Enforce content/summary length bounds.
//! - Normalize categories and enforce the category whitelist.
//! - Enforce the clickbait title-phrase whitelist.
//!
//! # Invariants
//! - Lengths are counted in `char`s, not bytes.
//! - Each validator is stateless and independent of the other fields.

use super::ValidationError;
use crate::model::post::PostCategory;

pub const MIN_CONTENT_CHARS: usize = 250;
pub const MAX_SUMMARY_CHARS: usize = 250;

/// Title phrases, matched as lower-case substrings.
pub const CLICKBAIT_PHRASES: [&str; 4] = ["won't believe", "secret", "top", "guess"];

/// Rejects content shorter than [`MIN_CONTENT_CHARS`]. No upper bound.
pub fn validate_content(candidate: &str) -> Result<(), ValidationError> {
    let chars = candidate.chars().count();
    if chars < MIN_CONTENT_CHARS {
        return Err(ValidationError::ContentTooShort { chars });
    }
    Ok(())
}

/// Rejects summaries longer than [`MAX_SUMMARY_CHARS`]; absent or empty passes.
pub fn validate_summary(candidate: Option<&str>) -> Result<(), ValidationError> {
    let Some(summary) = candidate else {
        return Ok(());
    };
    let chars = summary.chars().count();
    if chars > MAX_SUMMARY_CHARS {
        return Err(ValidationError::SummaryTooLong { chars });
    }
    Ok(())
}

/// Normalizes `candidate` case-insensitively into a [`PostCategory`].
pub fn validate_category(candidate: &str) -> Result<PostCategory, ValidationError> {
    PostCategory::from_stored(&candidate.to_lowercase()).ok_or(ValidationError::InvalidCategory)
}

/// Requires at least one [`CLICKBAIT_PHRASES`] entry inside the lower-cased title.
pub fn validate_title(candidate: &str) -> Result<(), ValidationError> {
    let lowered = candidate.to_lowercase();
    if CLICKBAIT_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        return Ok(());
    }
    Err(ValidationError::MissingClickbaitPhrase)
}
