//! Author field validators.
//!
//! # Responsibility
//! - Enforce non-empty, case-insensitively unique author names.
//! - Enforce the 10-digit phone number format.
//!
//! # Invariants
//! - Name uniqueness is decided on the case-folded name (`name_key`).
//! - A match on the record's own id is not a duplicate.

use super::ValidationError;
use crate::model::author::AuthorId;
use crate::repo::RepoResult;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid phone number regex"));

/// Case-insensitive exact-match lookup over existing author names.
pub trait AuthorNameLookup {
    /// Returns the id of the author whose name equals `name` ignoring case.
    fn find_author_id_by_name(&self, name: &str) -> RepoResult<Option<AuthorId>>;
}

/// Normalizes an author name into its uniqueness key.
pub fn author_name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Author validator bound to a name lookup capability.
pub struct AuthorValidator<'a, L: AuthorNameLookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: AuthorNameLookup + ?Sized> AuthorValidator<'a, L> {
    pub fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Validates a candidate name for the record `self_id`.
    ///
    /// `self_id` is `None` for a record that has not been created yet.
    ///
    /// # Errors
    /// - `ValidationError::EmptyName` when `candidate` is empty.
    /// - `ValidationError::DuplicateName` when another author owns the name.
    /// - Repository errors from the lookup are returned unchanged.
    pub fn validate_name(&self, candidate: &str, self_id: Option<AuthorId>) -> RepoResult<()> {
        if candidate.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        match self.lookup.find_author_id_by_name(candidate)? {
            Some(existing) if Some(existing) != self_id => {
                Err(ValidationError::DuplicateName.into())
            }
            _ => Ok(()),
        }
    }

    /// See [`validate_phone_number`].
    pub fn validate_phone_number(&self, candidate: &str) -> Result<(), ValidationError> {
        validate_phone_number(candidate)
    }
}

/// Validates that `candidate` is exactly 10 decimal digits (Unicode `Nd`).
///
/// No normalization: full-width digits are accepted and stored as given.
pub fn validate_phone_number(candidate: &str) -> Result<(), ValidationError> {
    if candidate.is_empty() {
        return Err(ValidationError::MissingPhoneNumber);
    }
    if !PHONE_NUMBER_RE.is_match(candidate) {
        return Err(ValidationError::InvalidPhoneNumber);
    }
    Ok(())
}
