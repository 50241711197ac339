//! Author use-case service.
//!
//! # Responsibility
//! - Run author field validators before any author write.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Create validates `name` then `phone_number`; the first failure aborts.
//! - Patch validates only the fields it carries, in the same order.
//! - Rejected writes leave storage untouched.

use crate::model::author::{Author, AuthorId, AuthorPatch, NewAuthor};
use crate::repo::author_repo::AuthorRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::log_write;
use crate::validation::author::{AuthorNameLookup, AuthorValidator};
use log::info;

/// Use-case service for validated author writes.
pub struct AuthorService<R: AuthorRepository + AuthorNameLookup> {
    repo: R,
}

impl<R: AuthorRepository + AuthorNameLookup> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists a new author, returning its assigned id.
    pub fn create_author(&self, request: &NewAuthor) -> RepoResult<AuthorId> {
        let result = self
            .validate_new(request)
            .and_then(|()| self.repo.create_author(request));
        log_write("author_create", &result);
        result
    }

    /// Applies a field patch to an existing author.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when `id` does not exist.
    /// - `RepoError::Validation` for the first failing patched field.
    pub fn update_author(&self, id: AuthorId, patch: &AuthorPatch) -> RepoResult<Author> {
        let result = self.apply_patch(id, patch);
        log_write("author_update", &result);
        result
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    pub fn list_authors(&self) -> RepoResult<Vec<Author>> {
        self.repo.list_authors()
    }

    pub fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        self.repo.delete_author(id)?;
        info!("event=author_delete module=service status=ok");
        Ok(())
    }

    fn validate_new(&self, request: &NewAuthor) -> RepoResult<()> {
        let validator = AuthorValidator::new(&self.repo);
        validator.validate_name(&request.name, None)?;
        validator.validate_phone_number(&request.phone_number)?;
        Ok(())
    }

    fn apply_patch(&self, id: AuthorId, patch: &AuthorPatch) -> RepoResult<Author> {
        let mut author = self.repo.get_author(id)?.ok_or(RepoError::NotFound(id))?;
        if patch.is_empty() {
            return Ok(author);
        }

        let validator = AuthorValidator::new(&self.repo);
        if let Some(name) = &patch.name {
            validator.validate_name(name, Some(id))?;
            author.name = name.clone();
        }
        if let Some(phone_number) = &patch.phone_number {
            validator.validate_phone_number(phone_number)?;
            author.phone_number = phone_number.clone();
        }

        self.repo.update_author(&author)?;
        self.repo.get_author(id)?.ok_or(RepoError::NotFound(id))
    }
}
