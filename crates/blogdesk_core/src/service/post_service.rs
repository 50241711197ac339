//! Post use-case service.
//!
//! # Responsibility
//! - Run post field validators before any post write.
//! - Normalize categories before they reach storage.
//!
//! # Invariants
//! - Field order is title, content, category, summary; first failure aborts.
//! - Patch validates only the fields it carries.

use crate::model::post::{NewPost, Post, PostDraft, PostId, PostPatch};
use crate::repo::post_repo::{PostListQuery, PostRepository};
use crate::repo::{RepoError, RepoResult};
use crate::service::log_write;
use crate::validation::post::{
    validate_category, validate_content, validate_summary, validate_title,
};
use crate::validation::ValidationError;
use log::info;

/// Use-case service for validated post writes.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists a new post, returning its assigned id.
    pub fn create_post(&self, request: &NewPost) -> RepoResult<PostId> {
        let result = validate_new_post(request)
            .map_err(RepoError::from)
            .and_then(|draft| self.repo.create_post(&draft));
        log_write("post_create", &result);
        result
    }

    /// Applies a field patch to an existing post and returns the stored record.
    pub fn update_post(&self, id: PostId, patch: &PostPatch) -> RepoResult<Post> {
        let result = self.apply_patch(id, patch);
        log_write("post_update", &result);
        result
    }

    pub fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    pub fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        self.repo.list_posts(query)
    }

    pub fn delete_post(&self, id: PostId) -> RepoResult<()> {
        self.repo.delete_post(id)?;
        info!("event=post_delete module=service status=ok");
        Ok(())
    }

    fn apply_patch(&self, id: PostId, patch: &PostPatch) -> RepoResult<Post> {
        let mut post = self.repo.get_post(id)?.ok_or(RepoError::NotFound(id))?;
        if patch.is_empty() {
            return Ok(post);
        }

        if let Some(title) = &patch.title {
            validate_title(title)?;
            post.title = title.clone();
        }
        if let Some(content) = &patch.content {
            validate_content(content)?;
            post.content = content.clone();
        }
        if let Some(category) = &patch.category {
            post.category = validate_category(category)?;
        }
        if let Some(summary) = &patch.summary {
            validate_summary(summary.as_deref())?;
            post.summary = summary.clone();
        }

        self.repo.update_post(&post)?;
        self.repo.get_post(id)?.ok_or(RepoError::NotFound(id))
    }
}

/// Runs every post validator in field order and builds the storable draft.
pub fn validate_new_post(request: &NewPost) -> Result<PostDraft, ValidationError> {
    validate_title(&request.title)?;
    validate_content(&request.content)?;
    let category = validate_category(&request.category)?;
    validate_summary(request.summary.as_deref())?;

    Ok(PostDraft {
        title: request.title.clone(),
        content: request.content.clone(),
        category,
        summary: request.summary.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::validate_new_post;
    use crate::model::post::{NewPost, PostCategory};
    use crate::validation::ValidationError;

    fn request() -> NewPost {
        NewPost {
            title: "Top Secret Plans".to_string(),
            content: "c".repeat(260),
            category: "Fiction".to_string(),
            summary: Some("s".repeat(100)),
        }
    }

    #[test]
    fn draft_carries_normalized_category() {
        let draft = validate_new_post(&request()).unwrap();
        assert_eq!(draft.category, PostCategory::Fiction);
        assert_eq!(draft.category.as_str(), "fiction");
    }

    #[test]
    fn first_failing_field_in_declaration_order_wins() {
        let mut bad = request();
        bad.title = "A Normal Day".to_string();
        bad.content = "short".to_string();
        bad.category = "poetry".to_string();
        assert_eq!(
            validate_new_post(&bad),
            Err(ValidationError::MissingClickbaitPhrase)
        );

        bad.title = "Guess what".to_string();
        assert_eq!(
            validate_new_post(&bad),
            Err(ValidationError::ContentTooShort { chars: 5 })
        );

        bad.content = "c".repeat(300);
        assert_eq!(validate_new_post(&bad), Err(ValidationError::InvalidCategory));
    }
}
