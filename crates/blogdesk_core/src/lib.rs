//! Core domain logic for blogdesk.
//! Authors and posts, and the field validation enforced before they are stored.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::author::{Author, AuthorId, AuthorPatch, NewAuthor};
pub use model::post::{NewPost, Post, PostCategory, PostDraft, PostId, PostPatch};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::post_repo::{PostListQuery, PostRepository, SqlitePostRepository};
pub use repo::{RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::post_service::{validate_new_post, PostService};
pub use validation::{AuthorNameLookup, AuthorValidator, ValidationError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
