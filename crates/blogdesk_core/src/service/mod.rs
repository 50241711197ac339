//! Core use-case services.
//!
//! # Responsibility
//! - Own the validated write path: validators run, then the repository writes.
//! - Keep callers decoupled from storage details.

use crate::repo::{RepoError, RepoResult};
use log::{info, warn};

pub mod author_service;
pub mod post_service;

// Only codes and field names are logged, never user-provided text.
pub(crate) fn log_write<T>(event: &'static str, result: &RepoResult<T>) {
    match result {
        Ok(_) => info!("event={event} module=service status=ok"),
        Err(RepoError::Validation(err)) => warn!(
            "event={event} module=service status=rejected error_code=validation_failed field={} rule={}",
            err.field(),
            err.code()
        ),
        Err(RepoError::NotFound(_)) => {
            warn!("event={event} module=service status=rejected error_code=not_found")
        }
        Err(err) => warn!("event={event} module=service status=error error={err}"),
    }
}
