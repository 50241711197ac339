//! Domain records persisted by blogdesk.
//!
//! # Responsibility
//! - Define the `Author` and `Post` records as read back from storage.
//! - Define write-side request shapes (`New*`, `*Patch`) used by services.
//!
//! # Invariants
//! - Every record is identified by a system-assigned UUID that never changes.
//! - `created_at`/`updated_at` are owned by the store clock, never by callers.

pub mod author;
pub mod post;
