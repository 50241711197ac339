//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `blogdesk_core` linkage and run one validated author/post write.
//!
//! Usage: `blogdesk_cli [DB_PATH]` (in-memory when omitted). Logging is
//! enabled when `BLOGDESK_LOG_DIR` is set; `BLOGDESK_LOG_LEVEL` overrides the
//! build default.

use blogdesk_core::db::{open_db, open_db_in_memory};
use blogdesk_core::{
    AuthorService, NewAuthor, NewPost, PostService, SqliteAuthorRepository,
    SqlitePostRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("blogdesk: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Ok(log_dir) = std::env::var("BLOGDESK_LOG_DIR") {
        let level = std::env::var("BLOGDESK_LOG_LEVEL")
            .unwrap_or_else(|_| blogdesk_core::default_log_level().to_string());
        blogdesk_core::init_logging(&level, &log_dir)?;
    }

    let conn = match std::env::args().nth(1) {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    println!("blogdesk_core version={}", blogdesk_core::core_version());

    let authors = AuthorService::new(SqliteAuthorRepository::try_new(&conn)?);
    match authors.create_author(&NewAuthor::new("Jane Doe", "5551234567")) {
        Ok(id) => println!("author created id={id}"),
        Err(err) => println!("author rejected: {err}"),
    }
    if let Err(err) = authors.create_author(&NewAuthor::new("JANE DOE", "5559999999")) {
        println!("author rejected: {err}");
    }

    let posts = PostService::new(SqlitePostRepository::try_new(&conn)?);
    let id = posts.create_post(&NewPost {
        title: "Top Secret Plans".to_string(),
        content: "lorem ipsum ".repeat(25),
        category: "Fiction".to_string(),
        summary: Some("A short teaser.".to_string()),
    })?;
    if let Some(post) = posts.get_post(id)? {
        println!("{post}");
    }

    Ok(())
}
