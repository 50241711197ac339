//! Author repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over `authors` storage.
//! - Provide the case-insensitive name lookup used by the author validator.
//!
//! # Invariants
//! - `name_key` is always `author_name_key(name)`.
//! - A unique violation on `name_key` surfaces as `ValidationError::DuplicateName`.
//! - Read paths reject invalid persisted ids instead of masking them.

use crate::model::author::{Author, AuthorId, NewAuthor};
use crate::repo::{ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use crate::validation::author::{author_name_key, AuthorNameLookup};
use crate::validation::ValidationError;
use rusqlite::{ffi, params, Connection, Row};
use uuid::Uuid;

const AUTHOR_SELECT_SQL: &str = "SELECT
    id,
    name,
    phone_number,
    created_at,
    updated_at
FROM authors";

const REQUIRED_COLUMNS: &[&str] = &[
    "id",
    "name",
    "name_key",
    "phone_number",
    "created_at",
    "updated_at",
];

/// Repository interface for author CRUD operations.
///
/// Callers validate fields before writing; see `AuthorService`.
pub trait AuthorRepository {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId>;
    fn update_author(&self, author: &Author) -> RepoResult<()>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    fn delete_author(&self, id: AuthorId) -> RepoResult<()>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "authors", REQUIRED_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<AuthorId> {
        let id = Uuid::new_v4();
        self.conn
            .execute(
                "INSERT INTO authors (id, name, name_key, phone_number)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    id.to_string(),
                    author.name.as_str(),
                    author_name_key(&author.name),
                    author.phone_number.as_str(),
                ],
            )
            .map_err(map_name_conflict)?;

        Ok(id)
    }

    fn update_author(&self, author: &Author) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE authors
                 SET
                    name = ?1,
                    name_key = ?2,
                    phone_number = ?3,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?4;",
                params![
                    author.name.as_str(),
                    author_name_key(&author.name),
                    author.phone_number.as_str(),
                    author.id.to_string(),
                ],
            )
            .map_err(map_name_conflict)?;

        if changed == 0 {
            return Err(RepoError::NotFound(author.id));
        }

        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }

        Ok(None)
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} ORDER BY name_key ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut authors = Vec::new();

        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }

        Ok(authors)
    }

    fn delete_author(&self, id: AuthorId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM authors WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

impl AuthorNameLookup for SqliteAuthorRepository<'_> {
    fn find_author_id_by_name(&self, name: &str) -> RepoResult<Option<AuthorId>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM authors WHERE name_key = ?1 LIMIT 1;")?;
        let mut rows = stmt.query([author_name_key(name)])?;
        match rows.next()? {
            Some(row) => {
                let id_text: String = row.get(0)?;
                Ok(Some(parse_uuid(&id_text, "authors.id")?))
            }
            None => Ok(None),
        }
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    let id_text: String = row.get("id")?;
    Ok(Author {
        id: parse_uuid(&id_text, "authors.id")?,
        name: row.get("name")?,
        phone_number: row.get("phone_number")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

// The check-then-write in the validator can race; the unique index is the backstop.
fn map_name_conflict(err: rusqlite::Error) -> RepoError {
    if let rusqlite::Error::SqliteFailure(failure, Some(message)) = &err {
        if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
            && message.contains("authors.name_key")
        {
            return RepoError::Validation(ValidationError::DuplicateName);
        }
    }
    RepoError::from(err)
}
