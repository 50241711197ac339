use blogdesk_core::db::open_db_in_memory;
use blogdesk_core::{
    NewPost, PostCategory, PostListQuery, PostPatch, PostService, RepoError,
    SqlitePostRepository, ValidationError,
};
use rusqlite::Connection;
use uuid::Uuid;

fn service(conn: &Connection) -> PostService<SqlitePostRepository<'_>> {
    PostService::new(SqlitePostRepository::try_new(conn).unwrap())
}

fn post_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM posts;", [], |row| row.get(0))
        .unwrap()
}

fn valid_request() -> NewPost {
    NewPost {
        title: "Top Secret Plans".to_string(),
        content: "x".repeat(260),
        category: "Fiction".to_string(),
        summary: Some("s".repeat(100)),
    }
}

#[test]
fn create_stores_lower_case_category() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);

    let id = posts.create_post(&valid_request()).unwrap();

    let loaded = posts.get_post(id).unwrap().unwrap();
    assert_eq!(loaded.title, "Top Secret Plans");
    assert_eq!(loaded.content.chars().count(), 260);
    assert_eq!(loaded.category, PostCategory::Fiction);
    assert_eq!(loaded.summary.as_deref().map(str::len), Some(100));
    assert_eq!(loaded.updated_at, None);

    let stored: String = conn
        .query_row(
            "SELECT category FROM posts WHERE id = ?1;",
            [id.to_string()],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "fiction");
}

#[test]
fn upper_case_non_fiction_is_accepted() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);

    let mut request = valid_request();
    request.category = "NON-FICTION".to_string();
    let id = posts.create_post(&request).unwrap();

    let loaded = posts.get_post(id).unwrap().unwrap();
    assert_eq!(loaded.category.as_str(), "non-fiction");
}

#[test]
fn summary_is_optional() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);

    let mut request = valid_request();
    request.summary = None;
    let id = posts.create_post(&request).unwrap();
    assert_eq!(posts.get_post(id).unwrap().unwrap().summary, None);
}

#[test]
fn each_failing_rule_rejects_the_write() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);

    let mut bad_title = valid_request();
    bad_title.title = "A Normal Day".to_string();

    let mut short_content = valid_request();
    short_content.content = "x".repeat(249);

    let mut bad_category = valid_request();
    bad_category.category = "poetry".to_string();

    let mut long_summary = valid_request();
    long_summary.summary = Some("s".repeat(251));

    let cases = [
        (bad_title, ValidationError::MissingClickbaitPhrase),
        (short_content, ValidationError::ContentTooShort { chars: 249 }),
        (bad_category, ValidationError::InvalidCategory),
        (long_summary, ValidationError::SummaryTooLong { chars: 251 }),
    ];

    for (request, expected) in cases {
        match posts.create_post(&request).unwrap_err() {
            RepoError::Validation(actual) => assert_eq!(actual, expected),
            other => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(post_count(&conn), 0);
}

#[test]
fn boundary_lengths_are_accepted() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);

    let mut request = valid_request();
    request.content = "x".repeat(250);
    request.summary = Some("s".repeat(250));
    posts.create_post(&request).unwrap();
}

#[test]
fn patch_revalidates_only_changed_fields() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);
    let id = posts.create_post(&valid_request()).unwrap();

    let patch = PostPatch {
        category: Some("Non-Fiction".to_string()),
        summary: Some(None),
        ..PostPatch::default()
    };
    let updated = posts.update_post(id, &patch).unwrap();

    assert_eq!(updated.category, PostCategory::NonFiction);
    assert_eq!(updated.summary, None);
    assert_eq!(updated.title, "Top Secret Plans");
    assert!(updated.updated_at.is_some());
}

#[test]
fn rejected_patch_leaves_record_untouched() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);
    let id = posts.create_post(&valid_request()).unwrap();

    let patch = PostPatch {
        title: Some("You won't believe it".to_string()),
        content: Some("too short".to_string()),
        ..PostPatch::default()
    };
    let err = posts.update_post(id, &patch).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::ContentTooShort { chars: 9 })
    ));

    let unchanged = posts.get_post(id).unwrap().unwrap();
    assert_eq!(unchanged.title, "Top Secret Plans");
    assert_eq!(unchanged.updated_at, None);
}

#[test]
fn update_and_delete_missing_post_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);
    let missing = Uuid::new_v4();

    let patch = PostPatch {
        title: Some("Top picks".to_string()),
        ..PostPatch::default()
    };
    let err = posts.update_post(missing, &patch).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));

    let err = posts.delete_post(missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
}

#[test]
fn delete_removes_the_post() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);
    let id = posts.create_post(&valid_request()).unwrap();

    posts.delete_post(id).unwrap();
    assert!(posts.get_post(id).unwrap().is_none());
}

#[test]
fn list_filters_by_category_and_paginates() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);

    let mut ids = Vec::new();
    for category in ["fiction", "non-fiction", "FICTION"] {
        let mut request = valid_request();
        request.category = category.to_string();
        ids.push(posts.create_post(&request).unwrap());
    }
    conn.execute("UPDATE posts SET created_at = 1234567890000;", [])
        .unwrap();

    let fiction = posts
        .list_posts(&PostListQuery {
            category: Some(PostCategory::Fiction),
            ..PostListQuery::default()
        })
        .unwrap();
    assert_eq!(fiction.len(), 2);
    assert!(fiction
        .iter()
        .all(|post| post.category == PostCategory::Fiction));

    let mut sorted = ids.clone();
    sorted.sort();
    let page = posts
        .list_posts(&PostListQuery {
            limit: Some(1),
            offset: 1,
            ..PostListQuery::default()
        })
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, sorted[1]);

    let tail = posts
        .list_posts(&PostListQuery {
            offset: 2,
            ..PostListQuery::default()
        })
        .unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].id, sorted[2]);
}

#[test]
fn read_rejects_corrupt_persisted_id() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);
    posts.create_post(&valid_request()).unwrap();
    conn.execute("UPDATE posts SET id = 'not-a-uuid';", [])
        .unwrap();

    let err = posts.list_posts(&PostListQuery::default()).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn post_serializes_category_in_stored_form() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);
    let id = posts.create_post(&valid_request()).unwrap();
    let post = posts.get_post(id).unwrap().unwrap();

    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["category"], "fiction");
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["updated_at"], serde_json::Value::Null);
}

#[test]
fn display_shows_title_content_and_summary() {
    let conn = open_db_in_memory().unwrap();
    let posts = service(&conn);

    let mut request = valid_request();
    request.content = "c".repeat(250);
    request.summary = Some("teaser".to_string());
    let id = posts.create_post(&request).unwrap();
    let post = posts.get_post(id).unwrap().unwrap();
    assert_eq!(
        post.to_string(),
        format!(
            "Post(id={id}, title=Top Secret Plans, content={}, summary=teaser)",
            "c".repeat(250)
        )
    );

    let cleared = posts
        .update_post(
            id,
            &PostPatch {
                summary: Some(None),
                ..PostPatch::default()
            },
        )
        .unwrap();
    assert!(cleared.to_string().ends_with("summary=)"));
}
