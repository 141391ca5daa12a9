use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::config::DatabaseUrl;
use crate::models::{Author, BlogPost, NewBlogPost, UpdateBlogPostReq};

const POST_COLUMNS: &str = "id, title, content, author_first_name, author_last_name, created";

/// Opens the store named by `url`, creating parent directories for file
/// stores, and makes sure the schema exists.
pub fn open(url: &DatabaseUrl) -> rusqlite::Result<Connection> {
    let conn = match url {
        DatabaseUrl::Memory => Connection::open_in_memory()?,
        DatabaseUrl::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!(path = %parent.display(), error = %e, "could not create database directory");
                }
            }
            Connection::open(path)?
        }
    };
    initialize(&conn)?;
    Ok(conn)
}

pub fn initialize(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA journal_mode=WAL;").ok();

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS blog_posts (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            author_first_name TEXT NOT NULL DEFAULT '',
            author_last_name TEXT NOT NULL DEFAULT '',
            created TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_blog_posts_created ON blog_posts(created);
        ",
    )
}

fn post_from_row(row: &Row<'_>) -> rusqlite::Result<BlogPost> {
    Ok(BlogPost {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        author: Author {
            first_name: row.get(3)?,
            last_name: row.get(4)?,
        },
        created: row.get(5)?,
    })
}

/// Stores `post`, assigning its id and creation time.
pub fn insert_post(conn: &Connection, post: &NewBlogPost) -> rusqlite::Result<BlogPost> {
    let stored = BlogPost {
        id: uuid::Uuid::new_v4().to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author.clone(),
        created: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
    };
    conn.execute(
        "INSERT INTO blog_posts (id, title, content, author_first_name, author_last_name, created)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            stored.id,
            stored.title,
            stored.content,
            stored.author.first_name,
            stored.author.last_name,
            stored.created,
        ],
    )?;
    Ok(stored)
}

/// All posts in creation order.
pub fn list_posts(conn: &Connection) -> rusqlite::Result<Vec<BlogPost>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {POST_COLUMNS} FROM blog_posts ORDER BY created ASC, rowid ASC"
    ))?;
    let posts = stmt.query_map([], post_from_row)?.collect();
    posts
}

pub fn find_post(conn: &Connection, id: &str) -> rusqlite::Result<Option<BlogPost>> {
    conn.query_row(
        &format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE id = ?1"),
        [id],
        post_from_row,
    )
    .optional()
}

pub fn count_posts(conn: &Connection) -> rusqlite::Result<usize> {
    conn.query_row("SELECT COUNT(*) FROM blog_posts", [], |r| r.get::<_, i64>(0))
        .map(|n| n as usize)
}

/// Overwrites the submitted fields of post `id`, leaving the rest as stored.
/// Returns the updated post, or `None` when no post has that id.
/// An update with no fields leaves the row untouched.
pub fn update_post(conn: &Connection, id: &str, req: &UpdateBlogPostReq) -> rusqlite::Result<Option<BlogPost>> {
    let Some(current) = find_post(conn, id)? else {
        return Ok(None);
    };
    if req.is_empty() {
        return Ok(Some(current));
    }

    let title = req.title.as_deref().unwrap_or(&current.title);
    let content = req.content.as_deref().unwrap_or(&current.content);
    let author = req.author.as_ref().unwrap_or(&current.author);

    conn.execute(
        "UPDATE blog_posts SET title = ?1, content = ?2, author_first_name = ?3, author_last_name = ?4 WHERE id = ?5",
        params![title, content, author.first_name, author.last_name, id],
    )?;

    find_post(conn, id)
}

/// Returns whether a post was removed.
pub fn delete_post(conn: &Connection, id: &str) -> rusqlite::Result<bool> {
    let deleted = conn.execute("DELETE FROM blog_posts WHERE id = ?1", [id])?;
    Ok(deleted > 0)
}

/// Removes every post. Used between test cases.
pub fn drop_all(conn: &Connection) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM blog_posts", [])
}
