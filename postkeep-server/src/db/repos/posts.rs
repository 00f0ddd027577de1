//! Post repository
//!
//! The three operations the API exposes: insert, windowed list, and
//! lookup by id. The lookup is the shared "post by id, or not found"
//! dependency for any route that needs it.

use sqlx::SqlitePool;

use crate::models::{NewPost, Page, Post};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a post and return it with its assigned id.
    ///
    /// Runs in an explicit transaction; a commit failure aborts the
    /// request and persists nothing.
    pub async fn insert(&self, new: NewPost) -> Result<Post, DbError> {
        let mut tx = self.pool.begin().await?;

        let post: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (title, content)
            VALUES (?1, ?2)
            RETURNING id, title, content
            "#,
        )
        .bind(&new.title)
        .bind(&new.content)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(post)
    }

    /// List posts for the given skip/limit window.
    ///
    /// No ORDER BY is imposed; result order is whatever SQLite returns.
    pub async fn list(&self, page: Page) -> Result<Vec<Post>, DbError> {
        let posts: Vec<Post> = sqlx::query_as(
            r#"
            SELECT id, title, content FROM posts
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a single post by id, or `DbError::NotFound`.
    pub async fn get(&self, id: i64) -> Result<Post, DbError> {
        let post: Option<Post> = sqlx::query_as("SELECT id, title, content FROM posts WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        post.ok_or(DbError::NotFound {
            resource: "post",
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool_with_options;
    use crate::db::schema::ensure_schema;

    // In-memory pools must stay at one connection, otherwise each
    // checkout sees a different empty database.
    async fn test_pool() -> SqlitePool {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");
        ensure_schema(&pool).await.expect("schema creation failed");
        pool
    }

    fn new_post(title: &str, content: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let pool = test_pool().await;
        let repo = PostRepo::new(&pool);

        let first = repo.insert(new_post("A", "B")).await.expect("insert failed");
        let second = repo.insert(new_post("C", "D")).await.expect("insert failed");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn insert_then_get_roundtrip() {
        let pool = test_pool().await;
        let repo = PostRepo::new(&pool);

        let created = repo
            .insert(new_post("hello", "world"))
            .await
            .expect("insert failed");
        let fetched = repo.get(created.id).await.expect("get failed");

        assert_eq!(fetched.title, "hello");
        assert_eq!(fetched.content, "world");
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = PostRepo::new(&pool);

        let err = repo.get(999).await.expect_err("expected not found");
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "post",
                id: 999
            }
        ));
    }

    #[tokio::test]
    async fn list_applies_window() {
        let pool = test_pool().await;
        let repo = PostRepo::new(&pool);

        for i in 0..5 {
            repo.insert(new_post(&format!("t{i}"), "c"))
                .await
                .expect("insert failed");
        }

        let all = repo.list(Page { skip: 0, limit: 100 }).await.expect("list failed");
        assert_eq!(all.len(), 5);

        let window = repo.list(Page { skip: 3, limit: 10 }).await.expect("list failed");
        assert_eq!(window.len(), 2);

        let empty = repo.list(Page { skip: 10, limit: 10 }).await.expect("list failed");
        assert!(empty.is_empty());
    }
}
