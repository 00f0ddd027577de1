//! Startup schema creation for the posts table

use sqlx::SqlitePool;

/// Ensure the posts table exists.
///
/// Idempotent create-if-absent; `run_server` calls this before the
/// listener starts accepting requests. There is no migration mechanism
/// beyond this.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring posts schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool_with_options;

    #[tokio::test]
    async fn schema_create_is_idempotent() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");

        ensure_schema(&pool).await.expect("first create failed");
        ensure_schema(&pool).await.expect("second create failed");

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(&pool)
            .await
            .expect("table should be queryable");
        assert_eq!(count.0, 0);
    }
}
