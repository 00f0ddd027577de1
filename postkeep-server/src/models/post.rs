//! Post data model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted post. Immutable once created; this service never
/// updates or deletes rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Assigned by SQLite on insert
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Input for creating a post. Both fields are required; requests
/// missing either are rejected before anything touches the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}
