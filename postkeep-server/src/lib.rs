//! postkeep-server: HTTP API over a SQLite posts store
//!
//! Exposes create/list/get for a single `posts` table. The interesting
//! part is the request pipeline: pagination validation ahead of the
//! handler, shared "post by id, or 404" lookup, and schema creation
//! before the listener accepts traffic.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ApiError, ServerConfig};
