//! Post endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::repos::PostRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPage};
use crate::http::server::AppState;
use crate::models::{NewPost, Post};

/// GET /posts - list posts for a skip/limit window
async fn list_posts(
    State(state): State<Arc<AppState>>,
    ValidPage(page): ValidPage,
) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = PostRepo::new(&state.pool).list(page).await?;
    Ok(Json(posts))
}

/// POST /posts - create a post from title and content
async fn create_post(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<NewPost>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = PostRepo::new(&state.pool).insert(input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts/{id} - get a single post, or 404
async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = PostRepo::new(&state.pool).get(id).await?;
    Ok(Json(post))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
}
