//! Custom Axum extractors
//!
//! Both extractors reject before the handler body runs, so handlers
//! only ever see validated input.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Page, PageParams, ValidationError};

/// Extract and validate the skip/limit window from the query string.
pub struct ValidPage(pub Page);

impl<S> FromRequestParts<S> for ValidPage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PageParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::Validation(ValidationError::InvalidParams {
                    reason: e.to_string(),
                })
            })?;

        let page = Page::resolve(params)?;
        Ok(Self(page))
    }
}

/// JSON body extractor that surfaces rejections in the standard error
/// envelope instead of axum's plain-text default.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::InvalidBody {
                reason: e.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
