use axum::extract::{FromRequest, FromRequestParts};
use axum::extract::rejection::PathRejection;

use crate::errors::ApiError;

/// `axum::Json` whose rejection is an [`ApiError`], so malformed or
/// incomplete bodies get the same `{error, message}` shape as other failures.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` with an [`ApiError`] rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}
