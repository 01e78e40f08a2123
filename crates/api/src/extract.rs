//! Request extractors.
//!
//! Wraps `axum::Json` so that malformed or missing bodies surface as the
//! API's own 400 validation error instead of axum's default 422.

use axum::extract::{FromRequest, Request};

use crate::error::AppError;

/// JSON body extractor with API-conformant rejections.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
