//! Bearer-token authentication extractor.
//!
//! Provides an extractor for requiring authentication in route
//! handlers. A missing `Authorization` header is 401; a present but
//! unverifiable token is 403.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use diwai_core::{Role, UserId};

use crate::error::AppError;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// The authenticated caller, decoded from the bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(user: CurrentUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;

        let claims = state.tokens().verify(token)?;

        Ok(Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}
