//! Authentication error type.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors from the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately one variant for
    /// both so callers cannot be used for user enumeration.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The email is already registered.
    #[error("email already registered")]
    EmailTaken,

    /// The email failed structural validation.
    #[error(transparent)]
    InvalidEmail(#[from] diwai_core::EmailError),

    /// No bearer token on the request.
    #[error("missing bearer token")]
    MissingToken,

    /// The token's signature or shape is invalid.
    #[error("invalid token")]
    InvalidToken,

    /// Argon2 could not produce a hash.
    #[error("password hashing failed")]
    PasswordHash,

    /// Storage failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
