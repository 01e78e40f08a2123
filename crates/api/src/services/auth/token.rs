//! Bearer-token signing and verification.
//!
//! Tokens are HS256 JWTs carrying the user's id, email, and role.
//! They carry no expiry claim and are verified with expiry checking
//! disabled: a token issued once stays valid for the life of the
//! secret. Flagged for security review, kept to match the product's
//! current behaviour.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use diwai_core::{Role, UserId};

use super::AuthError;

/// The claims embedded in every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The user's id.
    pub sub: UserId,
    pub email: String,
    pub role: Role,
}

/// Signs and verifies bearer tokens with a shared HS256 secret.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    /// Build a signer from the configured secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        // No expiry claim exists, so don't require or check one
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    /// Sign a token for the given claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if encoding fails (never in
    /// practice for HS256).
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding).map_err(|_| AuthError::InvalidToken)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if the signature or shape is
    /// invalid.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!(error = %err, "token verification failed");
                AuthError::InvalidToken
            })
    }
}
