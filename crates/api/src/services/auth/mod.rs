//! Authentication service - the credential store.
//!
//! Owns registration, password verification, and bearer-token issuance.
//! Passwords are hashed with Argon2id before storage; plaintext is
//! never retained.

mod error;
mod token;

pub use error::AuthError;
pub use token::{Claims, TokenSigner};

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use rust_decimal::Decimal;
use secrecy::ExposeSecret;

use diwai_core::{AccountStatus, Email, Role, UserId, VehicleType};

use crate::config::Config;
use crate::db::{Db, UserRepository};
use crate::models::User;

/// Parameters for registering a new account.
#[derive(Debug)]
pub struct NewUser {
    pub email: Email,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub vehicle_type: Option<VehicleType>,
    pub license_plate: Option<String>,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    tokens: &'a TokenSigner,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(db: &'a Db, tokens: &'a TokenSigner) -> Self {
        Self {
            users: db.users(),
            tokens,
        }
    }

    /// Register a new user and issue their first token.
    ///
    /// Drivers keep their vehicle fields and start `offline`; everyone
    /// else starts `active` with no vehicle data regardless of what was
    /// submitted.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` if the email is already
    /// registered, `AuthError::PasswordHash` if hashing fails.
    pub fn register(&self, new_user: NewUser) -> Result<(User, String), AuthError> {
        let password_hash = hash_password(&new_user.password)?;

        let is_driver = new_user.role.is_driver();
        let user = User {
            id: UserId::generate(),
            email: new_user.email,
            password_hash,
            name: new_user.name,
            phone: new_user.phone,
            role: new_user.role,
            vehicle_type: if is_driver { new_user.vehicle_type } else { None },
            license_plate: if is_driver { new_user.license_plate } else { None },
            status: if is_driver {
                AccountStatus::Offline
            } else {
                AccountStatus::Active
            },
            earnings: Decimal::ZERO,
            rating: 5.0,
            created_at: Utc::now(),
        };

        let user = self.users.insert(user).map_err(|e| match e {
            crate::db::RepositoryError::Conflict(_) => AuthError::EmailTaken,
            other => AuthError::Repository(other),
        })?;

        let token = self.issue_token(&user)?;
        tracing::info!(user = %user.id, role = %user.role, "user registered");
        Ok((user, token))
    }

    /// Login with email and password.
    ///
    /// Unknown email and wrong password produce the same error, so the
    /// endpoint cannot be used to enumerate accounts.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any mismatch.
    pub fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;
        let user = self
            .users
            .get_by_email(&email)?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        let token = self.issue_token(&user)?;
        Ok((user, token))
    }

    /// Sign a bearer token for a user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if signing fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        self.tokens.sign(&Claims {
            sub: user.id,
            email: user.email.to_string(),
            role: user.role,
        })
    }

    /// Ensure the default admin account exists.
    ///
    /// Called at startup; a no-op when the configured admin email is
    /// already registered. Known-credentials bootstrap, acceptable only
    /// for a throwaway prototype.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the configured email is invalid or the
    /// insert fails.
    pub fn seed_admin(&self, config: &Config) -> Result<(), AuthError> {
        let email = Email::parse(&config.admin_email)?;
        if self.users.get_by_email(&email)?.is_some() {
            return Ok(());
        }

        self.register(NewUser {
            email,
            password: config.admin_password.expose_secret().to_string(),
            name: config.admin_name.clone(),
            phone: config.admin_phone.clone(),
            role: Role::Admin,
            vehicle_type: None,
            license_plate: None,
        })?;
        tracing::info!(email = %config.admin_email, "default admin created");
        Ok(())
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
