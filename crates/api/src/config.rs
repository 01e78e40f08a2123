//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DIWAI_HOST` - Bind address (default: 127.0.0.1)
//! - `DIWAI_PORT` - Listen port (default: 5000)
//! - `DIWAI_TOKEN_SECRET` - Bearer-token signing secret
//! - `DIWAI_ADMIN_EMAIL` - Seeded admin account email
//! - `DIWAI_ADMIN_PASSWORD` - Seeded admin account password
//!
//! Every variable has a development default so the service runs out of
//! the box; the defaults are only acceptable for a throwaway prototype
//! and the server logs a warning when the default secret is in use.

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Development fallback for the token-signing secret.
const DEFAULT_TOKEN_SECRET: &str = "diwai-dev-secret-change-in-production";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Secret used to sign and verify bearer tokens
    pub token_secret: SecretString,
    /// Email of the admin account seeded at startup
    pub admin_email: String,
    /// Password of the seeded admin account
    pub admin_password: SecretString,
    /// Display name of the seeded admin account
    pub admin_name: String,
    /// Phone number of the seeded admin account
    pub admin_phone: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("DIWAI_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("DIWAI_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("DIWAI_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DIWAI_PORT".to_string(), e.to_string()))?;

        let token_secret =
            SecretString::from(get_env_or_default("DIWAI_TOKEN_SECRET", DEFAULT_TOKEN_SECRET));
        if token_secret.expose_secret() == DEFAULT_TOKEN_SECRET {
            tracing::warn!("DIWAI_TOKEN_SECRET not set, using the development default");
        }

        Ok(Self {
            host,
            port,
            token_secret,
            admin_email: get_env_or_default("DIWAI_ADMIN_EMAIL", "admin@diwaifox.com"),
            admin_password: SecretString::from(get_env_or_default(
                "DIWAI_ADMIN_PASSWORD",
                "admin123",
            )),
            admin_name: get_env_or_default("DIWAI_ADMIN_NAME", "Admin"),
            admin_phone: get_env_or_default("DIWAI_ADMIN_PHONE", "+675-1234-5678"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    /// Development defaults, used by tests and local tooling.
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
            token_secret: SecretString::from(DEFAULT_TOKEN_SECRET),
            admin_email: "admin@diwaifox.com".to_string(),
            admin_password: SecretString::from("admin123"),
            admin_name: "Admin".to_string(),
            admin_phone: "+675-1234-5678".to_string(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
