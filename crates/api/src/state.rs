//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::db::Db;
use crate::services::auth::TokenSigner;
use crate::services::pricing::{DistanceEstimator, SimulatedRoute};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; clones share the store, the token
/// signer, and the injected distance estimator.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    db: Db,
    tokens: TokenSigner,
    estimator: Box<dyn DistanceEstimator>,
}

impl AppState {
    /// Create application state with the production (simulated)
    /// distance estimator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_estimator(config, SimulatedRoute)
    }

    /// Create application state with a specific distance estimator.
    /// Tests use this to pin distances and ETAs.
    #[must_use]
    pub fn with_estimator(config: Config, estimator: impl DistanceEstimator + 'static) -> Self {
        let tokens = TokenSigner::new(&config.token_secret);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                db: Db::new(),
                tokens,
                estimator: Box::new(estimator),
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a handle to the in-memory store.
    #[must_use]
    pub fn db(&self) -> &Db {
        &self.inner.db
    }

    /// Get a reference to the token signer.
    #[must_use]
    pub fn tokens(&self) -> &TokenSigner {
        &self.inner.tokens
    }

    /// Get a reference to the distance estimator.
    #[must_use]
    pub fn estimator(&self) -> &dyn DistanceEstimator {
        self.inner.estimator.as_ref()
    }
}
