//! In-memory storage and repositories.
//!
//! All state lives in a single [`Store`] behind one `RwLock`; the lock
//! is the transaction boundary. Every mutating repository operation
//! performs its whole check-then-mutate sequence under the write guard,
//! so check-then-set sequences (notably ride acceptance) cannot
//! interleave. Cross-entity mutations such as crediting a driver on
//! ride completion happen under the same guard.
//!
//! Handlers never touch [`Store`] directly; they go through the
//! repository types below, which keeps the storage backend swappable.
//!
//! Nothing is persisted: a restart discards every user, ride, and
//! payment.

pub mod payments;
pub mod rides;
pub mod settings;
pub mod users;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::models::{Payment, Ride, Settings, User};

pub use payments::PaymentRepository;
pub use rides::RideRepository;
pub use settings::{SettingsRepository, SettingsUpdate};
pub use users::{ProfileUpdate, UserRepository};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email, ride already taken).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A writer panicked while holding the storage lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// The full in-memory dataset.
#[derive(Debug, Default)]
pub(crate) struct Store {
    pub users: Vec<User>,
    pub rides: Vec<Ride>,
    pub payments: Vec<Payment>,
    pub settings: Settings,
}

/// Handle to the in-memory store.
///
/// Cheaply cloneable; clones share the same underlying data.
#[derive(Clone, Default)]
pub struct Db {
    inner: Arc<RwLock<Store>>,
}

impl Db {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// User repository over this store.
    #[must_use]
    pub const fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self)
    }

    /// Ride repository over this store.
    #[must_use]
    pub const fn rides(&self) -> RideRepository<'_> {
        RideRepository::new(self)
    }

    /// Payment repository over this store.
    #[must_use]
    pub const fn payments(&self) -> PaymentRepository<'_> {
        PaymentRepository::new(self)
    }

    /// Settings repository over this store.
    #[must_use]
    pub const fn settings(&self) -> SettingsRepository<'_> {
        SettingsRepository::new(self)
    }

    /// Run a read-only closure over a consistent snapshot of every
    /// collection. Used by the admin aggregator so its counts and sums
    /// come from a single point in time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn with_snapshot<T>(
        &self,
        f: impl FnOnce(&[User], &[Ride], &[Payment]) -> T,
    ) -> Result<T, RepositoryError> {
        let store = self.read()?;
        Ok(f(&store.users, &store.rides, &store.payments))
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Store>, RepositoryError> {
        self.inner.read().map_err(|_| RepositoryError::Poisoned)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, RepositoryError> {
        self.inner.write().map_err(|_| RepositoryError::Poisoned)
    }
}
