//! Payment repository - the payment ledger.

use diwai_core::{PaymentStatus, UserId};

use super::{Db, RepositoryError};
use crate::models::Payment;

/// Repository for payment records.
pub struct PaymentRepository<'a> {
    db: &'a Db,
}

impl<'a> PaymentRepository<'a> {
    #[must_use]
    pub(super) const fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Record a payment and mark its ride as paid, in one step.
    ///
    /// Duplicate submissions against the same ride each append a fresh
    /// record; there is no idempotency key and no reconciliation
    /// against the ride's fare.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ride does not exist.
    pub fn create(&self, payment: Payment) -> Result<Payment, RepositoryError> {
        let mut store = self.db.write()?;
        let ride = store
            .rides
            .iter_mut()
            .find(|r| r.id == payment.ride_id)
            .ok_or(RepositoryError::NotFound)?;
        ride.payment_status = PaymentStatus::Completed;
        store.payments.push(payment.clone());
        Ok(payment)
    }

    /// Every payment in the ledger.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn list(&self) -> Result<Vec<Payment>, RepositoryError> {
        let store = self.db.read()?;
        Ok(store.payments.clone())
    }

    /// Payments submitted by one passenger.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn list_for_passenger(&self, passenger: UserId) -> Result<Vec<Payment>, RepositoryError> {
        let store = self.db.read()?;
        Ok(store
            .payments
            .iter()
            .filter(|p| p.passenger_id == passenger)
            .cloned()
            .collect())
    }
}
