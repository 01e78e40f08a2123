//! Payment domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use diwai_core::{PaymentId, PaymentStatus, RideId, UserId};

/// A recorded payment attempt.
///
/// Immutable once created. There is no gateway and no reconciliation
/// against the ride's fare, so one ride may accumulate several of these.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub ride_id: RideId,
    /// The submitting user; an admin recording a payment is ledgered
    /// under their own id, not the ride's passenger.
    pub passenger_id: UserId,
    pub amount: Decimal,
    /// Payment method, free text.
    pub method: String,
    /// Always completed; there is no failure mode to record.
    pub status: PaymentStatus,
    /// Pseudo gateway reference derived from the creation timestamp.
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Build the pseudo transaction reference for a creation instant.
    #[must_use]
    pub fn transaction_id_at(created_at: DateTime<Utc>) -> String {
        format!("TXN-{}", created_at.timestamp_millis())
    }
}
