//! Ride domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use diwai_core::{PaymentStatus, RideId, RideStatus, UserId, VehicleType};

use super::user::UserProfile;

/// A ride record.
///
/// Created by a passenger booking; mutated by accept and status-update
/// operations; never deleted. The quote fields (`distance_km`, `fare`,
/// `eta_minutes`) are computed once at booking and immutable after.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: RideId,
    /// Owning passenger.
    pub passenger_id: UserId,
    /// Assigned driver; `None` exactly while the ride is pending.
    pub driver_id: Option<UserId>,
    /// Free-text pickup location, unvalidated.
    pub pickup_location: String,
    /// Free-text destination, unvalidated.
    pub destination: String,
    /// Requested vehicle class.
    pub vehicle_type: VehicleType,
    /// Simulated trip distance in km, not geographically derived.
    #[serde(rename = "distance")]
    pub distance_km: f64,
    /// Quoted fare, fixed at booking time.
    pub fare: Decimal,
    /// Quoted pickup ETA in minutes.
    #[serde(rename = "eta")]
    pub eta_minutes: u32,
    /// Lifecycle status.
    pub status: RideStatus,
    /// Requested payment method, free text (defaults to cash).
    pub payment_method: String,
    /// Whether a payment has been recorded against this ride.
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    /// Stamped when a driver accepts.
    pub start_time: Option<DateTime<Utc>>,
    /// Stamped when the ride reaches completed.
    pub end_time: Option<DateTime<Utc>>,
}

/// A ride with the involved users' public profiles attached, as served
/// by the ride listing.
#[derive(Debug, Clone, Serialize)]
pub struct RideWithParties {
    #[serde(flatten)]
    pub ride: Ride,
    pub passenger: Option<UserProfile>,
    pub driver: Option<UserProfile>,
}
