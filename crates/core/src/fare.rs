//! The fare table.
//!
//! Pure pricing arithmetic: no randomness and no I/O. Distance synthesis
//! and ETA draws live in the api crate's pricing service, which feeds
//! its numbers through here.

use rust_decimal::Decimal;

use crate::types::VehicleType;

/// Flat base fare in monetary units, charged on every ride.
pub const BASE_FARE: f64 = 5.0;

/// Lower bound of the simulated trip distance, inclusive.
pub const MIN_DISTANCE_KM: f64 = 2.0;

/// Upper bound of the simulated trip distance, exclusive.
pub const MAX_DISTANCE_KM: f64 = 22.0;

/// Shortest ETA the estimator will quote, in minutes.
pub const MIN_ETA_MINUTES: u32 = 5;

/// Longest ETA the estimator will quote, in minutes.
pub const MAX_ETA_MINUTES: u32 = 20;

/// Compute the fare for a trip: base fare plus distance times the
/// class tariff, rounded to 2 decimal places.
///
/// The result is exact decimal currency, not a float.
///
/// # Example
///
/// ```
/// use diwai_core::{fare, VehicleType};
/// use rust_decimal::Decimal;
///
/// let fare = fare::fare_for(&VehicleType::from("suv"), 10.0);
/// assert_eq!(fare, Decimal::new(3500, 2)); // 5 + 10 * 3.0
/// ```
#[must_use]
pub fn fare_for(vehicle: &VehicleType, distance_km: f64) -> Decimal {
    let amount = BASE_FARE + distance_km * vehicle.per_km_rate();
    // Round half away from zero at the second decimal, then build an
    // exact Decimal from whole cents.
    #[allow(clippy::cast_possible_truncation)] // fares are far below i64 range
    let cents = (amount * 100.0).round() as i64;
    Decimal::new(cents, 2)
}
