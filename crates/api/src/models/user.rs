//! User domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use diwai_core::{AccountStatus, Email, Role, UserId, VehicleType};

/// A user record as held by the store.
///
/// Deliberately not `Serialize`: the password hash must never reach the
/// wire. Responses go through [`UserProfile`].
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Email address, unique across the store (case-sensitive match).
    pub email: Email,
    /// Argon2 password hash. Plaintext is never retained.
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Phone number, free text.
    pub phone: String,
    /// Account role.
    pub role: Role,
    /// Vehicle class; present only for drivers.
    pub vehicle_type: Option<VehicleType>,
    /// Licence plate; present only for drivers.
    pub license_plate: Option<String>,
    /// Availability: drivers toggle online/offline, others stay active.
    pub status: AccountStatus,
    /// Accumulated earnings; credited on ride completion, driver-only.
    pub earnings: Decimal,
    /// Average rating. Currently fixed at the 5.0 default.
    pub rating: f64,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Public view of a user, safe for any response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub vehicle_type: Option<VehicleType>,
    pub license_plate: Option<String>,
    pub status: AccountStatus,
    pub earnings: Decimal,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            vehicle_type: user.vehicle_type.clone(),
            license_plate: user.license_plate.clone(),
            status: user.status,
            earnings: user.earnings,
            rating: user.rating,
            created_at: user.created_at,
        }
    }
}
