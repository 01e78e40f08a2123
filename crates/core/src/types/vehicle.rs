//! Vehicle class requested for a ride.

use serde::{Deserialize, Serialize};

/// The vehicle class a passenger requests (or a driver operates).
///
/// Any non-empty string is accepted; only `sedan` and `suv` carry their
/// own tariff, everything else (vans included) falls back to the base
/// rate. Keeping the raw string preserves whatever class the client
/// sent rather than collapsing unknown classes into a catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleType(String);

impl VehicleType {
    /// Wrap a vehicle class string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The class as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Per-kilometre rate in monetary units for this class.
    ///
    /// `sedan` = 2.0, `suv` = 3.0, anything else = 1.5.
    #[must_use]
    pub fn per_km_rate(&self) -> f64 {
        match self.0.as_str() {
            "sedan" => 2.0,
            "suv" => 3.0,
            _ => 1.5,
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VehicleType {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for VehicleType {
    fn from(s: String) -> Self {
        Self(s)
    }
}
