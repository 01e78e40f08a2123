//! Fare estimation.
//!
//! The distance/ETA source is an injected collaborator: production uses
//! [`SimulatedRoute`], which draws random values because there is no
//! real routing service behind it; tests inject [`FixedRoute`] and
//! assert exact fares. The monetary arithmetic itself lives in
//! [`diwai_core::fare`] and is pure.

use rand::Rng;
use rust_decimal::Decimal;

use diwai_core::{VehicleType, fare};

/// A distance and pickup ETA for a requested trip.
#[derive(Debug, Clone, Copy)]
pub struct RouteEstimate {
    pub distance_km: f64,
    pub eta_minutes: u32,
}

/// Source of trip distances and ETAs.
pub trait DistanceEstimator: Send + Sync {
    /// Estimate the route between two free-text locations.
    fn estimate(&self, pickup: &str, destination: &str) -> RouteEstimate;
}

/// Placeholder for a real routing service: distances are drawn
/// uniformly from [2, 22) km and ETAs from [5, 20] minutes, ignoring
/// the locations entirely. Explicitly a simulation.
#[derive(Debug, Default)]
pub struct SimulatedRoute;

impl DistanceEstimator for SimulatedRoute {
    fn estimate(&self, _pickup: &str, _destination: &str) -> RouteEstimate {
        let mut rng = rand::rng();
        RouteEstimate {
            distance_km: rng.random_range(fare::MIN_DISTANCE_KM..fare::MAX_DISTANCE_KM),
            eta_minutes: rng.random_range(fare::MIN_ETA_MINUTES..=fare::MAX_ETA_MINUTES),
        }
    }
}

/// Deterministic estimator for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoute {
    pub distance_km: f64,
    pub eta_minutes: u32,
}

impl DistanceEstimator for FixedRoute {
    fn estimate(&self, _pickup: &str, _destination: &str) -> RouteEstimate {
        RouteEstimate {
            distance_km: self.distance_km,
            eta_minutes: self.eta_minutes,
        }
    }
}

/// A complete quote for a booking.
#[derive(Debug, Clone)]
pub struct FareQuote {
    /// Distance rounded to 2 decimal places, as stored on the ride.
    pub distance_km: f64,
    pub fare: Decimal,
    pub eta_minutes: u32,
}

/// Computes booking quotes from an estimator and the fare table.
pub struct PricingService<'a> {
    estimator: &'a dyn DistanceEstimator,
}

impl<'a> PricingService<'a> {
    #[must_use]
    pub const fn new(estimator: &'a dyn DistanceEstimator) -> Self {
        Self { estimator }
    }

    /// Quote a trip: estimate the route, then price it.
    ///
    /// The distance is rounded to 2 decimals before pricing so the
    /// stored distance and the fare agree.
    #[must_use]
    pub fn quote(&self, vehicle: &VehicleType, pickup: &str, destination: &str) -> FareQuote {
        let estimate = self.estimator.estimate(pickup, destination);
        let distance_km = (estimate.distance_km * 100.0).round() / 100.0;
        FareQuote {
            distance_km,
            fare: fare::fare_for(vehicle, distance_km),
            eta_minutes: estimate.eta_minutes,
        }
    }
}
