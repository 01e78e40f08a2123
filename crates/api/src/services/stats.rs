//! Admin dashboard aggregator.
//!
//! A pure read-side reducer over a snapshot of the store. Revenue is
//! the sum of every payment amount regardless of ride linkage or
//! duplicate submissions.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use diwai_core::{AccountStatus, RideStatus, Role};

use crate::models::{Payment, Ride, User};

/// The numbers shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_rides: usize,
    pub completed_rides: usize,
    /// Rides currently in progress.
    pub active_rides: usize,
    pub total_revenue: Decimal,
    pub total_drivers: usize,
    pub online_drivers: usize,
    pub total_passengers: usize,
    /// Rides created on the given calendar day.
    pub today_rides: usize,
}

impl DashboardStats {
    /// Reduce a store snapshot into dashboard numbers. `today` is the
    /// server's local calendar date; ride creation times are compared
    /// against it in local time.
    #[must_use]
    pub fn compute(users: &[User], rides: &[Ride], payments: &[Payment], today: NaiveDate) -> Self {
        Self {
            total_rides: rides.len(),
            completed_rides: rides
                .iter()
                .filter(|r| r.status == RideStatus::Completed)
                .count(),
            active_rides: rides
                .iter()
                .filter(|r| r.status == RideStatus::InProgress)
                .count(),
            total_revenue: payments.iter().map(|p| p.amount).sum(),
            total_drivers: users.iter().filter(|u| u.role == Role::Driver).count(),
            online_drivers: users
                .iter()
                .filter(|u| u.role == Role::Driver && u.status == AccountStatus::Online)
                .count(),
            total_passengers: users.iter().filter(|u| u.role == Role::Passenger).count(),
            today_rides: rides
                .iter()
                .filter(|r| r.created_at.with_timezone(&Local).date_naive() == today)
                .count(),
        }
    }
}
