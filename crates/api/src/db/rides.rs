//! Ride repository - the ride ledger.
//!
//! Acceptance and status transitions run entirely under the store's
//! write lock, so two drivers racing for the same pending ride cannot
//! both win: the first writer flips the status and the second sees the
//! conflict.

use chrono::{DateTime, Utc};

use diwai_core::{RideId, RideStatus, Role, UserId};

use super::{Db, RepositoryError};
use crate::models::{Ride, RideWithParties, UserProfile};

/// Repository for ride records.
pub struct RideRepository<'a> {
    db: &'a Db,
}

impl<'a> RideRepository<'a> {
    #[must_use]
    pub(super) const fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Append a freshly booked ride to the ledger.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn insert(&self, ride: Ride) -> Result<Ride, RepositoryError> {
        let mut store = self.db.write()?;
        store.rides.push(ride.clone());
        Ok(ride)
    }

    /// Look up a ride by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn get(&self, id: RideId) -> Result<Option<Ride>, RepositoryError> {
        let store = self.db.read()?;
        Ok(store.rides.iter().find(|r| r.id == id).cloned())
    }

    /// The rides a caller may see, with passenger/driver profiles
    /// attached:
    ///
    /// - admins see everything
    /// - drivers see their own rides plus every pending ride
    /// - passengers see only their own rides
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn visible_to(
        &self,
        caller: UserId,
        role: Role,
    ) -> Result<Vec<RideWithParties>, RepositoryError> {
        let store = self.db.read()?;
        let rides = store.rides.iter().filter(|ride| match role {
            Role::Admin => true,
            Role::Driver => ride.driver_id == Some(caller) || ride.status == RideStatus::Pending,
            Role::Passenger => ride.passenger_id == caller,
        });

        let profile_of = |id: UserId| {
            store
                .users
                .iter()
                .find(|u| u.id == id)
                .map(UserProfile::from)
        };

        Ok(rides
            .map(|ride| RideWithParties {
                ride: ride.clone(),
                passenger: profile_of(ride.passenger_id),
                driver: ride.driver_id.and_then(profile_of),
            })
            .collect())
    }

    /// Assign a driver to a pending ride.
    ///
    /// The check and the assignment happen under one write guard, so
    /// only one of two concurrent acceptances can succeed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ride does not exist,
    /// `RepositoryError::Conflict` if it is no longer pending.
    pub fn accept(
        &self,
        id: RideId,
        driver: UserId,
        now: DateTime<Utc>,
    ) -> Result<Ride, RepositoryError> {
        let mut store = self.db.write()?;
        let ride = store
            .rides
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if ride.status != RideStatus::Pending {
            return Err(RepositoryError::Conflict(
                "Ride is not available".to_string(),
            ));
        }

        ride.driver_id = Some(driver);
        ride.status = RideStatus::Accepted;
        ride.start_time = Some(now);
        Ok(ride.clone())
    }

    /// Move a ride to the given status.
    ///
    /// Transitions are deliberately not validated against the lifecycle
    /// graph (matching the product's current behaviour); only the
    /// completed transition has side effects: the end time is stamped
    /// and the assigned driver is credited the full fare, whether or
    /// not a payment was ever recorded.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ride does not exist.
    pub fn set_status(
        &self,
        id: RideId,
        status: RideStatus,
        now: DateTime<Utc>,
    ) -> Result<Ride, RepositoryError> {
        let mut store = self.db.write()?;
        let ride = store
            .rides
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepositoryError::NotFound)?;

        ride.status = status;

        let credit = if status == RideStatus::Completed {
            ride.end_time = Some(now);
            ride.driver_id.map(|driver_id| (driver_id, ride.fare))
        } else {
            None
        };
        let updated = ride.clone();

        // Same write guard: the status flip and the earnings credit are
        // one atomic step.
        if let Some((driver_id, fare)) = credit {
            if let Some(driver) = store.users.iter_mut().find(|u| u.id == driver_id) {
                driver.earnings += fare;
            }
        }

        Ok(updated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use diwai_core::{AccountStatus, Email, PaymentStatus, VehicleType};
    use rust_decimal::Decimal;

    use crate::models::User;

    fn seed_user(db: &Db, email: &str, role: Role) -> User {
        db.users()
            .insert(User {
                id: UserId::generate(),
                email: Email::parse(email).unwrap(),
                password_hash: "$argon2id$fake".to_string(),
                name: "Test".to_string(),
                phone: "+675-555-0000".to_string(),
                role,
                vehicle_type: None,
                license_plate: None,
                status: AccountStatus::Active,
                earnings: Decimal::ZERO,
                rating: 5.0,
                created_at: Utc::now(),
            })
            .unwrap()
    }

    fn seed_ride(db: &Db, passenger: UserId, fare_cents: i64) -> Ride {
        db.rides()
            .insert(Ride {
                id: RideId::generate(),
                passenger_id: passenger,
                driver_id: None,
                pickup_location: "A".to_string(),
                destination: "B".to_string(),
                vehicle_type: VehicleType::from("sedan"),
                distance_km: 10.0,
                fare: Decimal::new(fare_cents, 2),
                eta_minutes: 10,
                status: RideStatus::Pending,
                payment_method: "cash".to_string(),
                payment_status: PaymentStatus::Pending,
                created_at: Utc::now(),
                start_time: None,
                end_time: None,
            })
            .unwrap()
    }

    #[test]
    fn test_accept_assigns_driver_and_stamps_start() {
        let db = Db::new();
        let passenger = seed_user(&db, "p@example.com", Role::Passenger);
        let driver = seed_user(&db, "d@example.com", Role::Driver);
        let ride = seed_ride(&db, passenger.id, 2500);

        let now = Utc::now();
        let accepted = db.rides().accept(ride.id, driver.id, now).unwrap();
        assert_eq!(accepted.status, RideStatus::Accepted);
        assert_eq!(accepted.driver_id, Some(driver.id));
        assert_eq!(accepted.start_time, Some(now));
    }

    #[test]
    fn test_second_acceptance_conflicts() {
        let db = Db::new();
        let passenger = seed_user(&db, "p@example.com", Role::Passenger);
        let first = seed_user(&db, "d1@example.com", Role::Driver);
        let second = seed_user(&db, "d2@example.com", Role::Driver);
        let ride = seed_ride(&db, passenger.id, 2500);

        db.rides().accept(ride.id, first.id, Utc::now()).unwrap();
        let err = db.rides().accept(ride.id, second.id, Utc::now()).unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));

        // The first driver keeps the ride
        let stored = db.rides().get(ride.id).unwrap().unwrap();
        assert_eq!(stored.driver_id, Some(first.id));
    }

    #[test]
    fn test_accept_unknown_ride_is_not_found() {
        let db = Db::new();
        let driver = seed_user(&db, "d@example.com", Role::Driver);
        let err = db
            .rides()
            .accept(RideId::generate(), driver.id, Utc::now())
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn test_completion_credits_exactly_the_assigned_driver() {
        let db = Db::new();
        let passenger = seed_user(&db, "p@example.com", Role::Passenger);
        let driver = seed_user(&db, "d1@example.com", Role::Driver);
        let other = seed_user(&db, "d2@example.com", Role::Driver);
        let ride = seed_ride(&db, passenger.id, 2675);

        db.rides().accept(ride.id, driver.id, Utc::now()).unwrap();
        let completed = db
            .rides()
            .set_status(ride.id, RideStatus::Completed, Utc::now())
            .unwrap();

        assert!(completed.end_time.is_some());
        let credited = db.users().get_by_id(driver.id).unwrap().unwrap();
        assert_eq!(credited.earnings, Decimal::new(2675, 2));
        let untouched = db.users().get_by_id(other.id).unwrap().unwrap();
        assert_eq!(untouched.earnings, Decimal::ZERO);
    }

    #[test]
    fn test_completion_without_driver_credits_nobody() {
        let db = Db::new();
        let passenger = seed_user(&db, "p@example.com", Role::Passenger);
        let ride = seed_ride(&db, passenger.id, 2500);

        // No driver assigned; still completes (transitions are unchecked)
        let completed = db
            .rides()
            .set_status(ride.id, RideStatus::Completed, Utc::now())
            .unwrap();
        assert_eq!(completed.status, RideStatus::Completed);
        assert!(completed.driver_id.is_none());
    }

    #[test]
    fn test_non_completed_transition_has_no_side_effects() {
        let db = Db::new();
        let passenger = seed_user(&db, "p@example.com", Role::Passenger);
        let driver = seed_user(&db, "d@example.com", Role::Driver);
        let ride = seed_ride(&db, passenger.id, 2500);
        db.rides().accept(ride.id, driver.id, Utc::now()).unwrap();

        let updated = db
            .rides()
            .set_status(ride.id, RideStatus::InProgress, Utc::now())
            .unwrap();
        assert!(updated.end_time.is_none());
        let stored = db.users().get_by_id(driver.id).unwrap().unwrap();
        assert_eq!(stored.earnings, Decimal::ZERO);
    }

    #[test]
    fn test_driver_sees_own_and_pending_only() {
        let db = Db::new();
        let passenger = seed_user(&db, "p@example.com", Role::Passenger);
        let me = seed_user(&db, "me@example.com", Role::Driver);
        let rival = seed_user(&db, "rival@example.com", Role::Driver);

        let mine = seed_ride(&db, passenger.id, 2500);
        db.rides().accept(mine.id, me.id, Utc::now()).unwrap();
        let theirs = seed_ride(&db, passenger.id, 2500);
        db.rides().accept(theirs.id, rival.id, Utc::now()).unwrap();
        let open = seed_ride(&db, passenger.id, 2500);

        let visible = db.rides().visible_to(me.id, Role::Driver).unwrap();
        let ids: Vec<RideId> = visible.iter().map(|r| r.ride.id).collect();
        assert!(ids.contains(&mine.id));
        assert!(ids.contains(&open.id));
        assert!(!ids.contains(&theirs.id));
    }

    #[test]
    fn test_passenger_sees_only_own_rides() {
        let db = Db::new();
        let me = seed_user(&db, "me@example.com", Role::Passenger);
        let other = seed_user(&db, "other@example.com", Role::Passenger);
        let mine = seed_ride(&db, me.id, 2500);
        seed_ride(&db, other.id, 2500);

        let visible = db.rides().visible_to(me.id, Role::Passenger).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].ride.id, mine.id);
    }

    #[test]
    fn test_admin_sees_everything_with_parties() {
        let db = Db::new();
        let admin = seed_user(&db, "admin@example.com", Role::Admin);
        let passenger = seed_user(&db, "p@example.com", Role::Passenger);
        let driver = seed_user(&db, "d@example.com", Role::Driver);
        let ride = seed_ride(&db, passenger.id, 2500);
        db.rides().accept(ride.id, driver.id, Utc::now()).unwrap();
        seed_ride(&db, passenger.id, 2500);

        let visible = db.rides().visible_to(admin.id, Role::Admin).unwrap();
        assert_eq!(visible.len(), 2);
        let accepted = visible.iter().find(|r| r.ride.id == ride.id).unwrap();
        assert_eq!(
            accepted.passenger.as_ref().map(|p| p.id),
            Some(passenger.id)
        );
        assert_eq!(accepted.driver.as_ref().map(|d| d.id), Some(driver.id));
    }
}
