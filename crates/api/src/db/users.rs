//! User repository.

use diwai_core::{AccountStatus, Email, UserId, VehicleType};

use super::{Db, RepositoryError};
use crate::models::User;

/// Fields a user may change on their own profile. `None` leaves the
/// stored value untouched; the vehicle fields only apply to drivers.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub license_plate: Option<String>,
}

/// Repository for user records.
pub struct UserRepository<'a> {
    db: &'a Db,
}

impl<'a> UserRepository<'a> {
    #[must_use]
    pub(super) const fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already
    /// present (exact, case-sensitive match on the stored value).
    pub fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let mut store = self.db.write()?;
        if store.users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict(
                "User already exists".to_string(),
            ));
        }
        store.users.push(user.clone());
        Ok(user)
    }

    /// Look up a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let store = self.db.read()?;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    /// Look up a user by email (exact match).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let store = self.db.read()?;
        Ok(store.users.iter().find(|u| &u.email == email).cloned())
    }

    /// Every user in the store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let store = self.db.read()?;
        Ok(store.users.clone())
    }

    /// Apply a profile update to a user's own record. Vehicle fields
    /// are ignored unless the user is a driver.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user does not exist.
    pub fn update_profile(
        &self,
        id: UserId,
        update: ProfileUpdate,
    ) -> Result<User, RepositoryError> {
        let mut store = self.db.write()?;
        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(phone) = update.phone {
            user.phone = phone;
        }
        if user.role.is_driver() {
            if let Some(vehicle_type) = update.vehicle_type {
                user.vehicle_type = Some(vehicle_type);
            }
            if let Some(license_plate) = update.license_plate {
                user.license_plate = Some(license_plate);
            }
        }

        Ok(user.clone())
    }

    /// Set a user's availability status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user does not exist.
    pub fn set_status(
        &self,
        id: UserId,
        status: AccountStatus,
    ) -> Result<User, RepositoryError> {
        let mut store = self.db.write()?;
        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        user.status = status;
        Ok(user.clone())
    }
}
