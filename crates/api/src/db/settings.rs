//! Settings repository.

use serde::Deserialize;

use super::{Db, RepositoryError};
use crate::models::Settings;

/// Partial update to the settings singleton; `None` leaves the stored
/// value untouched. Doubles as the `PUT /admin/settings` request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub email_notifications: Option<bool>,
    pub theme: Option<String>,
}

/// Repository for the process-wide settings singleton.
pub struct SettingsRepository<'a> {
    db: &'a Db,
}

impl<'a> SettingsRepository<'a> {
    #[must_use]
    pub(super) const fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Current settings.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn get(&self) -> Result<Settings, RepositoryError> {
        let store = self.db.read()?;
        Ok(store.settings.clone())
    }

    /// Apply a partial update and return the resulting settings.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Poisoned` if the lock is poisoned.
    pub fn update(&self, update: SettingsUpdate) -> Result<Settings, RepositoryError> {
        let mut store = self.db.write()?;
        if let Some(email_notifications) = update.email_notifications {
            store.settings.email_notifications = email_notifications;
        }
        if let Some(theme) = update.theme {
            store.settings.theme = theme;
        }
        Ok(store.settings.clone())
    }
}
