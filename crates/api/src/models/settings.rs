//! Process-wide application settings.

use serde::Serialize;

/// Mutable singleton settings, admin-only and volatile: a restart
/// resets them to the defaults below.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub email_notifications: bool,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            theme: "gold".to_string(),
        }
    }
}
