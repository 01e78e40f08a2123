//! Admin dashboard and settings handlers.

use axum::extract::State;
use chrono::Local;

use diwai_core::Role;

use crate::db::SettingsUpdate;
use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::middleware::CurrentUser;
use crate::services::stats::DashboardStats;
use crate::state::AppState;

fn require_admin(role: Role) -> Result<()> {
    if role.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Admin access required".to_string()))
    }
}

/// `GET /admin/stats`
///
/// Computes dashboard numbers from a single consistent snapshot of the
/// store.
pub async fn stats(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<axum::Json<serde_json::Value>> {
    require_admin(user.role)?;

    let today = Local::now().date_naive();
    let stats = state
        .db()
        .with_snapshot(|users, rides, payments| {
            DashboardStats::compute(users, rides, payments, today)
        })?;
    Ok(axum::Json(serde_json::json!({ "stats": stats })))
}

/// `GET /admin/settings`
pub async fn get_settings(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<axum::Json<serde_json::Value>> {
    require_admin(user.role)?;
    let settings = state.db().settings().get()?;
    Ok(axum::Json(serde_json::json!({ "settings": settings })))
}

/// `PUT /admin/settings`
///
/// Partial update; absent fields keep their stored values.
pub async fn update_settings(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(update): Json<SettingsUpdate>,
) -> Result<axum::Json<serde_json::Value>> {
    require_admin(user.role)?;
    let settings = state.db().settings().update(update)?;
    Ok(axum::Json(serde_json::json!({
        "message": "Settings updated",
        "settings": settings,
    })))
}
