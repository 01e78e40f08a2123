//! Profile and user administration handlers.

use axum::extract::State;
use serde::{Deserialize, Serialize};

use diwai_core::{AccountStatus, VehicleType};

use crate::db::ProfileUpdate;
use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::middleware::CurrentUser;
use crate::models::UserProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub vehicle_type: Option<String>,
    pub license_plate: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DriverStatusRequest {
    pub status: Option<AccountStatus>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: UserProfile,
}

/// `GET /users` (admin)
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<axum::Json<serde_json::Value>> {
    if !user.role.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    let users: Vec<UserProfile> = state
        .db()
        .users()
        .list()?
        .iter()
        .map(UserProfile::from)
        .collect();
    Ok(axum::Json(serde_json::json!({ "users": users })))
}

/// `GET /users/me`
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<axum::Json<serde_json::Value>> {
    let profile = state
        .db()
        .users()
        .get_by_id(user.id)?
        .map(|u| UserProfile::from(&u))
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(axum::Json(serde_json::json!({ "user": profile })))
}

/// `PUT /users/me`
///
/// Updates the caller's own profile. Vehicle fields only stick for
/// drivers.
pub async fn update_me(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<axum::Json<ProfileResponse>> {
    let updated = state
        .db()
        .users()
        .update_profile(
            user.id,
            ProfileUpdate {
                name: body.name,
                phone: body.phone,
                vehicle_type: body.vehicle_type.map(VehicleType::from),
                license_plate: body.license_plate,
            },
        )
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound("User not found".to_string())
            }
            other => AppError::from(other),
        })?;

    Ok(axum::Json(ProfileResponse {
        message: "Profile updated".to_string(),
        user: UserProfile::from(&updated),
    }))
}

/// `PUT /drivers/status`
///
/// Driver toggles themselves online or offline.
pub async fn driver_status(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<DriverStatusRequest>,
) -> Result<axum::Json<ProfileResponse>> {
    if !user.role.is_driver() {
        return Err(AppError::Forbidden("Driver access required".to_string()));
    }

    let status = body
        .status
        .ok_or_else(|| AppError::Validation("Missing required fields".to_string()))?;

    let updated = state
        .db()
        .users()
        .set_status(user.id, status)
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound("User not found".to_string())
            }
            other => AppError::from(other),
        })?;

    tracing::info!(driver = %user.id, status = ?updated.status, "driver status updated");
    Ok(axum::Json(ProfileResponse {
        message: "Status updated".to_string(),
        user: UserProfile::from(&updated),
    }))
}
