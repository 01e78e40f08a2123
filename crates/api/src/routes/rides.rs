//! Ride booking and lifecycle handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use diwai_core::{PaymentStatus, RideId, RideStatus, VehicleType};

use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::middleware::CurrentUser;
use crate::models::{Ride, RideWithParties};
use crate::services::pricing::PricingService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRideRequest {
    pub pickup_location: Option<String>,
    pub destination: Option<String>,
    pub vehicle_type: Option<String>,
    pub payment_method: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RideResponse {
    pub message: String,
    pub ride: Ride,
}

/// `POST /rides`
///
/// Books a ride for the caller. The distance and ETA come from the
/// injected estimator and the fare from the vehicle's rate table.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<CreateRideRequest>,
) -> Result<(StatusCode, axum::Json<RideResponse>)> {
    let (Some(pickup_location), Some(destination), Some(vehicle_type)) = (
        body.pickup_location.filter(|v| !v.is_empty()),
        body.destination.filter(|v| !v.is_empty()),
        body.vehicle_type.filter(|v| !v.is_empty()),
    ) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let vehicle_type = VehicleType::from(vehicle_type);
    let quote = PricingService::new(state.estimator()).quote(
        &vehicle_type,
        &pickup_location,
        &destination,
    );

    let ride = state.db().rides().insert(Ride {
        id: RideId::generate(),
        passenger_id: user.id,
        driver_id: None,
        pickup_location,
        destination,
        vehicle_type,
        distance_km: quote.distance_km,
        fare: quote.fare,
        eta_minutes: quote.eta_minutes,
        status: RideStatus::Pending,
        payment_method: body.payment_method.unwrap_or_else(|| "cash".to_string()),
        payment_status: PaymentStatus::Pending,
        created_at: Utc::now(),
        start_time: None,
        end_time: None,
    })?;

    tracing::info!(ride = %ride.id, passenger = %user.id, "ride booked");
    Ok((
        StatusCode::CREATED,
        axum::Json(RideResponse {
            message: "Ride booked successfully".to_string(),
            ride,
        }),
    ))
}

/// `GET /rides`
///
/// Lists the rides the caller may see, with passenger and driver
/// profiles attached.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<axum::Json<serde_json::Value>> {
    let rides: Vec<RideWithParties> = state.db().rides().visible_to(user.id, user.role)?;
    Ok(axum::Json(serde_json::json!({ "rides": rides })))
}

/// `GET /rides/{id}`
pub async fn show(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<RideId>,
) -> Result<axum::Json<serde_json::Value>> {
    let ride = state
        .db()
        .rides()
        .get(id)?
        .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

    let involved = ride.passenger_id == user.id || ride.driver_id == Some(user.id);
    if !user.role.is_admin() && !involved {
        return Err(AppError::Forbidden("Access denied".to_string()));
    }

    Ok(axum::Json(serde_json::json!({ "ride": ride })))
}

/// `PUT /rides/{id}/accept`
///
/// Driver claims a pending ride. The availability check and the
/// assignment are atomic, so racing drivers cannot both win.
pub async fn accept(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<RideId>,
) -> Result<axum::Json<RideResponse>> {
    if !user.role.is_driver() {
        return Err(AppError::Forbidden(
            "Only drivers can accept rides".to_string(),
        ));
    }

    let ride = state
        .db()
        .rides()
        .accept(id, user.id, Utc::now())
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound("Ride not found".to_string())
            }
            other => AppError::from(other),
        })?;

    tracing::info!(ride = %ride.id, driver = %user.id, "ride accepted");
    Ok(axum::Json(RideResponse {
        message: "Ride accepted".to_string(),
        ride,
    }))
}

/// `PUT /rides/{id}/status`
///
/// Moves a ride to a new status. Allowed for admins and the assigned
/// driver; completing a ride credits the driver's earnings.
pub async fn set_status(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<RideId>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<axum::Json<RideResponse>> {
    let status: RideStatus = body
        .status
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation("Missing required fields".to_string()))?
        .parse()
        .map_err(|_| AppError::Validation("Invalid status".to_string()))?;

    let ride = state
        .db()
        .rides()
        .get(id)?
        .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

    let assigned_driver = user.role.is_driver() && ride.driver_id == Some(user.id);
    if !user.role.is_admin() && !assigned_driver {
        return Err(AppError::Forbidden("Access denied".to_string()));
    }

    let ride = state.db().rides().set_status(id, status, Utc::now())?;
    tracing::info!(ride = %ride.id, status = %ride.status, "ride status updated");
    Ok(axum::Json(RideResponse {
        message: "Ride status updated".to_string(),
        ride,
    }))
}
