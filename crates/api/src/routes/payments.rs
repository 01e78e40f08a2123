//! Payment recording handlers.

use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use diwai_core::{PaymentId, PaymentStatus, RideId};

use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::middleware::CurrentUser;
use crate::models::Payment;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub ride_id: Option<RideId>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    pub method: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub message: String,
    pub payment: Payment,
}

/// `POST /payments`
///
/// Records a payment against a ride and marks the ride paid. Only the
/// ride's passenger or an admin may submit one.
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(body): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, axum::Json<PaymentResponse>)> {
    let (Some(ride_id), Some(amount)) = (body.ride_id, body.amount) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let ride = state
        .db()
        .rides()
        .get(ride_id)?
        .ok_or_else(|| AppError::NotFound("Ride not found".to_string()))?;

    if !user.role.is_admin() && ride.passenger_id != user.id {
        return Err(AppError::Forbidden("Access denied".to_string()));
    }

    let created_at = Utc::now();
    let payment = state.db().payments().create(Payment {
        id: PaymentId::generate(),
        ride_id,
        // The submitter, not necessarily the ride's passenger: an
        // admin-recorded payment is ledgered under the admin
        passenger_id: user.id,
        amount,
        method: body.method.unwrap_or_else(|| "cash".to_string()),
        status: PaymentStatus::Completed,
        transaction_id: Payment::transaction_id_at(created_at),
        created_at,
    })?;

    tracing::info!(payment = %payment.id, ride = %ride_id, "payment recorded");
    Ok((
        StatusCode::CREATED,
        axum::Json(PaymentResponse {
            message: "Payment processed successfully".to_string(),
            payment,
        }),
    ))
}

/// `GET /payments`
///
/// Admins see the full ledger; everyone else sees their own payments.
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<axum::Json<serde_json::Value>> {
    let payments = if user.role.is_admin() {
        state.db().payments().list()?
    } else {
        state.db().payments().list_for_passenger(user.id)?
    };
    Ok(axum::Json(serde_json::json!({ "payments": payments })))
}
