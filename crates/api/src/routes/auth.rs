//! Registration, login, and the password-reset stub.

use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use diwai_core::{Email, Role, VehicleType};

use crate::error::{AppError, Result};
use crate::extract::Json;
use crate::models::UserProfile;
use crate::services::auth::{AuthService, NewUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub vehicle_type: Option<String>,
    pub license_plate: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: Option<String>,
}

/// Token-bearing response for both register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}

/// `POST /auth/register`
///
/// Creates an account and returns a bearer token for
/// [`crate::middleware::CurrentUser`] to consume on later requests.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, axum::Json<AuthResponse>)> {
    let (Some(email), Some(password), Some(name), Some(phone), Some(role)) = (
        non_empty(body.email),
        non_empty(body.password),
        non_empty(body.name),
        non_empty(body.phone),
        non_empty(body.role),
    ) else {
        return Err(AppError::Validation("All fields are required".to_string()));
    };

    let email = Email::parse(&email).map_err(|e| AppError::Validation(e.to_string()))?;
    let role: Role = role
        .parse()
        .map_err(|_| AppError::Validation("Invalid role".to_string()))?;

    let auth = AuthService::new(state.db(), state.tokens());
    let (user, token) = auth.register(NewUser {
        email,
        password,
        name,
        phone,
        role,
        vehicle_type: body.vehicle_type.map(VehicleType::from),
        license_plate: body.license_plate,
    })?;

    Ok((
        StatusCode::CREATED,
        axum::Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token,
            user: UserProfile::from(&user),
        }),
    ))
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<axum::Json<AuthResponse>> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let auth = AuthService::new(state.db(), state.tokens());
    let (user, token) = auth.login(&email, &password)?;

    Ok(axum::Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserProfile::from(&user),
    }))
}

/// `POST /auth/reset-password`
///
/// Stub: confirms the account exists but sends nothing. Kept so the
/// client flow works end to end.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<axum::Json<serde_json::Value>> {
    let email = body
        .email
        .and_then(|raw| Email::parse(&raw).ok())
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    state
        .db()
        .users()
        .get_by_email(&email)?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(axum::Json(serde_json::json!({
        "message": "Password reset instructions sent"
    })))
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}
