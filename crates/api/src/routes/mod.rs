//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check (unauthenticated)
//!
//! # Auth
//! POST /auth/register          - Register, returns user + token
//! POST /auth/login             - Login, returns user + token
//! POST /auth/reset-password    - Reset stub (no email is sent)
//!
//! # Rides
//! POST /rides                  - Book a ride (any authenticated user)
//! GET  /rides                  - List rides visible to the caller
//! GET  /rides/{id}             - Fetch one ride (admin/passenger/driver)
//! PUT  /rides/{id}/accept      - Driver accepts a pending ride
//! PUT  /rides/{id}/status      - Assigned driver or admin moves status
//!
//! # Payments
//! POST /payments               - Record a payment (ride's passenger/admin)
//! GET  /payments               - List payments visible to the caller
//!
//! # Users
//! GET  /users                  - List all users (admin)
//! GET  /users/me               - Own profile
//! PUT  /users/me               - Update own profile
//! PUT  /drivers/status         - Driver toggles online/offline
//!
//! # Admin
//! GET  /admin/stats            - Dashboard statistics
//! GET  /admin/settings         - Current settings
//! PUT  /admin/settings         - Update settings
//! ```

pub mod admin;
pub mod auth;
pub mod payments;
pub mod rides;
pub mod users;

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use chrono::Utc;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/reset-password", post(auth::reset_password))
        .route("/rides", post(rides::create).get(rides::list))
        .route("/rides/{id}", get(rides::show))
        .route("/rides/{id}/accept", put(rides::accept))
        .route("/rides/{id}/status", put(rides::set_status))
        .route("/payments", post(payments::create).get(payments::list))
        .route("/users", get(users::list))
        .route("/users/me", get(users::me).put(users::update_me))
        .route("/drivers/status", put(users::driver_status))
        .route("/admin/stats", get(admin::stats))
        .route(
            "/admin/settings",
            get(admin::get_settings).put(admin::update_settings),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": Utc::now() }))
}
