//! Integration test harness for the Diwai Fox API.
//!
//! Each test spawns a fresh server on an ephemeral port with its own
//! empty in-memory store (plus the seeded admin) and drives it over
//! real HTTP with `reqwest`. The distance estimator is pinned to a
//! fixed route so fares are exact.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use reqwest::Client;
use serde_json::{Value, json};
use uuid::Uuid;

use diwai_api::config::Config;
use diwai_api::routes;
use diwai_api::services::auth::AuthService;
use diwai_api::services::pricing::FixedRoute;
use diwai_api::state::AppState;

/// The fixed route every test server uses unless it asks for another:
/// 10 km, 7 minutes to pickup.
pub const DEFAULT_ROUTE: FixedRoute = FixedRoute {
    distance_km: 10.0,
    eta_minutes: 7,
};

/// A running test server and a client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Spawn a server with the default fixed route.
    pub async fn spawn() -> Self {
        Self::spawn_with_route(DEFAULT_ROUTE).await
    }

    /// Spawn a server with a specific fixed route.
    pub async fn spawn_with_route(route: FixedRoute) -> Self {
        let state = AppState::with_estimator(Config::default(), route);
        AuthService::new(state.db(), state.tokens())
            .seed_admin(state.config())
            .expect("Failed to seed admin account");

        let app = routes::router(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server crashed");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// A fresh unique email address.
    #[must_use]
    pub fn unique_email(prefix: &str) -> String {
        format!("{prefix}-{}@example.com", Uuid::new_v4())
    }

    /// Register a user and return `(token, user)`.
    pub async fn register(&self, email: &str, role: &str) -> (String, Value) {
        let mut body = json!({
            "email": email,
            "password": "hunter22",
            "name": "Test User",
            "phone": "+675-555-0000",
            "role": role,
        });
        if role == "driver" {
            body["vehicleType"] = json!("sedan");
            body["licensePlate"] = json!("BAA-123");
        }

        let resp = self
            .client
            .post(format!("{}/auth/register", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("register request failed");
        assert_eq!(resp.status(), 201, "registration should succeed");

        let body: Value = resp.json().await.expect("register body");
        (
            body["token"].as_str().expect("token").to_string(),
            body["user"].clone(),
        )
    }

    /// Login and return the token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let resp = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed");
        assert_eq!(resp.status(), 200, "login should succeed");

        let body: Value = resp.json().await.expect("login body");
        body["token"].as_str().expect("token").to_string()
    }

    /// Login as the seeded admin.
    pub async fn admin_token(&self) -> String {
        self.login("admin@diwaifox.com", "admin123").await
    }

    /// Book a ride as the given user and return the ride JSON.
    pub async fn book_ride(&self, token: &str, vehicle_type: &str) -> Value {
        let resp = self
            .client
            .post(format!("{}/rides", self.base_url))
            .bearer_auth(token)
            .json(&json!({
                "pickupLocation": "Waigani",
                "destination": "Ela Beach",
                "vehicleType": vehicle_type,
            }))
            .send()
            .await
            .expect("book ride request failed");
        assert_eq!(resp.status(), 201, "booking should succeed");

        let body: Value = resp.json().await.expect("ride body");
        body["ride"].clone()
    }

    /// GET a path with a bearer token.
    pub async fn get(&self, token: &str, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .expect("GET request failed")
    }

    /// PUT a JSON body with a bearer token.
    pub async fn put(&self, token: &str, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(format!("{}{path}", self.base_url))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("PUT request failed")
    }

    /// POST a JSON body with a bearer token.
    pub async fn post(&self, token: &str, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }
}

/// Extract the `error` message from an error response body.
pub async fn error_message(resp: reqwest::Response) -> String {
    let body: Value = resp.json().await.expect("error body");
    body["error"].as_str().expect("error field").to_string()
}
