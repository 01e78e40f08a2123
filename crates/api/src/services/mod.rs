//! Business services on top of the repositories.

pub mod auth;
pub mod pricing;
pub mod stats;

pub use auth::{AuthError, AuthService, Claims, TokenSigner};
pub use pricing::{DistanceEstimator, FareQuote, FixedRoute, PricingService, SimulatedRoute};
pub use stats::DashboardStats;
