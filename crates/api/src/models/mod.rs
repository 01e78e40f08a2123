//! Domain models.
//!
//! These are the records held by the in-memory store plus the public
//! serialization views derived from them. Wire format is camelCase JSON.

pub mod payment;
pub mod ride;
pub mod settings;
pub mod user;

pub use payment::Payment;
pub use ride::{Ride, RideWithParties};
pub use settings::Settings;
pub use user::{User, UserProfile};
