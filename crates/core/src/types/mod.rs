//! Core type definitions.
//!
//! These are newtype wrappers and closed enums that provide type safety
//! throughout the application:
//!
//! - ID types prevent mixing identifiers from different entities
//! - [`Email`] guarantees basic structural validity
//! - [`Role`], [`RideStatus`], [`AccountStatus`], [`PaymentStatus`] replace
//!   stringly-typed dispatch with exhaustive matches
//! - [`VehicleType`] carries the requested vehicle class and its tariff

mod email;
mod id;
mod role;
mod status;
mod vehicle;

pub use email::{Email, EmailError};
pub use id::{PaymentId, RideId, UserId};
pub use role::Role;
pub use status::{AccountStatus, PaymentStatus, RideStatus};
pub use vehicle::VehicleType;
