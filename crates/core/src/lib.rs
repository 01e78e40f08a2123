//! Diwai Fox Core - Shared types library.
//!
//! This crate provides common types used across all Diwai Fox components:
//! - `api` - The ride-hailing HTTP service
//! - `integration-tests` - Black-box API tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! HTTP, no storage access. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, roles, and statuses
//! - [`fare`] - The pure fare table mapping vehicle class and distance to a price

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fare;
pub mod types;

pub use types::*;
