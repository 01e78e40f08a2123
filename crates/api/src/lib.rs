//! Diwai Fox API library.
//!
//! This crate provides the ride-hailing service as a library, allowing
//! it to be driven by the `diwai-api` binary and exercised directly by
//! the integration-tests crate.
//!
//! # Architecture
//!
//! - Axum handlers in [`routes`], gated by the bearer-token extractor in
//!   [`middleware`]
//! - All state lives in the in-memory store behind [`db::Db`]; handlers
//!   only ever reach it through repository types, so a persistent
//!   backend could be swapped in without touching them
//! - Randomized trip synthesis is injected via
//!   [`services::pricing::DistanceEstimator`] so tests can pin distances

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
