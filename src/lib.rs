//! Bearer-token authentication gate for an axum service.
//!
//! - `services::auth` holds the token codec, principal resolution, the gate decision
//!   and the refresh exchange
//! - `middleware::auth::access` wires the gate into a Router
//! - `api::v1` exposes `/auth/refresh` and an authenticated `/me`
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
pub mod validation;
