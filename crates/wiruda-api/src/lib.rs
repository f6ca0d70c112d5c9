//! # wiruda-api
//!
//! HTTP API server built with the Axum framework.
//!
//! Requests pass the route gate (origin check and protected-page
//! redirects) before reaching the handlers, which resolve the caller's
//! profile and delegate to `wiruda-service`.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{build_app_state, create_app, create_app_state, run};
pub use state::AppState;
