//! Integration test utilities for the Wiruda server
//!
//! This crate provides helpers for running end-to-end tests against
//! the HTTP API with a real PostgreSQL database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
