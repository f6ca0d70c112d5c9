//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod account;
pub mod admin;
pub mod auth;
pub mod devotions;
pub mod exports;
pub mod health;
pub mod prayers;
pub mod settings;
pub mod support;

use axum::http::Uri;
use wiruda_common::AppError;

use crate::response::ApiError;

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::App(AppError::not_found(uri.path()))
}
