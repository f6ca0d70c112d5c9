//! Axum extractors for request handling
//!
//! Custom extractors for sessions, validation, path and query parameters.

mod params;
mod session;
mod validated;

pub use params::{IdPath, QueryParams};
pub use session::{session_token, CurrentProfile, SESSION_COOKIE};
pub use validated::JsonBody;
