//! # wiruda-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! telemetry, and content helpers (HTML sanitizing, excerpts, storage URLs).

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, Claims, JwtService, TokenPair,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, SiteConfig, StorageConfig,
};
pub use content::{escape_like, excerpt, sanitize_html, strip_tags, StorageObject};
pub use error::{AppError, AppResult, GENERIC_FAILURE_MESSAGE};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
