//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use wiruda_common::{AppConfig, AppError, JwtService};
use wiruda_db::{
    apply_schema, create_pool, HttpImageStorage, PgCredentialRepository, PgDevotionRepository,
    PgInquiryRepository, PgPool, PgPrayerRepository, PgProfileRepository, PgReactionRepository,
    PgSettingsRepository, PgSupporterRepository, PoolConfig,
};
use wiruda_service::ServiceContextBuilder;

use crate::middleware::{apply_middleware, security_headers};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let router = apply_middleware(create_router(), &state)?
        .merge(health_routes())
        .layer(from_fn(security_headers));
    Ok(router.with_state(state))
}

/// Wire repositories and services over an existing pool
pub fn build_app_state(pool: PgPool, config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let mut builder = ServiceContextBuilder::new()
        .profile_repo(Arc::new(PgProfileRepository::new(pool.clone())))
        .credential_repo(Arc::new(PgCredentialRepository::new(pool.clone())))
        .devotion_repo(Arc::new(PgDevotionRepository::new(pool.clone())))
        .prayer_repo(Arc::new(PgPrayerRepository::new(pool.clone())))
        .reaction_repo(Arc::new(PgReactionRepository::new(pool.clone())))
        .supporter_repo(Arc::new(PgSupporterRepository::new(pool.clone())))
        .inquiry_repo(Arc::new(PgInquiryRepository::new(pool.clone())))
        .settings_repo(Arc::new(PgSettingsRepository::new(pool.clone())))
        .storage_bucket(config.storage.bucket.clone())
        .jwt_service(jwt_service);

    match HttpImageStorage::from_config(&config.storage)
        .map_err(|e| AppError::Config(e.to_string()))?
    {
        Some(storage) => {
            info!(bucket = %config.storage.bucket, "Image storage configured");
            builder = builder.image_storage(Arc::new(storage));
        }
        None => warn!("STORAGE_URL or STORAGE_SERVICE_KEY not set, image cleanup disabled"),
    }

    let service_context = builder
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Connect to the database, apply the schema and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    apply_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    build_app_state(pool, config)
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}
