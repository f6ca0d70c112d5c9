//! # wiruda-db
//!
//! Persistence layer implementing the repository traits with PostgreSQL via SQLx,
//! plus the HTTP client used to remove uploaded images from object storage.
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//! - `ImageStorage` over the storage service's HTTP API
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wiruda_db::pool::{apply_schema, create_pool, PoolConfig};
//! use wiruda_db::repositories::PgDevotionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     apply_schema(&pool).await?;
//!     let devotions = PgDevotionRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod storage;

// Re-export commonly used types
pub use pool::{apply_schema, create_lazy_pool, create_pool, ping, PgPool, PoolConfig};
pub use repositories::{
    PgCredentialRepository, PgDevotionRepository, PgInquiryRepository, PgPrayerRepository,
    PgProfileRepository, PgReactionRepository, PgSettingsRepository, PgSupporterRepository,
};
pub use storage::HttpImageStorage;
