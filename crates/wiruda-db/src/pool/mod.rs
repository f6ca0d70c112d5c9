//! Database connection pool management

mod postgres;

pub use postgres::{apply_schema, create_lazy_pool, create_pool, ping, PoolConfig};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
