//! # Chirpy DB
//!
//! The [`Store`] abstraction and its two implementations:
//!
//! - [`PgStore`]: PostgreSQL via SQLx, schema managed by `migrations/`
//! - [`MemoryStore`]: in-process maps behind a `tokio` lock, for tests and local runs
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use chirpy_db::{PgStore, Store, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool().await?;
//! run_migrations(&pool).await?;
//! let store: Arc<dyn Store> = Arc::new(PgStore::new(pool));
//! ```

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

use std::env;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::Store;

pub use sqlx::PgPool;

/// Connects to the database named by `DATABASE_URL`.
pub async fn init_db_pool() -> Result<PgPool, StoreError> {
    let database_url = env::var("DATABASE_URL").map_err(|_| StoreError::MissingDatabaseUrl)?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
