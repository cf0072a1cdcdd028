//! Postgres persistence for the storefront service.
//!
//! Exposes pool creation, health checking, migrations, the row models,
//! one repository per entity and [`resolver::PgResolver`], the store-backed
//! reference resolver used by the validator.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod resolver;

pub use config::DatabaseConfig;
pub use error::StoreError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from explicit configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the bundled migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
