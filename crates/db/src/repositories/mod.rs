//! Repository layer.
//!
//! Each repository is a zero-sized struct implementing [`Repository`]:
//! the per-table `INSERT`/`UPDATE` statements are written out by hand,
//! while lookups, listing and deletion share the default implementations
//! keyed off the entity's table name.

pub mod category_repo;
pub mod employee_repo;
pub mod employee_type_repo;
pub mod inventory_repo;
pub mod order_repo;
pub mod person_repo;
pub mod product_repo;
pub mod role_repo;

pub use category_repo::CategoryRepo;
pub use employee_repo::EmployeeRepo;
pub use employee_type_repo::EmployeeTypeRepo;
pub use inventory_repo::InventoryRepo;
pub use order_repo::OrderRepo;
pub use person_repo::PersonRepo;
pub use product_repo::ProductRepo;
pub use role_repo::RoleRepo;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use storefront_core::entity::EntityKind;
use storefront_core::types::DbId;

/// CRUD access to one entity table.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    const KIND: EntityKind;

    /// Column list shared across queries.
    const COLUMNS: &'static str;

    type Row: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static;

    /// Validated write payload.
    type Draft: Send + Sync + 'static;

    fn row_id(row: &Self::Row) -> DbId;

    /// Insert a new row, returning it.
    async fn create(pool: &PgPool, draft: &Self::Draft) -> Result<Self::Row, sqlx::Error>;

    /// Replace the mutable columns of row `id`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &Self::Draft,
    ) -> Result<Option<Self::Row>, sqlx::Error>;

    async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Self::Row>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1",
            Self::COLUMNS,
            Self::KIND.table()
        );
        sqlx::query_as::<_, Self::Row>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rows ordered by id.
    async fn list(pool: &PgPool) -> Result<Vec<Self::Row>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY id",
            Self::COLUMNS,
            Self::KIND.table()
        );
        sqlx::query_as::<_, Self::Row>(&query).fetch_all(pool).await
    }

    /// Delete a row by id. Returns `true` if a row was removed.
    async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", Self::KIND.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
