//! Repository for the `categories` table.

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::entity::EntityKind;
use storefront_core::records::CategoryInput;
use storefront_core::types::DbId;

use super::Repository;
use crate::models::Category;

const COLUMNS: &str = "id, name, created_at, updated_at";

pub struct CategoryRepo;

#[async_trait]
impl Repository for CategoryRepo {
    const KIND: EntityKind = EntityKind::Category;
    const COLUMNS: &'static str = COLUMNS;
    type Row = Category;
    type Draft = CategoryInput;

    fn row_id(row: &Category) -> DbId {
        row.id
    }

    async fn create(pool: &PgPool, draft: &CategoryInput) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&draft.name)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &CategoryInput,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("UPDATE categories SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&draft.name)
            .fetch_optional(pool)
            .await
    }
}
