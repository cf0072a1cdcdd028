//! Repository for the `roles` table.

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::entity::EntityKind;
use storefront_core::records::RoleInput;
use storefront_core::types::DbId;

use super::Repository;
use crate::models::Role;

const COLUMNS: &str = "id, name, created_at, updated_at";

pub struct RoleRepo;

#[async_trait]
impl Repository for RoleRepo {
    const KIND: EntityKind = EntityKind::Role;
    const COLUMNS: &'static str = COLUMNS;
    type Row = Role;
    type Draft = RoleInput;

    fn row_id(row: &Role) -> DbId {
        row.id
    }

    async fn create(pool: &PgPool, draft: &RoleInput) -> Result<Role, sqlx::Error> {
        let query = format!("INSERT INTO roles (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Role>(&query)
            .bind(&draft.name)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &RoleInput,
    ) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("UPDATE roles SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .bind(&draft.name)
            .fetch_optional(pool)
            .await
    }
}
