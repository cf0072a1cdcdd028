//! Repository for the `inventory` table.

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::entity::EntityKind;
use storefront_core::records::InventoryInput;
use storefront_core::types::DbId;

use super::Repository;
use crate::models::Inventory;

const COLUMNS: &str = "id, product_id, employee_id, quantity, created_at, updated_at";

pub struct InventoryRepo;

#[async_trait]
impl Repository for InventoryRepo {
    const KIND: EntityKind = EntityKind::Inventory;
    const COLUMNS: &'static str = COLUMNS;
    type Row = Inventory;
    type Draft = InventoryInput;

    fn row_id(row: &Inventory) -> DbId {
        row.id
    }

    async fn create(pool: &PgPool, draft: &InventoryInput) -> Result<Inventory, sqlx::Error> {
        let query = format!(
            "INSERT INTO inventory (product_id, employee_id, quantity)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(draft.product_id)
            .bind(draft.employee_id)
            .bind(draft.quantity)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &InventoryInput,
    ) -> Result<Option<Inventory>, sqlx::Error> {
        let query = format!(
            "UPDATE inventory SET product_id = $2, employee_id = $3, quantity = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .bind(draft.product_id)
            .bind(draft.employee_id)
            .bind(draft.quantity)
            .fetch_optional(pool)
            .await
    }
}
