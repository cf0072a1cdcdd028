//! Repository for the `orders` table.

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::entity::EntityKind;
use storefront_core::records::OrderDraft;
use storefront_core::types::DbId;

use super::Repository;
use crate::models::Order;

const COLUMNS: &str =
    "id, person_id, product_id, date, quantity, total, created_at, updated_at";

pub struct OrderRepo;

#[async_trait]
impl Repository for OrderRepo {
    const KIND: EntityKind = EntityKind::Order;
    const COLUMNS: &'static str = COLUMNS;
    type Row = Order;
    type Draft = OrderDraft;

    fn row_id(row: &Order) -> DbId {
        row.id
    }

    /// Insert an order. A missing date falls back to the database clock.
    async fn create(pool: &PgPool, draft: &OrderDraft) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders (person_id, product_id, date, quantity, total)
             VALUES ($1, $2, COALESCE($3, NOW()), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(draft.person_id)
            .bind(draft.product_id)
            .bind(draft.date)
            .bind(draft.quantity)
            .bind(draft.total)
            .fetch_one(pool)
            .await
    }

    /// Replace an order. A `None` date keeps the stored one.
    async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &OrderDraft,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET
                person_id = $2,
                product_id = $3,
                date = COALESCE($4, date),
                quantity = $5,
                total = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(draft.person_id)
            .bind(draft.product_id)
            .bind(draft.date)
            .bind(draft.quantity)
            .bind(draft.total)
            .fetch_optional(pool)
            .await
    }
}
