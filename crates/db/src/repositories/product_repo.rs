//! Repository for the `products` table.

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::entity::EntityKind;
use storefront_core::records::ProductInput;
use storefront_core::types::{DbId, Money};

use super::Repository;
use crate::models::Product;

const COLUMNS: &str =
    "id, category_id, employee_id, name, description, price, created_at, updated_at";

pub struct ProductRepo;

impl ProductRepo {
    /// Current price of a product, or `None` if it does not exist.
    pub async fn find_price(pool: &PgPool, id: DbId) -> Result<Option<Money>, sqlx::Error> {
        sqlx::query_scalar::<_, Money>("SELECT price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

#[async_trait]
impl Repository for ProductRepo {
    const KIND: EntityKind = EntityKind::Product;
    const COLUMNS: &'static str = COLUMNS;
    type Row = Product;
    type Draft = ProductInput;

    fn row_id(row: &Product) -> DbId {
        row.id
    }

    async fn create(pool: &PgPool, draft: &ProductInput) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (category_id, employee_id, name, description, price)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(draft.category_id)
            .bind(draft.employee_id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &ProductInput,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                category_id = $2,
                employee_id = $3,
                name = $4,
                description = $5,
                price = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(draft.category_id)
            .bind(draft.employee_id)
            .bind(&draft.name)
            .bind(&draft.description)
            .bind(draft.price)
            .fetch_optional(pool)
            .await
    }
}
