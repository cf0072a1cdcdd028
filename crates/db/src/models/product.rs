use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Money, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub category_id: DbId,
    pub employee_id: DbId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Money,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
