use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Money, Timestamp};

/// A row from the `orders` table.
///
/// `total` was derived from the product price when the row was last
/// written and is not kept in sync with later price changes.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: DbId,
    pub person_id: DbId,
    pub product_id: DbId,
    pub date: Timestamp,
    pub quantity: i32,
    pub total: Money,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
