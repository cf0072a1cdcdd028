use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// A row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: DbId,
    pub person_id: DbId,
    pub employee_type_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
