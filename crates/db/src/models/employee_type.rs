use serde::Serialize;
use sqlx::FromRow;
use storefront_core::types::{DbId, Timestamp};

/// A row from the `employee_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeType {
    pub id: DbId,
    pub label: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
