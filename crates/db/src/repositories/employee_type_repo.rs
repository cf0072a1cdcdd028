//! Repository for the `employee_types` table.

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::entity::EntityKind;
use storefront_core::records::EmployeeTypeInput;
use storefront_core::types::DbId;

use super::Repository;
use crate::models::EmployeeType;

const COLUMNS: &str = "id, label, created_at, updated_at";

pub struct EmployeeTypeRepo;

#[async_trait]
impl Repository for EmployeeTypeRepo {
    const KIND: EntityKind = EntityKind::EmployeeType;
    const COLUMNS: &'static str = COLUMNS;
    type Row = EmployeeType;
    type Draft = EmployeeTypeInput;

    fn row_id(row: &EmployeeType) -> DbId {
        row.id
    }

    async fn create(
        pool: &PgPool,
        draft: &EmployeeTypeInput,
    ) -> Result<EmployeeType, sqlx::Error> {
        let query =
            format!("INSERT INTO employee_types (label) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, EmployeeType>(&query)
            .bind(&draft.label)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &EmployeeTypeInput,
    ) -> Result<Option<EmployeeType>, sqlx::Error> {
        let query =
            format!("UPDATE employee_types SET label = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, EmployeeType>(&query)
            .bind(id)
            .bind(&draft.label)
            .fetch_optional(pool)
            .await
    }
}
