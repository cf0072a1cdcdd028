//! Repository for the `employees` table.

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::entity::EntityKind;
use storefront_core::records::EmployeeInput;
use storefront_core::types::DbId;

use super::Repository;
use crate::models::Employee;

const COLUMNS: &str = "id, person_id, employee_type_id, created_at, updated_at";

pub struct EmployeeRepo;

#[async_trait]
impl Repository for EmployeeRepo {
    const KIND: EntityKind = EntityKind::Employee;
    const COLUMNS: &'static str = COLUMNS;
    type Row = Employee;
    type Draft = EmployeeInput;

    fn row_id(row: &Employee) -> DbId {
        row.id
    }

    async fn create(pool: &PgPool, draft: &EmployeeInput) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (person_id, employee_type_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(draft.person_id)
            .bind(draft.employee_type_id)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &EmployeeInput,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET person_id = $2, employee_type_id = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(draft.person_id)
            .bind(draft.employee_type_id)
            .fetch_optional(pool)
            .await
    }
}
