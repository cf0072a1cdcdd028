//! Repository for the `persons` table.

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::entity::EntityKind;
use storefront_core::records::PersonInput;
use storefront_core::types::DbId;

use super::Repository;
use crate::models::Person;

/// The password column is deliberately absent: it is written, never read.
const COLUMNS: &str =
    "id, role_id, name, surname, email, phone, address, created_at, updated_at";

pub struct PersonRepo;

#[async_trait]
impl Repository for PersonRepo {
    const KIND: EntityKind = EntityKind::Person;
    const COLUMNS: &'static str = COLUMNS;
    type Row = Person;
    type Draft = PersonInput;

    fn row_id(row: &Person) -> DbId {
        row.id
    }

    async fn create(pool: &PgPool, draft: &PersonInput) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO persons (role_id, name, surname, email, phone, address, password)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(draft.role_id)
            .bind(&draft.name)
            .bind(&draft.surname)
            .bind(&draft.email)
            .bind(&draft.phone)
            .bind(&draft.address)
            .bind(&draft.password)
            .fetch_one(pool)
            .await
    }

    async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &PersonInput,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE persons SET
                role_id = $2,
                name = $3,
                surname = $4,
                email = $5,
                phone = $6,
                address = $7,
                password = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(draft.role_id)
            .bind(&draft.name)
            .bind(&draft.surname)
            .bind(&draft.email)
            .bind(&draft.phone)
            .bind(&draft.address)
            .bind(&draft.password)
            .fetch_optional(pool)
            .await
    }
}
