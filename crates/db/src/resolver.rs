//! Postgres-backed [`ReferenceResolver`].

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::entity::EntityKind;
use storefront_core::types::DbId;
use storefront_core::validation::{ReferenceResolver, ResolvedRow};

use crate::error::StoreError;
use crate::repositories::ProductRepo;

/// Resolves references against the live tables.
///
/// Each lookup is its own query on the pool; nothing is cached between
/// calls, so a row deleted after validation is caught by the write itself.
pub struct PgResolver<'a> {
    pool: &'a PgPool,
}

impl<'a> PgResolver<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<'a> ReferenceResolver for PgResolver<'a> {
    type Error = StoreError;

    async fn resolve(
        &self,
        kind: EntityKind,
        id: DbId,
    ) -> Result<Option<ResolvedRow>, StoreError> {
        if kind == EntityKind::Product {
            let price = ProductRepo::find_price(self.pool, id).await?;
            return Ok(price.map(|price| ResolvedRow::product(id, price)));
        }

        let query = format!("SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1)", kind.table());
        let exists: bool = sqlx::query_scalar(&query)
            .bind(id)
            .fetch_one(self.pool)
            .await?;

        tracing::trace!(%kind, id, exists, "Resolved reference");
        Ok(exists.then(|| ResolvedRow::new(kind, id)))
    }
}
