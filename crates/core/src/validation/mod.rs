//! Referential-integrity and derived-value validation.
//!
//! Every write passes through [`Validator`] before it reaches the store:
//!
//! - **create**: each declared foreign key must resolve, then the entity's
//!   value rules run, then derived fields are computed.
//! - **update**: the path id must equal the payload id (checked before any
//!   lookup), the target row must exist, then the create checks re-run.
//! - **delete**: the target row must exist.
//!
//! Per-entity behaviour lives in [`EntityShape`] implementations; row
//! lookups go through a [`ReferenceResolver`].

pub mod rules;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::types::{DbId, Money, Timestamp};

/// A foreign key declared by an entity payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Caller-facing field name (camelCase, as it appears in the payload).
    pub field: &'static str,
    pub kind: EntityKind,
    pub id: DbId,
}

impl Reference {
    pub const fn new(field: &'static str, kind: EntityKind, id: DbId) -> Self {
        Self { field, kind, id }
    }
}

/// A persisted row found by a [`ReferenceResolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRow {
    pub kind: EntityKind,
    pub id: DbId,
    /// Current unit price; populated for products only.
    pub price: Option<Money>,
}

impl ResolvedRow {
    pub fn new(kind: EntityKind, id: DbId) -> Self {
        Self {
            kind,
            id,
            price: None,
        }
    }

    pub fn product(id: DbId, price: Money) -> Self {
        Self {
            kind: EntityKind::Product,
            id,
            price: Some(price),
        }
    }
}

/// Looks rows up in the persisted snapshot.
#[async_trait]
pub trait ReferenceResolver: Send + Sync {
    /// Error type of the backing store. Validation failures are folded
    /// into it so callers deal with a single error type.
    type Error: From<CoreError> + Send;

    /// Fetch the row `id` of `kind`, or `None` if it does not exist.
    async fn resolve(
        &self,
        kind: EntityKind,
        id: DbId,
    ) -> Result<Option<ResolvedRow>, Self::Error>;
}

/// The write being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

/// Everything an entity needs to compute its derived fields.
#[derive(Debug, Clone)]
pub struct Resolution {
    operation: Operation,
    now: Timestamp,
    rows: Vec<ResolvedRow>,
}

impl Resolution {
    pub fn new(operation: Operation, now: Timestamp, rows: Vec<ResolvedRow>) -> Self {
        Self {
            operation,
            now,
            rows,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Server time captured when validation started.
    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn row(&self, kind: EntityKind, id: DbId) -> Option<&ResolvedRow> {
        self.rows.iter().find(|r| r.kind == kind && r.id == id)
    }

    /// Current price of a referenced product.
    ///
    /// The product must have been declared as a reference of the entity.
    pub fn price_of(&self, product_id: DbId) -> Result<Money, CoreError> {
        self.row(EntityKind::Product, product_id)
            .and_then(|row| row.price)
            .ok_or_else(|| {
                CoreError::Internal(format!(
                    "price of product {product_id} was not resolved"
                ))
            })
    }
}

/// Per-entity validation hook.
pub trait EntityShape: Send + Sync {
    const KIND: EntityKind;

    /// The record handed to the store once validation succeeds.
    type Ready: Send + Sync;

    /// Identifier carried in the payload, if any.
    fn body_id(&self) -> Option<DbId>;

    /// Foreign keys in the order they are checked.
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }

    /// Value constraints, run after every reference resolved.
    fn check_values(&self) -> Result<(), CoreError> {
        Ok(())
    }

    /// Attach derived fields.
    fn into_ready(self, resolution: &Resolution) -> Result<Self::Ready, CoreError>;
}

/// Validates writes against the rows visible through `R`.
pub struct Validator<'a, R: ?Sized> {
    resolver: &'a R,
    now: Timestamp,
}

impl<'a, R> Validator<'a, R>
where
    R: ReferenceResolver + ?Sized,
{
    pub fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            now: chrono::Utc::now(),
        }
    }

    /// Pin the clock used for default timestamps.
    pub fn at(mut self, now: Timestamp) -> Self {
        self.now = now;
        self
    }

    pub async fn validate_create<T: EntityShape>(
        &self,
        candidate: T,
    ) -> Result<T::Ready, R::Error> {
        self.prepare(Operation::Create, candidate).await
    }

    pub async fn validate_update<T: EntityShape>(
        &self,
        path_id: DbId,
        candidate: T,
    ) -> Result<T::Ready, R::Error> {
        let body_id = candidate.body_id();
        if body_id != Some(path_id) {
            return Err(CoreError::IdMismatch { path_id, body_id }.into());
        }
        self.require_existing(T::KIND, path_id).await?;
        self.prepare(Operation::Update, candidate).await
    }

    pub async fn validate_delete(&self, kind: EntityKind, id: DbId) -> Result<(), R::Error> {
        self.require_existing(kind, id).await
    }

    async fn require_existing(&self, kind: EntityKind, id: DbId) -> Result<(), R::Error> {
        match self.resolver.resolve(kind, id).await? {
            Some(_) => Ok(()),
            None => Err(CoreError::NotFound {
                entity: kind.label(),
                id,
            }
            .into()),
        }
    }

    async fn prepare<T: EntityShape>(
        &self,
        operation: Operation,
        candidate: T,
    ) -> Result<T::Ready, R::Error> {
        let mut rows = Vec::new();
        for reference in candidate.references() {
            match self.resolver.resolve(reference.kind, reference.id).await? {
                Some(row) => rows.push(row),
                None => {
                    return Err(CoreError::ReferenceNotFound {
                        field: reference.field,
                        entity: reference.kind.label(),
                        id: reference.id,
                    }
                    .into())
                }
            }
        }

        candidate.check_values()?;

        let resolution = Resolution::new(operation, self.now, rows);
        Ok(candidate.into_ready(&resolution)?)
    }
}
