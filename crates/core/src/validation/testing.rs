//! In-memory [`ReferenceResolver`] for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{ReferenceResolver, ResolvedRow};
use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::types::{DbId, Money};

#[derive(Default)]
pub(crate) struct MemoryResolver {
    rows: HashMap<(EntityKind, DbId), ResolvedRow>,
    lookups: AtomicUsize,
}

impl MemoryResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, kind: EntityKind, id: DbId) -> Self {
        self.rows.insert((kind, id), ResolvedRow::new(kind, id));
        self
    }

    pub(crate) fn with_product(mut self, id: DbId, price: Money) -> Self {
        self.rows
            .insert((EntityKind::Product, id), ResolvedRow::product(id, price));
        self
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReferenceResolver for MemoryResolver {
    type Error = CoreError;

    async fn resolve(
        &self,
        kind: EntityKind,
        id: DbId,
    ) -> Result<Option<ResolvedRow>, CoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.get(&(kind, id)).cloned())
    }
}
