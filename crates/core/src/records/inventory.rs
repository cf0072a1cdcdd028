//! Inventory records: stock of a product counted by an employee.

use serde::Deserialize;

use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{EntityShape, Reference, Resolution};

/// A stock entry: how many units of a product an employee holds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryInput {
    pub id: Option<DbId>,
    pub product_id: DbId,
    pub employee_id: DbId,
    pub quantity: i32,
}

impl EntityShape for InventoryInput {
    const KIND: EntityKind = EntityKind::Inventory;
    type Ready = Self;

    fn body_id(&self) -> Option<DbId> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new("productId", EntityKind::Product, self.product_id),
            Reference::new("employeeId", EntityKind::Employee, self.employee_id),
        ]
    }

    fn into_ready(self, _: &Resolution) -> Result<Self, CoreError> {
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rust_decimal::Decimal;

    use super::*;
    use crate::validation::testing::MemoryResolver;
    use crate::validation::Validator;

    #[tokio::test]
    async fn product_is_checked_before_employee() {
        let store = MemoryResolver::new();
        let input = InventoryInput {
            id: None,
            product_id: 3,
            employee_id: 4,
            quantity: 10,
        };
        assert_matches!(
            Validator::new(&store).validate_create(input).await,
            Err(CoreError::ReferenceNotFound { field: "productId", id: 3, .. })
        );
    }

    #[tokio::test]
    async fn stock_entry_with_known_rows_is_accepted() {
        let store = MemoryResolver::new()
            .with_product(3, Decimal::new(250, 2))
            .with(EntityKind::Employee, 4);
        let input = InventoryInput {
            id: None,
            product_id: 3,
            employee_id: 4,
            quantity: 10,
        };
        let ready = Validator::new(&store).validate_create(input).await.unwrap();
        assert_eq!(ready.quantity, 10);
    }
}
