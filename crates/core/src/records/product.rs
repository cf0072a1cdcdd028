//! Product records: a priced catalogue item owned by a category and the
//! employee who listed it.

use serde::Deserialize;
use validator::Validate;

use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::types::{DbId, Money};
use crate::validation::{rules, EntityShape, Reference, Resolution};

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub id: Option<DbId>,
    pub category_id: DbId,
    pub employee_id: DbId,
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(length(max = 255))]
    pub description: Option<String>,
    pub price: Money,
}

impl EntityShape for ProductInput {
    const KIND: EntityKind = EntityKind::Product;
    type Ready = Self;

    fn body_id(&self) -> Option<DbId> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new("categoryId", EntityKind::Category, self.category_id),
            Reference::new("employeeId", EntityKind::Employee, self.employee_id),
        ]
    }

    fn check_values(&self) -> Result<(), CoreError> {
        rules::require_cents("price", self.price)?;
        rules::require_positive("price", self.price)?;
        rules::require_storable("price", self.price)?;
        rules::check_fields(self)
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

    fn widget(price: Money) -> ProductInput {
        ProductInput {
            id: None,
            category_id: 1,
            employee_id: 1,
            name: "Widget".into(),
            description: None,
            price,
        }
    }

    fn catalogue() -> MemoryResolver {
        MemoryResolver::new()
            .with(EntityKind::Category, 1)
            .with(EntityKind::Employee, 1)
    }

    #[test]
    fn price_deserializes_from_json_number() {
        let input: ProductInput = serde_json::from_value(serde_json::json!({
            "name": "Widget",
            "price": 10.5,
            "categoryId": 1,
            "employeeId": 1,
        }))
        .unwrap();
        assert_eq!(input.price, Decimal::new(105, 1));
    }

    #[tokio::test]
    async fn missing_category_is_named_first() {
        let store = MemoryResolver::new();
        let err = Validator::new(&store)
            .validate_create(widget(Decimal::new(1000, 2)))
            .await
            .unwrap_err();
        assert_matches!(
            err,
            CoreError::ReferenceNotFound {
                field: "categoryId",
                entity: "category",
                id: 1
            }
        );
    }

    #[tokio::test]
    async fn zero_price_is_rejected_on_create() {
        let store = catalogue();
        assert_matches!(
            Validator::new(&store).validate_create(widget(Decimal::ZERO)).await,
            Err(CoreError::InvalidValue { field, .. }) if field == "price"
        );
    }

    #[tokio::test]
    async fn negative_price_is_rejected_on_update() {
        let store = catalogue().with_product(9, Decimal::new(100, 2));
        let mut input = widget(Decimal::new(-1, 0));
        input.id = Some(9);
        assert_matches!(
            Validator::new(&store).validate_update(9, input).await,
            Err(CoreError::InvalidValue { field, .. }) if field == "price"
        );
    }

    #[tokio::test]
    async fn sub_cent_prices_are_rejected() {
        let store = catalogue();
        for price in [Decimal::new(1, 3), Decimal::new(10005, 3)] {
            assert_matches!(
                Validator::new(&store).validate_create(widget(price)).await,
                Err(CoreError::InvalidValue { field, .. }) if field == "price"
            );
        }
    }

    #[tokio::test]
    async fn valid_product_passes_unchanged() {
        let store = catalogue();
        let input = widget(Decimal::new(1000, 2));
        let ready = Validator::new(&store)
            .validate_create(input.clone())
            .await
            .unwrap();
        assert_eq!(ready, input);
    }
}
