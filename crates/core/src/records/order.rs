//! Order records.
//!
//! The order total is derived once per write from the quantity and the
//! product's price at that moment; later price changes never touch it.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::types::{DbId, Money, Timestamp};
use crate::validation::{rules, EntityShape, Operation, Reference, Resolution};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    pub id: Option<DbId>,
    pub person_id: DbId,
    pub product_id: DbId,
    pub date: Option<Timestamp>,
    pub quantity: i32,
}

/// A validated order with its derived total.
///
/// `date` is always set on create. On update it is `None` when the caller
/// omitted it, meaning the stored date is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub person_id: DbId,
    pub product_id: DbId,
    pub date: Option<Timestamp>,
    pub quantity: i32,
    pub total: Money,
}

impl EntityShape for OrderInput {
    const KIND: EntityKind = EntityKind::Order;
    type Ready = OrderDraft;

    fn body_id(&self) -> Option<DbId> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new("productId", EntityKind::Product, self.product_id),
            Reference::new("personId", EntityKind::Person, self.person_id),
        ]
    }

    fn into_ready(self, resolution: &Resolution) -> Result<OrderDraft, CoreError> {
        let price = resolution.price_of(self.product_id)?;
        let total = order_total(self.quantity, price)?;
        let date = match resolution.operation() {
            Operation::Create => Some(self.date.unwrap_or_else(|| resolution.now())),
            Operation::Update => self.date,
        };

        Ok(OrderDraft {
            person_id: self.person_id,
            product_id: self.product_id,
            date,
            quantity: self.quantity,
            total,
        })
    }
}

/// `quantity * price`, rounded to cents.
pub fn order_total(quantity: i32, price: Money) -> Result<Money, CoreError> {
    let total = Decimal::from(quantity)
        .checked_mul(price)
        .ok_or_else(|| CoreError::InvalidValue {
            field: "quantity".to_string(),
            reason: "order total overflows".to_string(),
        })?
        .round_dp(2);
    rules::require_storable("total", total)?;
    Ok(total)
}
