//! Category records: the grouping a product is listed under.

use serde::Deserialize;
use validator::Validate;

use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{rules, EntityShape, Resolution};

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub id: Option<DbId>,
    #[validate(length(max = 100))]
    pub name: String,
}

impl EntityShape for CategoryInput {
    const KIND: EntityKind = EntityKind::Category;
    type Ready = Self;

    fn body_id(&self) -> Option<DbId> {
        self.id
    }

    fn check_values(&self) -> Result<(), CoreError> {
        rules::check_fields(self)
    }

    fn into_ready(self, _: &Resolution) -> Result<Self, CoreError> {
        Ok(self)
    }
}
