//! Employee type records.

use serde::Deserialize;
use validator::Validate;

use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{rules, EntityShape, Resolution};

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTypeInput {
    pub id: Option<DbId>,
    #[validate(length(max = 50))]
    pub label: String,
}

impl EntityShape for EmployeeTypeInput {
    const KIND: EntityKind = EntityKind::EmployeeType;
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
