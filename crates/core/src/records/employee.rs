//! Employee records. An employee is a person with an employee type.

use serde::Deserialize;

use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{EntityShape, Reference, Resolution};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub id: Option<DbId>,
    pub person_id: DbId,
    pub employee_type_id: DbId,
}

impl EntityShape for EmployeeInput {
    const KIND: EntityKind = EntityKind::Employee;
    type Ready = Self;

    fn body_id(&self) -> Option<DbId> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new("personId", EntityKind::Person, self.person_id),
            Reference::new(
                "employeeTypeId",
                EntityKind::EmployeeType,
                self.employee_type_id,
            ),
        ]
    }

    fn into_ready(self, _: &Resolution) -> Result<Self, CoreError> {
        Ok(self)
    }
}
