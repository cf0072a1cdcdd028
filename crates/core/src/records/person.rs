//! Person records. A person always belongs to a role.

use serde::Deserialize;
use validator::Validate;

use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{rules, EntityShape, Reference, Resolution};

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    pub id: Option<DbId>,
    pub role_id: DbId,
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub surname: String,
    #[validate(length(max = 150))]
    pub email: String,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
    #[validate(length(max = 200))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub password: String,
}

impl EntityShape for PersonInput {
    const KIND: EntityKind = EntityKind::Person;
    type Ready = Self;

    fn body_id(&self) -> Option<DbId> {
        self.id
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new("roleId", EntityKind::Role, self.role_id)]
    }

    fn check_values(&self) -> Result<(), CoreError> {
        rules::check_fields(self)
    }

    fn into_ready(self, _: &Resolution) -> Result<Self, CoreError> {
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::validation::testing::MemoryResolver;
    use crate::validation::Validator;

    fn ana(role_id: DbId) -> PersonInput {
        serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "surname": "Diaz",
            "email": "a@x.com",
            "password": "p",
            "roleId": role_id,
        }))
        .unwrap()
    }

    #[test]
    fn optional_contact_fields_default_to_none() {
        let person = ana(1);
        assert_eq!(person.phone, None);
        assert_eq!(person.address, None);
        assert_eq!(person.id, None);
    }

    #[tokio::test]
    async fn person_with_existing_role_is_accepted() {
        let store = MemoryResolver::new().with(EntityKind::Role, 1);
        let ready = Validator::new(&store).validate_create(ana(1)).await.unwrap();
        assert_eq!(ready.name, "Ana");
    }

    #[tokio::test]
    async fn unknown_role_is_rejected() {
        let store = MemoryResolver::new();
        assert_matches!(
            Validator::new(&store).validate_create(ana(4)).await,
            Err(CoreError::ReferenceNotFound {
                field: "roleId",
                id: 4,
                ..
            })
        );
    }

    #[tokio::test]
    async fn overlong_phone_is_invalid() {
        let store = MemoryResolver::new().with(EntityKind::Role, 1);
        let mut person = ana(1);
        person.phone = Some("0".repeat(21));
        assert_matches!(
            Validator::new(&store).validate_create(person).await,
            Err(CoreError::InvalidValue { field, .. }) if field == "phone"
        );
    }
}
