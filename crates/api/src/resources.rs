//! Binds each entity's payload type to its repository.

use serde::de::DeserializeOwned;
use storefront_core::records::{
    CategoryInput, EmployeeInput, EmployeeTypeInput, InventoryInput, OrderInput, PersonInput,
    ProductInput, RoleInput,
};
use storefront_core::validation::EntityShape;
use storefront_db::repositories::{
    CategoryRepo, EmployeeRepo, EmployeeTypeRepo, InventoryRepo, OrderRepo, PersonRepo,
    ProductRepo, Repository, RoleRepo,
};

/// A repository exposed over HTTP.
///
/// `Input` is what the client sends; validating it yields the repository's
/// write payload.
pub trait Resource: Repository {
    type Input: EntityShape<Ready = Self::Draft> + DeserializeOwned + Send + 'static;

    /// Whether `PUT` answers `200` with the stored row instead of `204`.
    const UPDATE_RETURNS_BODY: bool = false;
}

impl Resource for RoleRepo {
    type Input = RoleInput;
}

impl Resource for EmployeeTypeRepo {
    type Input = EmployeeTypeInput;
}

impl Resource for PersonRepo {
    type Input = PersonInput;
}

impl Resource for EmployeeRepo {
    type Input = EmployeeInput;
    const UPDATE_RETURNS_BODY: bool = true;
}

impl Resource for CategoryRepo {
    type Input = CategoryInput;
}

impl Resource for ProductRepo {
    type Input = ProductInput;
}

impl Resource for InventoryRepo {
    type Input = InventoryInput;
}

impl Resource for OrderRepo {
    type Input = OrderInput;
    const UPDATE_RETURNS_BODY: bool = true;
}
