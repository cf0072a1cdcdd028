//! Caller-submitted records and their validation hooks.
//!
//! One input type per entity is used for both create and update: the
//! payload `id` is ignored on create and must equal the path id on update.

pub mod category;
pub mod employee;
pub mod employee_type;
pub mod inventory;
pub mod order;
pub mod person;
pub mod product;
pub mod role;

pub use category::CategoryInput;
pub use employee::EmployeeInput;
pub use employee_type::EmployeeTypeInput;
pub use inventory::InventoryInput;
pub use order::{OrderDraft, OrderInput};
pub use person::PersonInput;
pub use product::ProductInput;
pub use role::RoleInput;
