//! Row models, one per table.
//!
//! Rows serialize with camelCase keys and omit `None` fields. They carry
//! foreign ids only; related rows are never embedded.

pub mod category;
pub mod employee;
pub mod employee_type;
pub mod inventory;
pub mod order;
pub mod person;
pub mod product;
pub mod role;

pub use category::Category;
pub use employee::Employee;
pub use employee_type::EmployeeType;
pub use inventory::Inventory;
pub use order::Order;
pub use person::Person;
pub use product::Product;
pub use role::Role;
