//! The catalogue of entity kinds managed by the service.
//!
//! Every table, route segment and human-readable label is derived from
//! [`EntityKind`] so the three never drift apart.

use std::fmt;

/// One of the eight row kinds stored by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Role,
    EmployeeType,
    Person,
    Employee,
    Category,
    Product,
    Inventory,
    Order,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Role,
        EntityKind::EmployeeType,
        EntityKind::Person,
        EntityKind::Employee,
        EntityKind::Category,
        EntityKind::Product,
        EntityKind::Inventory,
        EntityKind::Order,
    ];

    /// Backing table name.
    pub const fn table(self) -> &'static str {
        match self {
            EntityKind::Role => "roles",
            EntityKind::EmployeeType => "employee_types",
            EntityKind::Person => "persons",
            EntityKind::Employee => "employees",
            EntityKind::Category => "categories",
            EntityKind::Product => "products",
            EntityKind::Inventory => "inventory",
            EntityKind::Order => "orders",
        }
    }

    /// Path segment under `/api`.
    pub const fn route(self) -> &'static str {
        match self {
            EntityKind::Role => "roles",
            EntityKind::EmployeeType => "employee-types",
            EntityKind::Person => "persons",
            EntityKind::Employee => "employees",
            EntityKind::Category => "categories",
            EntityKind::Product => "products",
            EntityKind::Inventory => "inventory",
            EntityKind::Order => "orders",
        }
    }

    /// Lower-case label used in caller-facing messages.
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::Role => "role",
            EntityKind::EmployeeType => "employee type",
            EntityKind::Person => "person",
            EntityKind::Employee => "employee",
            EntityKind::Category => "category",
            EntityKind::Product => "product",
            EntityKind::Inventory => "inventory item",
            EntityKind::Order => "order",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
