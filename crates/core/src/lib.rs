//! Domain layer for the storefront service.
//!
//! Holds the shared id/money types, [`error::CoreError`], the entity
//! catalogue, caller-facing input records and the validator that checks
//! them against the persisted rows. Nothing here talks to a database
//! directly; lookups go through [`validation::ReferenceResolver`].

pub mod entity;
pub mod error;
pub mod records;
pub mod types;
pub mod validation;
