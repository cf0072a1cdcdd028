//! HTTP surface of the storefront service.
//!
//! The binary in `main.rs` and the integration tests both build the app
//! through [`router::build_app_router`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod resources;
pub mod router;
pub mod routes;
pub mod state;
