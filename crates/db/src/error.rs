use storefront_core::error::CoreError;

/// Failure of a validated store operation: either a domain rule or the
/// database itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
