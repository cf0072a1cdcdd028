use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No {entity} found with ID {id}.")]
    NotFound { entity: &'static str, id: DbId },

    #[error("No {entity} exists with ID {id} (field `{field}`).")]
    ReferenceNotFound {
        field: &'static str,
        entity: &'static str,
        id: DbId,
    },

    #[error("Invalid value for `{field}`: {reason}.")]
    InvalidValue { field: String, reason: String },

    #[error("The payload id {} does not match the path id {path_id}.", display_id(.body_id))]
    IdMismatch { path_id: DbId, body_id: Option<DbId> },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn display_id(id: &Option<DbId>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "(missing)".to_string(),
    }
}
