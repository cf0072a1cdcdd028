//! CRUD handlers shared by every resource.
//!
//! Each handler is generic over a [`Resource`]; writes go through the
//! [`Validator`] backed by the live database before the repository runs.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::types::DbId;
use storefront_core::validation::Validator;
use storefront_db::resolver::PgResolver;

use crate::error::{AppError, AppResult};
use crate::resources::Resource;
use crate::state::AppState;

fn not_found<R: Resource>(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: R::KIND.label(),
        id,
    })
}

/// GET /api/{resource}
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<R::Row>>> {
    let rows = R::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/{resource}/{id}
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<R::Row>> {
    let row = R::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    Ok(Json(row))
}

/// POST /api/{resource}
///
/// Responds `201` with the stored row and its `Location`.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(input): Json<R::Input>,
) -> AppResult<Response> {
    let resolver = PgResolver::new(&state.pool);
    let draft = Validator::new(&resolver).validate_create(input).await?;

    let row = R::create(&state.pool, &draft).await?;
    let id = R::row_id(&row);
    tracing::info!(entity = %R::KIND, id, "Created");

    let location = format!("/api/{}/{id}", R::KIND.route());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(row)).into_response())
}

/// PUT /api/{resource}/{id}
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<R::Input>,
) -> AppResult<Response> {
    let resolver = PgResolver::new(&state.pool);
    let draft = Validator::new(&resolver).validate_update(id, input).await?;

    // The row can vanish between validation and the write.
    let row = R::update(&state.pool, id, &draft)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    tracing::info!(entity = %R::KIND, id, "Updated");

    if R::UPDATE_RETURNS_BODY {
        Ok(Json(row).into_response())
    } else {
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

/// DELETE /api/{resource}/{id}
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let resolver = PgResolver::new(&state.pool);
    Validator::new(&resolver)
        .validate_delete(R::KIND, id)
        .await?;

    if R::delete(&state.pool, id).await? {
        tracing::info!(entity = %R::KIND, id, "Deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<R>(id))
    }
}
