//! Handlers for totem CRUD and the totem lock/bicycle listings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use bicicletario_core::error::CoreError;
use bicicletario_core::types::DbId;
use bicicletario_store::models::{CreateTotem, UpdateTotem};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /totems
pub async fn list_totems(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.store.totems.list()))
}

/// POST /totems
pub async fn create_totem(
    State(state): State<AppState>,
    Json(input): Json<CreateTotem>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let totem = state.store.totems.create(input)?;

    tracing::info!(totem_id = totem.id, "Totem registered");

    Ok((StatusCode::CREATED, Json(totem)))
}

/// GET /totems/{id}
pub async fn get_totem(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let totem = state
        .store
        .totems
        .find_by_id(id)
        .ok_or(CoreError::NotFound { entity: "Totem", id })?;
    Ok(Json(totem))
}

/// PUT /totems/{id}
pub async fn update_totem(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTotem>,
) -> AppResult<impl IntoResponse> {
    let totem = state
        .store
        .totems
        .update(id, input)
        .ok_or(CoreError::NotFound { entity: "Totem", id })?;

    tracing::info!(totem_id = id, "Totem updated");

    Ok(Json(totem))
}

/// DELETE /totems/{id}
///
/// The totem's locks survive; only the grouping is removed.
pub async fn delete_totem(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_totem(id)?;

    tracing::info!(totem_id = id, "Totem removed");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /totems/{id}/locks
pub async fn list_totem_locks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let locks = state.store.locks_of_totem(id)?;
    Ok(Json(locks))
}

/// GET /totems/{id}/bicycles
pub async fn list_totem_bicycles(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bicycles = state.store.bicycles_of_totem(id)?;
    Ok(Json(bicycles))
}
