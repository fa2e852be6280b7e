//! Handlers for bicycle CRUD and status transitions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use bicicletario_core::error::CoreError;
use bicicletario_core::status::BicycleStatus;
use bicicletario_core::types::DbId;
use bicicletario_store::models::{CreateBicycle, UpdateBicycle};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /bicycles
pub async fn list_bicycles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.store.bicycles.list()))
}

/// POST /bicycles
pub async fn create_bicycle(
    State(state): State<AppState>,
    Json(input): Json<CreateBicycle>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let bicycle = state.store.bicycles.create(input)?;

    tracing::info!(bicycle_id = bicycle.id, "Bicycle registered");

    Ok((StatusCode::CREATED, Json(bicycle)))
}

/// GET /bicycles/{id}
pub async fn get_bicycle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bicycle = state
        .store
        .bicycles
        .find_by_id(id)
        .ok_or(CoreError::NotFound { entity: "Bicycle", id })?;
    Ok(Json(bicycle))
}

/// PUT /bicycles/{id}
///
/// Partial update: only fields present in the payload are overwritten.
pub async fn update_bicycle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBicycle>,
) -> AppResult<impl IntoResponse> {
    let bicycle = state
        .store
        .bicycles
        .update(id, input)
        .ok_or(CoreError::NotFound { entity: "Bicycle", id })?;

    tracing::info!(bicycle_id = id, "Bicycle updated");

    Ok(Json(bicycle))
}

/// DELETE /bicycles/{id}
///
/// Rejected with 409 while an occupied lock still references the bicycle.
pub async fn delete_bicycle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_bicycle(id)?;

    tracing::info!(bicycle_id = id, "Bicycle removed");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /bicycles/{id}/status/{value}
///
/// Direct administrative status overwrite; no pair-wise guards.
pub async fn set_bicycle_status(
    State(state): State<AppState>,
    Path((id, value)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let status = BicycleStatus::from_str(&value)?;
    let bicycle = state.store.bicycles.set_status(id, status)?;

    tracing::info!(bicycle_id = id, status = status.as_str(), "Bicycle status set");

    Ok(Json(bicycle))
}
