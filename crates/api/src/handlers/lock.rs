//! Handlers for lock CRUD, the lock/unlock state machine, and the docked
//! bicycle lookup.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use bicicletario_core::error::CoreError;
use bicicletario_core::status::parse_lock_status_target;
use bicicletario_core::types::DbId;
use bicicletario_store::models::{CreateLock, UpdateLock};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Optional body for the lock/unlock actions.
#[derive(Debug, Default, Deserialize)]
pub struct LockActionBody {
    /// Bicycle being docked (lock) or claimed (unlock).
    pub bicicleta: Option<DbId>,
}

/// GET /locks
pub async fn list_locks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.store.locks.list()))
}

/// POST /locks
pub async fn create_lock(
    State(state): State<AppState>,
    Json(input): Json<CreateLock>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let lock = state.store.locks.create(input)?;

    tracing::info!(lock_id = lock.id, "Lock registered");

    Ok((StatusCode::CREATED, Json(lock)))
}

/// GET /locks/{id}
pub async fn get_lock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let lock = state
        .store
        .locks
        .find_by_id(id)
        .ok_or(CoreError::NotFound { entity: "Lock", id })?;
    Ok(Json(lock))
}

/// PUT /locks/{id}
pub async fn update_lock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLock>,
) -> AppResult<impl IntoResponse> {
    let lock = state
        .store
        .locks
        .update(id, input)
        .ok_or(CoreError::NotFound { entity: "Lock", id })?;

    tracing::info!(lock_id = id, "Lock updated");

    Ok(Json(lock))
}

/// DELETE /locks/{id}
///
/// Rejected with 409 while the lock is occupied.
pub async fn delete_lock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.store.delete_lock(id)?;

    tracing::info!(lock_id = id, "Lock removed");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /locks/{id}/lock
///
/// Close the lock; 422 if it is already occupied. An optional body names
/// the bicycle being docked, which must exist.
pub async fn engage_lock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<LockActionBody>>,
) -> AppResult<impl IntoResponse> {
    let bicycle = body.and_then(|Json(b)| b.bicicleta);
    let lock = state.store.engage_lock(id, bicycle)?;

    tracing::info!(lock_id = id, bicicleta = ?lock.bicicleta, "Lock engaged");

    Ok(Json(lock))
}

/// POST /locks/{id}/unlock
///
/// Open the lock; 422 if it is already free.
pub async fn release_lock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<LockActionBody>>,
) -> AppResult<impl IntoResponse> {
    let bicycle = body.and_then(|Json(b)| b.bicicleta);
    let lock = state.store.release_lock(id, bicycle)?;

    tracing::info!(lock_id = id, "Lock released");

    Ok(Json(lock))
}

/// POST /locks/{id}/status/{value}
///
/// Coarse status overwrite. Accepts plain statuses plus the `TRANCAR` /
/// `DESTRANCAR` directives; performs no bicycle-reference bookkeeping.
pub async fn set_lock_status(
    State(state): State<AppState>,
    Path((id, value)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let status = parse_lock_status_target(&value)?;
    let lock = state.store.locks.set_status(id, status)?;

    tracing::info!(lock_id = id, status = status.as_str(), "Lock status set");

    Ok(Json(lock))
}

/// GET /locks/{id}/bicycle
///
/// Resolve the docked bicycle; 404 if the lock is unknown, holds no
/// bicycle, or the reference dangles.
pub async fn get_lock_bicycle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let bicycle = state.store.docked_bicycle(id)?;
    Ok(Json(bicycle))
}
