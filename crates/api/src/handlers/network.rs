//! Handlers for the network integrate/withdraw actions.
//!
//! These validate the referenced equipment and delegate the status
//! assignments to the store; each action is logged with the id of the
//! employee who performed it.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use bicicletario_store::models::{
    BicycleIntegration, BicycleWithdrawal, LockIntegration, LockWithdrawal,
};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /bicycles/network/integrate
///
/// Dock a bicycle (new, or back from repair) into a free lock and mark it
/// available. Returns the updated lock.
pub async fn integrate_bicycle(
    State(state): State<AppState>,
    Json(input): Json<BicycleIntegration>,
) -> AppResult<impl IntoResponse> {
    let lock = state.store.integrate_bicycle(&input)?;
    Ok(Json(lock))
}

/// POST /bicycles/network/withdraw
///
/// Take a bicycle off the network for retirement or repair. Returns the
/// bicycle with its new status.
pub async fn withdraw_bicycle(
    State(state): State<AppState>,
    Json(input): Json<BicycleWithdrawal>,
) -> AppResult<impl IntoResponse> {
    let bicycle = state.store.withdraw_bicycle(&input)?;
    Ok(Json(bicycle))
}

/// POST /locks/network/integrate
///
/// Register a lock with a totem and mark it free. Returns the updated
/// totem.
pub async fn integrate_lock(
    State(state): State<AppState>,
    Json(input): Json<LockIntegration>,
) -> AppResult<impl IntoResponse> {
    let totem = state.store.integrate_lock(&input)?;
    Ok(Json(totem))
}

/// POST /locks/network/withdraw
///
/// Remove a lock from its totem for retirement or repair. Returns the
/// lock with its new status.
pub async fn withdraw_lock(
    State(state): State<AppState>,
    Json(input): Json<LockWithdrawal>,
) -> AppResult<impl IntoResponse> {
    let lock = state.store.withdraw_lock(&input)?;
    Ok(Json(lock))
}
