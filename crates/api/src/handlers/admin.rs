//! Administrative handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /admin/restore
///
/// Clear all three collections, returning the system to a known empty
/// starting state (used between test runs and by operators).
pub async fn restore(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.store.reset();

    tracing::info!("Store restored to initial state");

    Ok(Json(MessageResponse {
        message: "store restored to initial state",
    }))
}
