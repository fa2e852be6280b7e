//! Route definitions for locks.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{lock, network};
use crate::state::AppState;

/// Lock routes, nested under `/locks`.
///
/// ```text
/// GET    /                      list_locks
/// POST   /                      create_lock
/// GET    /{id}                  get_lock
/// PUT    /{id}                  update_lock
/// DELETE /{id}                  delete_lock
/// POST   /{id}/lock             engage_lock
/// POST   /{id}/unlock           release_lock
/// POST   /{id}/status/{value}   set_lock_status
/// GET    /{id}/bicycle          get_lock_bicycle
/// POST   /network/integrate     integrate_lock
/// POST   /network/withdraw      withdraw_lock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lock::list_locks).post(lock::create_lock))
        .route(
            "/{id}",
            get(lock::get_lock)
                .put(lock::update_lock)
                .delete(lock::delete_lock),
        )
        .route("/{id}/lock", post(lock::engage_lock))
        .route("/{id}/unlock", post(lock::release_lock))
        .route("/{id}/status/{value}", post(lock::set_lock_status))
        .route("/{id}/bicycle", get(lock::get_lock_bicycle))
        .route("/network/integrate", post(network::integrate_lock))
        .route("/network/withdraw", post(network::withdraw_lock))
}
