//! Route definitions for bicycles.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{bicycle, network};
use crate::state::AppState;

/// Bicycle routes, nested under `/bicycles`.
///
/// ```text
/// GET    /                      list_bicycles
/// POST   /                      create_bicycle
/// GET    /{id}                  get_bicycle
/// PUT    /{id}                  update_bicycle
/// DELETE /{id}                  delete_bicycle
/// POST   /{id}/status/{value}   set_bicycle_status
/// POST   /network/integrate     integrate_bicycle
/// POST   /network/withdraw      withdraw_bicycle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bicycle::list_bicycles).post(bicycle::create_bicycle))
        .route(
            "/{id}",
            get(bicycle::get_bicycle)
                .put(bicycle::update_bicycle)
                .delete(bicycle::delete_bicycle),
        )
        .route("/{id}/status/{value}", post(bicycle::set_bicycle_status))
        .route("/network/integrate", post(network::integrate_bicycle))
        .route("/network/withdraw", post(network::withdraw_bicycle))
}
