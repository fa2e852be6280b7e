//! Route definitions for totems.

use axum::routing::get;
use axum::Router;

use crate::handlers::totem;
use crate::state::AppState;

/// Totem routes, nested under `/totems`.
///
/// ```text
/// GET    /                  list_totems
/// POST   /                  create_totem
/// GET    /{id}              get_totem
/// PUT    /{id}              update_totem
/// DELETE /{id}              delete_totem
/// GET    /{id}/locks        list_totem_locks
/// GET    /{id}/bicycles     list_totem_bicycles
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(totem::list_totems).post(totem::create_totem))
        .route(
            "/{id}",
            get(totem::get_totem)
                .put(totem::update_totem)
                .delete(totem::delete_totem),
        )
        .route("/{id}/locks", get(totem::list_totem_locks))
        .route("/{id}/bicycles", get(totem::list_totem_bicycles))
}
