pub mod bicycle;
pub mod health;
pub mod lock;
pub mod totem;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /bicycles                          list, create
/// /bicycles/{id}                     get, update, delete
/// /bicycles/{id}/status/{value}      direct status overwrite (POST)
/// /bicycles/network/integrate        dock a bicycle onto the network (POST)
/// /bicycles/network/withdraw         take a bicycle off the network (POST)
///
/// /locks                             list, create
/// /locks/{id}                        get, update, delete
/// /locks/{id}/lock                   engage (POST)
/// /locks/{id}/unlock                 release (POST)
/// /locks/{id}/status/{value}         status overwrite incl. TRANCAR/DESTRANCAR (POST)
/// /locks/{id}/bicycle                resolve docked bicycle (GET)
/// /locks/network/integrate           register a lock with a totem (POST)
/// /locks/network/withdraw            remove a lock from its totem (POST)
///
/// /totems                            list, create
/// /totems/{id}                       get, update, delete
/// /totems/{id}/locks                 locks registered to the totem (GET)
/// /totems/{id}/bicycles              bicycles docked at the totem (GET)
///
/// /admin/restore                     reset all collections (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bicycles", bicycle::router())
        .nest("/locks", lock::router())
        .nest("/totems", totem::router())
        .route("/admin/restore", post(handlers::admin::restore))
}
