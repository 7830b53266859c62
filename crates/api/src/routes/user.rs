//! Route definitions for the `/users` resource and its favorites.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{favorite, user};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
///
/// GET    /{id}/favoritos            -> favorite::list_by_user
/// POST   /{id}/favoritos            -> favorite::create_for_user
/// DELETE /{id}/favoritos/{fid}      -> favorite::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route(
            "/{id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
        .route(
            "/{id}/favoritos",
            get(favorite::list_by_user).post(favorite::create_for_user),
        )
        .route("/{id}/favoritos/{fid}", delete(favorite::delete))
}
