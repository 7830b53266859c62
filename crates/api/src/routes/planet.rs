//! Route definitions for the `/planetas` resource and its favorites.

use axum::routing::get;
use axum::Router;

use crate::handlers::{favorite, planet};
use crate::state::AppState;

/// Routes mounted at `/planetas`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
///
/// GET    /{id}/favoritos    -> favorite::list_by_planet
/// POST   /{id}/favoritos    -> favorite::create_for_planet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planet::list).post(planet::create))
        .route(
            "/{id}",
            get(planet::get_by_id)
                .put(planet::update)
                .delete(planet::delete),
        )
        .route(
            "/{id}/favoritos",
            get(favorite::list_by_planet).post(favorite::create_for_planet),
        )
}
