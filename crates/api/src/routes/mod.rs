pub mod auth;
pub mod character;
pub mod health;
pub mod planet;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                              list, create
/// /users/{id}                         get, replace, delete
/// /users/{id}/favoritos               list, create
/// /users/{id}/favoritos/{fid}         delete
///
/// /personajes                         list, create
/// /personajes/{id}                    get, replace, delete
///
/// /planetas                           list, create
/// /planetas/{id}                      get, replace, delete
/// /planetas/{id}/favoritos            list, create
///
/// /auth/login                         login (public)
/// /private                            requires Bearer token
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/personajes", character::router())
        .nest("/planetas", planet::router())
        .merge(auth::router())
}
