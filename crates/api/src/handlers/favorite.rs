//! Handlers for favorites, nested under users and planets.
//!
//! `/users/{user_id}/favoritos[/{id}]` and `/planetas/{planet_id}/favoritos`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::favorite::Favorite;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /users/{user_id}/favoritos`.
#[derive(Debug, Deserialize)]
pub struct UserFavoriteRequest {
    pub personajes_id: Option<DbId>,
    pub planetas_id: Option<DbId>,
}

/// Request body for `POST /planetas/{planet_id}/favoritos`.
///
/// The planet comes from the path, so a `personajes_id` here is rejected as
/// a second target.
#[derive(Debug, Deserialize)]
pub struct PlanetFavoriteRequest {
    pub usuario_id: Option<DbId>,
    pub personajes_id: Option<DbId>,
}

/// GET /users/{user_id}/favoritos
pub async fn list_by_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = state.favorites.favorites_by_user(&state.pool, user_id).await?;
    Ok(Json(favorites))
}

/// POST /users/{user_id}/favoritos
///
/// An unknown user is a 404 before the body is read.
pub async fn create_for_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
    payload: Result<AppJson<UserFavoriteRequest>, AppError>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    state.favorites.require_user(&state.pool, user_id).await?;
    let AppJson(input) = payload?;

    let favorite = state
        .favorites
        .add_favorite(&state.pool, user_id, input.personajes_id, input.planetas_id)
        .await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /users/{user_id}/favoritos/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath((user_id, id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    state
        .favorites
        .remove_favorite(&state.pool, user_id, id)
        .await?;
    Ok(Json(MessageResponse::new("Favorito deleted")))
}

/// GET /planetas/{planet_id}/favoritos
pub async fn list_by_planet(
    State(state): State<AppState>,
    AppPath(planet_id): AppPath<DbId>,
) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = state
        .favorites
        .favorites_by_planet(&state.pool, planet_id)
        .await?;
    Ok(Json(favorites))
}

/// POST /planetas/{planet_id}/favoritos
///
/// The planet is checked before the body is read, so an unknown planet
/// always answers 404.
pub async fn create_for_planet(
    State(state): State<AppState>,
    AppPath(planet_id): AppPath<DbId>,
    payload: Result<AppJson<PlanetFavoriteRequest>, AppError>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    state.favorites.require_planet(&state.pool, planet_id).await?;
    let AppJson(input) = payload?;

    let user_id = input.usuario_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("usuario_id is required".into()))
    })?;

    let favorite = state
        .favorites
        .add_favorite(&state.pool, user_id, input.personajes_id, Some(planet_id))
        .await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}
