//! Handlers for the `/personajes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_core::validation::{validate_non_negative_f64, validate_required_text};
use holonet_db::models::character::{Character, CharacterInput};
use holonet_db::repositories::CharacterRepo;

use crate::error::{not_found, AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::favorites::CHARACTER_ENTITY;
use crate::response::MessageResponse;
use crate::state::AppState;

fn validate(input: &CharacterInput) -> Result<(), CoreError> {
    validate_required_text(&input.name, "nombre")?;
    validate_non_negative_f64(input.height, "altura")?;
    validate_required_text(&input.gender, "genero")?;
    validate_non_negative_f64(input.weight, "peso")?;
    Ok(())
}

/// GET /personajes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    Ok(Json(characters))
}

/// GET /personajes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(CHARACTER_ENTITY, id))?;
    Ok(Json(character))
}

/// POST /personajes
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CharacterInput>,
) -> AppResult<(StatusCode, Json<Character>)> {
    validate(&input)?;
    let character = CharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(character_id = character.id, "Character created");
    Ok((StatusCode::CREATED, Json(character)))
}

/// PUT /personajes/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    payload: Result<AppJson<CharacterInput>, AppError>,
) -> AppResult<Json<Character>> {
    if !CharacterRepo::exists(&state.pool, id).await? {
        return Err(not_found(CHARACTER_ENTITY, id));
    }
    let AppJson(input) = payload?;
    validate(&input)?;
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(CHARACTER_ENTITY, id))?;
    tracing::info!(character_id = id, "Character updated");
    Ok(Json(character))
}

/// DELETE /personajes/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !state.favorites.delete_character(&state.pool, id).await? {
        return Err(not_found(CHARACTER_ENTITY, id));
    }
    tracing::info!(character_id = id, "Character deleted");
    Ok(Json(MessageResponse::new("Personaje deleted")))
}
