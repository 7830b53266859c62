//! Handlers for the `/planetas` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_core::validation::{validate_non_negative_i64, validate_required_text};
use holonet_db::models::planet::{Planet, PlanetInput};
use holonet_db::repositories::PlanetRepo;

use crate::error::{not_found, AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::favorites::PLANET_ENTITY;
use crate::response::MessageResponse;
use crate::state::AppState;

fn validate(input: &PlanetInput) -> Result<(), CoreError> {
    validate_required_text(&input.name, "nombre")?;
    validate_non_negative_i64(input.diameter, "diametro")?;
    validate_non_negative_i64(input.orbital_period, "periodo_orbital")?;
    validate_non_negative_i64(input.population, "poblacion")?;
    Ok(())
}

/// GET /planetas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(planets))
}

/// GET /planetas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Planet>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(PLANET_ENTITY, id))?;
    Ok(Json(planet))
}

/// POST /planetas
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<PlanetInput>,
) -> AppResult<(StatusCode, Json<Planet>)> {
    validate(&input)?;
    let planet = PlanetRepo::create(&state.pool, &input).await?;
    tracing::info!(planet_id = planet.id, "Planet created");
    Ok((StatusCode::CREATED, Json(planet)))
}

/// PUT /planetas/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    payload: Result<AppJson<PlanetInput>, AppError>,
) -> AppResult<Json<Planet>> {
    if !PlanetRepo::exists(&state.pool, id).await? {
        return Err(not_found(PLANET_ENTITY, id));
    }
    let AppJson(input) = payload?;
    validate(&input)?;
    let planet = PlanetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(PLANET_ENTITY, id))?;
    tracing::info!(planet_id = id, "Planet updated");
    Ok(Json(planet))
}

/// DELETE /planetas/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !state.favorites.delete_planet(&state.pool, id).await? {
        return Err(not_found(PLANET_ENTITY, id));
    }
    tracing::info!(planet_id = id, "Planet deleted");
    Ok(Json(MessageResponse::new("Planeta deleted")))
}
