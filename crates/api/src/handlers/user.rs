//! Handlers for the `/users` resource.
//!
//! Passwords arrive in plaintext, are hashed with Argon2id before they reach
//! the store, and are never echoed back.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_core::validation::{validate_email, validate_required_text};
use holonet_db::models::user::{User, UserRecord};
use holonet_db::repositories::UserRepo;
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::{not_found, AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::favorites::USER_ENTITY;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for creating or fully replacing a user. Every field is required.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub password: String,
    pub fecha_suscripcion: NaiveDate,
}

impl UserPayload {
    fn validate(&self) -> Result<(), CoreError> {
        validate_required_text(&self.nombre, "nombre")?;
        validate_required_text(&self.apellido, "apellido")?;
        validate_email(&self.email, "email")?;
        validate_required_text(&self.password, "password")?;
        Ok(())
    }

    /// Validate and hash into the column values the repository stores.
    fn into_record(self) -> AppResult<UserRecord> {
        self.validate()?;
        let password_hash = hash_password(&self.password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
        Ok(UserRecord {
            name: self.nombre,
            surname: self.apellido,
            email: self.email,
            password_hash,
            subscription_date: self.fecha_suscripcion,
        })
    }
}

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(USER_ENTITY, id))?;
    Ok(Json(user))
}

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<UserPayload>,
) -> AppResult<(StatusCode, Json<User>)> {
    let record = input.into_record()?;
    let user = UserRepo::create(&state.pool, &record).await?;
    tracing::info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{id}
///
/// Replaces every field, including the password. The id is looked up before
/// the body is read, so a missing user is a 404 whatever the payload.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    payload: Result<AppJson<UserPayload>, AppError>,
) -> AppResult<Json<User>> {
    if !UserRepo::exists(&state.pool, id).await? {
        return Err(not_found(USER_ENTITY, id));
    }
    let AppJson(input) = payload?;
    let record = input.into_record()?;
    let user = UserRepo::update(&state.pool, id, &record)
        .await?
        .ok_or_else(|| not_found(USER_ENTITY, id))?;
    tracing::info!(user_id = id, "User updated");
    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !state.favorites.delete_user(&state.pool, id).await? {
        return Err(not_found(USER_ENTITY, id));
    }
    tracing::info!(user_id = id, "User deleted");
    Ok(Json(MessageResponse::new("User deleted")))
}
