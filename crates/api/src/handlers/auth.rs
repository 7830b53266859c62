//! Handler for `POST /auth/login`.
//!
//! Accepts the credentials as a urlencoded form (the classic login form post)
//! or as a JSON object, and answers with a signed access token when they
//! match the configured gate pair.

use std::convert::Infallible;

use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use holonet_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Submitted credentials.
///
/// Missing fields read as empty, and a body that is neither a form nor JSON
/// reads as no credentials at all. Either way the gate check fails with 401.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl<S> FromRequest<S> for LoginRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let parsed = if is_json {
            Json::<LoginRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(AppError::from)
        } else {
            Form::<LoginRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(AppError::from)
        };

        Ok(parsed.unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Unreadable login body, treating as empty credentials");
            LoginRequest::default()
        }))
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    input: LoginRequest,
) -> AppResult<Json<TokenResponse>> {
    if !state.config.gate.matches(&input.username, &input.password) {
        tracing::info!(username = %input.username, "Rejected login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Credenciales inválidas".into(),
        )));
    }

    let access_token = generate_access_token(&input.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    tracing::info!(username = %input.username, "Issued access token");

    Ok(Json(TokenResponse { access_token }))
}
