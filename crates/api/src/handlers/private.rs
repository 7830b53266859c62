//! The one route behind the login gate.

use axum::Json;
use serde::Serialize;

use crate::middleware::auth::AuthUser;

#[derive(Debug, Serialize)]
pub struct PrivateResponse {
    pub username: String,
    pub message: String,
}

/// GET /private
pub async fn show(user: AuthUser) -> Json<PrivateResponse> {
    Json(PrivateResponse {
        message: format!("Bienvenido, {}", user.username),
        username: user.username,
    })
}
