//! Route definitions for the login gate.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, private};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /auth/login  -> login (public)
/// GET  /private     -> show (requires Bearer token)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/private", get(private::show))
}
