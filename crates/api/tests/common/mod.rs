//! Shared helpers for the HTTP integration tests.
//!
//! Requests go straight to the router through `tower::ServiceExt::oneshot`;
//! no TCP listener is involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use holonet_api::auth::gate::GateCredentials;
use holonet_api::auth::jwt::JwtConfig;
use holonet_api::config::{CorsOrigins, ServerConfig};
use holonet_api::router::{build_app_router, App};
use holonet_api::state::AppState;
use holonet_core::favorites::FavoritePolicy;
use holonet_db::DbPool;
use http_body_util::BodyExt;
use sqlx::any::AnyPoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with the given favorites policy.
pub fn test_config(favorites: FavoritePolicy) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
        gate: GateCredentials::default(),
        favorites,
    }
}

/// Open the database behind a `#[sqlx::test]` SQLite pool as the `Any` pool
/// the application runs on.
pub fn any_pool(sqlite: &SqlitePool) -> DbPool {
    sqlx::any::install_default_drivers();
    let path = std::fs::canonicalize(sqlite.connect_options().get_filename())
        .expect("test database file should exist");
    AnyPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&format!("sqlite://{}", path.display()))
        .expect("test database URL should parse")
}

/// Build the full application with the default favorites policy.
pub fn build_test_app(pool: SqlitePool) -> App {
    build_test_app_with_policy(pool, FavoritePolicy::default())
}

pub fn build_test_app_with_policy(pool: SqlitePool, favorites: FavoritePolicy) -> App {
    build_app_router(AppState::new(any_pool(&pool), test_config(favorites)))
}

async fn send(app: App, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: App, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: App, uri: &str, authorization: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: App, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: App, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: App, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

/// POST a raw body with an explicit content type.
pub async fn post_raw(app: App, uri: &str, content_type: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: App, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn user_body(nombre: &str) -> serde_json::Value {
    serde_json::json!({
        "nombre": nombre,
        "apellido": "Skywalker",
        "email": format!("{}@tatooine.net", nombre.to_lowercase()),
        "password": "use-the-force",
        "fecha_suscripcion": "2024-05-04",
    })
}

pub fn character_body(nombre: &str) -> serde_json::Value {
    serde_json::json!({
        "nombre": nombre,
        "altura": 172,
        "genero": "male",
        "peso": 77,
    })
}

pub fn tatooine_body() -> serde_json::Value {
    serde_json::json!({
        "nombre": "Tatooine",
        "diametro": 10465,
        "periodo_orbital": 304,
        "poblacion": 200000,
    })
}

/// POST a fixture and return the id assigned by the store.
pub async fn create(app: App, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"]
        .as_i64()
        .expect("created entity must have an integer id")
}
