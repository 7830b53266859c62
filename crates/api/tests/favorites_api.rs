//! HTTP-level tests for favorites under users and planets.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, character_body, create, delete, get, post_json, post_raw, tatooine_body, user_body,
};
use holonet_core::favorites::FavoritePolicy;
use serde_json::json;
use sqlx::SqlitePool;

struct Galaxy {
    luke: i64,
    leia: i64,
    han: i64,
    tatooine: i64,
}

async fn seed(pool: &SqlitePool) -> Galaxy {
    let app = || common::build_test_app(pool.clone());
    Galaxy {
        luke: create(app(), "/users", user_body("Luke")).await,
        leia: create(app(), "/users", user_body("Leia")).await,
        han: create(app(), "/personajes", character_body("Han")).await,
        tatooine: create(app(), "/planetas", tatooine_body()).await,
    }
}

async fn favorite_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM favorites")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Creation and listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_character_favorite_listed_under_user_only(pool: SqlitePool) {
    let g = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/users/{}/favoritos", g.luke),
        json!({"personajes_id": g.han}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["usuario_id"], g.luke);
    assert_eq!(created["personajes_id"], g.han);
    assert!(created["planetas_id"].is_null());

    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, &format!("/users/{}/favoritos", g.luke)).await).await;
    assert_eq!(list, json!([created]));

    let app = common::build_test_app(pool);
    let list = body_json(get(app, &format!("/planetas/{}/favoritos", g.tatooine)).await).await;
    assert_eq!(list, json!([]));
}

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_planet_favorite_listed_under_user_and_planet(pool: SqlitePool) {
    let g = seed(&pool).await;

    let id = create(
        common::build_test_app(pool.clone()),
        &format!("/users/{}/favoritos", g.leia),
        json!({"planetas_id": g.tatooine}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let list = body_json(get(app, &format!("/planetas/{}/favoritos", g.tatooine)).await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], id);
    assert_eq!(list[0]["usuario_id"], g.leia);

    let app = common::build_test_app(pool);
    let list = body_json(get(app, &format!("/users/{}/favoritos", g.leia)).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_favorite_needs_exactly_one_target(pool: SqlitePool) {
    let g = seed(&pool).await;
    let uri = format!("/users/{}/favoritos", g.luke);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &uri,
        json!({"personajes_id": g.han, "planetas_id": g.tatooine}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(favorite_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_favorite_for_unknown_user_or_target(pool: SqlitePool) {
    let g = seed(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/users/999/favoritos", json!({"personajes_id": g.han})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "User with id 999 not found");

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/users/{}/favoritos", g.luke),
        json!({"personajes_id": 999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Personaje with id 999 not found"
    );

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/users/999/favoritos").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(favorite_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_unknown_owner_is_404_before_body_is_read(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/users/999/favoritos", json!({"personajes_id": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "User with id 999 not found");

    let app = common::build_test_app(pool.clone());
    let response = post_raw(app, "/planetas/999/favoritos", "application/json", "{").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Planeta with id 999 not found");

    assert_eq!(favorite_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_create_favorite_through_planet(pool: SqlitePool) {
    let g = seed(&pool).await;
    let uri = format!("/planetas/{}/favoritos", g.tatooine);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &uri, json!({"usuario_id": g.luke})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["usuario_id"], g.luke);
    assert_eq!(created["planetas_id"], g.tatooine);
    assert!(created["personajes_id"].is_null());

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "usuario_id is required");

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &uri,
        json!({"usuario_id": g.luke, "personajes_id": g.han}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/planetas/999/favoritos", json!({"usuario_id": g.luke})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/planetas/999/favoritos").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(favorite_count(&pool).await, 1);
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_delete_favorite_then_again(pool: SqlitePool) {
    let g = seed(&pool).await;
    let fid = create(
        common::build_test_app(pool.clone()),
        &format!("/users/{}/favoritos", g.luke),
        json!({"personajes_id": g.han}),
    )
    .await;
    let uri = format!("/users/{}/favoritos/{fid}", g.luke);

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Favorito deleted");

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let list = body_json(
        get(
            common::build_test_app(pool),
            &format!("/users/{}/favoritos", g.luke),
        )
        .await,
    )
    .await;
    assert_eq!(list, json!([]));
}

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_default_policy_ignores_route_owner(pool: SqlitePool) {
    let g = seed(&pool).await;
    let fid = create(
        common::build_test_app(pool.clone()),
        &format!("/users/{}/favoritos", g.luke),
        json!({"personajes_id": g.han}),
    )
    .await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/users/{}/favoritos/{fid}", g.leia),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(favorite_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_default_policy_keeps_favorites_of_deleted_user(pool: SqlitePool) {
    let g = seed(&pool).await;
    create(
        common::build_test_app(pool.clone()),
        &format!("/users/{}/favoritos", g.luke),
        json!({"planetas_id": g.tatooine}),
    )
    .await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/users/{}", g.luke),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(favorite_count(&pool).await, 1);

    // The orphan still shows up under its planet.
    let list = body_json(
        get(
            common::build_test_app(pool),
            &format!("/planetas/{}/favoritos", g.tatooine),
        )
        .await,
    )
    .await;
    assert_eq!(list[0]["usuario_id"], g.luke);
}

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_ownership_policy_hides_foreign_favorites(pool: SqlitePool) {
    let policy = FavoritePolicy {
        cascade_delete: false,
        check_ownership: true,
    };
    let g = seed(&pool).await;
    let fid = create(
        common::build_test_app(pool.clone()),
        &format!("/users/{}/favoritos", g.luke),
        json!({"personajes_id": g.han}),
    )
    .await;

    let app = common::build_test_app_with_policy(pool.clone(), policy);
    let response = delete(app, &format!("/users/{}/favoritos/{fid}", g.leia)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(favorite_count(&pool).await, 1);

    let app = common::build_test_app_with_policy(pool.clone(), policy);
    let response = delete(app, &format!("/users/{}/favoritos/{fid}", g.luke)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(favorite_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations/sqlite")]
async fn test_cascade_policy_removes_dependent_favorites(pool: SqlitePool) {
    let policy = FavoritePolicy {
        cascade_delete: true,
        check_ownership: false,
    };
    let g = seed(&pool).await;
    for body in [json!({"planetas_id": g.tatooine}), json!({"personajes_id": g.han})] {
        create(
            common::build_test_app(pool.clone()),
            &format!("/users/{}/favoritos", g.leia),
            body,
        )
        .await;
    }
    assert_eq!(favorite_count(&pool).await, 2);

    let app = common::build_test_app_with_policy(pool.clone(), policy);
    let response = delete(app, &format!("/planetas/{}", g.tatooine)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(favorite_count(&pool).await, 1);

    let app = common::build_test_app_with_policy(pool.clone(), policy);
    let response = delete(app, &format!("/users/{}", g.leia)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(favorite_count(&pool).await, 0);

    let app = common::build_test_app_with_policy(pool.clone(), policy);
    let response = delete(app, "/personajes/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
