//! Integration tests for owner login and the auth gate.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get_auth, send_json};
use sqlx::PgPool;

use hauler_api::auth::password::hash_password;
use hauler_db::repositories::UserRepo;

async fn seed_owner(pool: &PgPool) {
    let hash = hash_password("correct-horse-battery-staple").unwrap();
    UserRepo::create(pool, "owner", &hash).await.unwrap();
}

// ---------------------------------------------------------------------------
// Test: valid credentials produce a token that opens the dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_issues_usable_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    seed_owner(&pool).await;

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/auth/login",
        None,
        &serde_json::json!({
            "username": "owner",
            "password": "correct-horse-battery-staple",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let token = json["access_token"].as_str().unwrap().to_string();
    assert!(json["expires_in"].as_i64().unwrap() > 0);
    assert_eq!(json["user"]["username"], "owner");

    let response = get_auth(app, "/api/v1/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: a wrong password is rejected without detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    seed_owner(&pool).await;

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        &serde_json::json!({
            "username": "owner",
            "password": "not-the-password",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

// ---------------------------------------------------------------------------
// Test: an unknown username is indistinguishable from a wrong password
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_user_rejected_identically(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = send_json(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        &serde_json::json!({
            "username": "nobody",
            "password": "whatever",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

// ---------------------------------------------------------------------------
// Test: garbage tokens do not open the dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/dashboard", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
