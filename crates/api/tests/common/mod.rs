//! Shared helpers for API integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses. The blob store is an in-memory
//! spy and the SMS gateway URL points at an unroutable local port, so
//! notification attempts fail fast without leaving the process.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use hauler_api::auth::jwt::{generate_access_token, JwtConfig};
use hauler_api::auth::password::hash_password;
use hauler_api::config::{ServerConfig, SmsConfig, StorageBackend, StorageConfig};
use hauler_api::routes;
use hauler_api::state::AppState;
use hauler_db::repositories::UserRepo;
use hauler_sms::SmsSender;
use hauler_storage::MemoryBlobStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        sms: SmsConfig {
            // Nothing listens here; sends fail fast with a structured outcome.
            gateway_url: "http://127.0.0.1:9/text".to_string(),
            api_key: "textbelt".to_string(),
            owner_phone: None,
        },
        storage: StorageConfig {
            backend: StorageBackend::Local,
            local_root: "storage".to_string(),
            public_base_url: "http://localhost:3000/storage".to_string(),
        },
    }
}

/// Build the application router plus a handle to the in-memory blob store
/// so tests can assert on upload activity.
pub fn build_test_app_with_store(pool: PgPool) -> (Router, Arc<MemoryBlobStore>) {
    let config = test_config();
    let blob_store = Arc::new(MemoryBlobStore::new());
    let sms = Arc::new(SmsSender::new(
        config.sms.gateway_url.clone(),
        config.sms.api_key.clone(),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config),
        blob_store: blob_store.clone(),
        sms,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let router = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    (router, blob_store)
}

/// Build the application router without the blob store handle.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_store(pool).0
}

/// Create an owner account and return a valid access token for it.
pub async fn owner_token(pool: &PgPool) -> String {
    let hash = hash_password("a-long-enough-test-password").unwrap();
    let user = UserRepo::create(pool, "owner", &hash).await.unwrap();
    generate_access_token(user.id, &user.username, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Issue a GET request.
pub async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a GET request with a Bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a JSON request with an optional Bearer token.
pub async fn send_json(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Issue a bodyless request (PATCH/DELETE) with an optional Bearer token.
pub async fn send_empty(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "test-boundary-7f3a9c";

/// Incrementally build a `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Finish the body, returning the content type and the raw bytes.
    pub fn build(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        (
            format!("multipart/form-data; boundary={BOUNDARY}"),
            self.body,
        )
    }
}

/// Issue a multipart request with an optional Bearer token.
pub async fn send_multipart(
    app: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    builder: MultipartBuilder,
) -> Response {
    let (content_type, body) = builder.build();
    let mut request = Request::builder()
        .method(method)
        .uri(path)
        .header(CONTENT_TYPE, content_type);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}
