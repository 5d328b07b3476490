//! End-to-end tests through the full application router
//!
//! Register, fetch a token, then drive the protected product routes, the
//! same way a client would.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum_helpers::{ErrorResponse, JwtConfig};
use catalog_api::config::{Config, Environment, StorageBackend};
use catalog_api::state::{AppState, Storage};
use core_config::server::ServerConfig;
use database::sql::SqlConfig;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDatabase;
use tower::ServiceExt; // For oneshot()

const SECRET: &str = "catalog-app-test-secret-of-32-chars";

fn config(storage: StorageBackend) -> Config {
    Config {
        app: core_config::app_info!(),
        server: ServerConfig::default(),
        environment: Environment::Development,
        database: SqlConfig::in_memory(),
        storage,
        jwt: JwtConfig::new(SECRET).unwrap(),
    }
}

fn memory_app() -> Router {
    let state = AppState::new(config(StorageBackend::Memory), Storage::Memory);
    catalog_api::app(&state)
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_string(&value).unwrap())
        }
        None => Body::empty(),
    };

    app.clone().oneshot(request.body(body).unwrap()).await.unwrap()
}

async fn register_and_login(app: &Router) -> String {
    let response = call(
        app,
        "POST",
        "/users",
        None,
        Some(json!({"name": "John Doe", "email": "j@j.com", "password": "123456"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = call(
        app,
        "POST",
        "/users/generateToken",
        None,
        Some(json!({"email": "j@j.com", "password": "123456"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response).await;
    body["access_token"].as_str().unwrap().to_string()
}

async fn product_lifecycle(app: Router) {
    let token = register_and_login(&app).await;
    let token = Some(token.as_str());

    for i in 1..=3 {
        let response = call(
            &app,
            "POST",
            "/products",
            token,
            Some(json!({"name": format!("Product {}", i), "price": i * 10})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = call(&app, "GET", "/products?page=1&limit=2&sort=desc", token, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page: Vec<Value> = json_body(response).await;
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["name"], "Product 3");

    let id = page[1]["id"].as_str().unwrap().to_string();
    let uri = format!("/products/{}", id);

    let response = call(&app, "PUT", &uri, token, Some(json!({"name": "Renamed", "price": 1.5}))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = call(&app, "GET", &uri, token, None).await;
    let product: Value = json_body(response).await;
    assert_eq!(product["id"], id);
    assert_eq!(product["name"], "Renamed");

    let response = call(&app, "DELETE", &uri, token, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = call(&app, "GET", &uri, token, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_lifecycle_memory_backend() {
    product_lifecycle(memory_app()).await;
}

#[tokio::test]
async fn test_product_lifecycle_sql_backend() {
    let db = TestDatabase::new().await;
    let state = AppState::new(config(StorageBackend::Sql), Storage::Sql(db.connection()));
    product_lifecycle(catalog_api::app(&state)).await;
}

#[tokio::test]
async fn test_products_require_token() {
    let app = memory_app();

    let response = call(&app, "GET", "/products", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.message, "missing bearer token");

    let response = call(&app, "GET", "/products", Some("not.a.jwt"), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.message, "invalid or expired token");
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let app = memory_app();

    let other = axum_helpers::JwtAuth::new(
        &JwtConfig::new("some-other-secret-that-is-32-chars-long").unwrap(),
    );
    let forged = other.issue_access_token("someone", "Mallory").unwrap();

    let response = call(&app, "GET", "/products", Some(&forged), None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_users_routes_are_public() {
    let app = memory_app();

    let response = call(
        &app,
        "POST",
        "/users/generateToken",
        None,
        Some(json!({"email": "nobody@j.com", "password": "x"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = memory_app();

    let response = call(&app, "GET", "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "catalog_api");

    let response = call(&app, "GET", "/ready", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_ready_pings_database() {
    let db = TestDatabase::new().await;
    let state = AppState::new(config(StorageBackend::Sql), Storage::Sql(db.connection()));

    let response = call(&catalog_api::app(&state), "GET", "/ready", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_docs_and_fallback() {
    let app = memory_app();

    let response = call(&app, "GET", "/docs/openapi.json", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc: Value = json_body(response).await;
    assert!(doc["paths"]["/products/{id}"].is_object());

    let response = call(&app, "GET", "/nowhere", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response).await;
    assert_eq!(error.message, "route not found");
}
