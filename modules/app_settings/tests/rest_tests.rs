//! REST API tests driving the router in-process

use app_settings::api::rest::auth::{USER_ID_HEADER, WORKSPACE_ID_HEADER};
use app_settings::api::rest::routes::register_routes;
use app_settings::config::DefaultAppSettings;
use app_settings::domain::Service;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

mod common;
use common::MockBlockStore;

fn test_router() -> (Router, Arc<MockBlockStore>) {
    let store = Arc::new(MockBlockStore::new());
    let service = Arc::new(Service::new(store.clone(), DefaultAppSettings::default()));
    (register_routes(Router::new(), service), store)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(USER_ID_HEADER, Uuid::new_v4().to_string())
        .header(WORKSPACE_ID_HEADER, Uuid::new_v4().to_string());
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_get_settings_values() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(request(Method::GET, "/apps/app-1/settings", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "appId": "app-1",
            "dbHost": "localhost",
            "dbName": "",
            "dbPassword": "admin",
            "dbPort": 5432,
            "dbUser": "admin",
            "authProvider": "http",
            "generateAdminUI": true,
            "generateGraphQL": true,
            "generateRestApi": true,
            "generateRootFiles": true
        })
    );
}

#[tokio::test]
async fn test_patch_settings_forces_admin_ui_off() {
    let (router, store) = test_router();

    let response = router
        .oneshot(request(
            Method::PATCH,
            "/apps/app-1/settings",
            Some(json!({"generateGraphQL": false, "generateAdminUI": true, "authProvider": "jwt"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["appId"], json!("app-1"));
    assert_eq!(body["generateGraphQL"], json!(false));
    assert_eq!(body["generateAdminUI"], json!(false));
    assert_eq!(body["authProvider"], json!("jwt"));
    assert!(body["id"].is_string());
    assert_eq!(store.blocks_for("app-1").len(), 1);
}

#[tokio::test]
async fn test_missing_actor_headers_unauthorized() {
    let (router, store) = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/apps/app-1/settings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(store.calls().finds, 0);
}

#[tokio::test]
async fn test_store_errors_map_to_problem_details() {
    let (router, store) = test_router();
    store.mark_missing("ghost");
    store.deny("locked-app");

    let response = router
        .clone()
        .oneshot(request(Method::GET, "/apps/ghost/settings", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let problem = body_json(response).await;
    assert_eq!(problem["status"], json!(404));
    assert_eq!(problem["instance"], json!("/apps/ghost/settings"));

    let response = router
        .oneshot(request(Method::GET, "/apps/locked-app/settings", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
