//! Shared helpers for HTTP-level tests
//!
//! Requests go straight into the router with `oneshot`; no socket is bound.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use quizdb::http_server::{HttpServer, HttpServerConfig};
use quizdb::store::StoreContext;

/// Full application router over an empty in-memory store
pub fn test_app() -> Router {
    app_with(StoreContext::in_memory())
}

/// Full application router over the given store
pub fn app_with(store: StoreContext) -> Router {
    HttpServer::new(HttpServerConfig::default(), store).router()
}

/// Send a request with an optional raw body
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Send a request with a JSON body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let text = body.map(|b| b.to_string());
    send_raw(app, method, uri, text.as_deref()).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Question body with a single correct option
pub fn question_body(description: &str, categories: &[&str]) -> Value {
    json!({
        "description": description,
        "explanation": format!("why {}", description),
        "difficulty": "easy",
        "categories": categories,
        "allow_multiple": false,
        "options": [
            {"option_text": "yes", "is_correct": true},
            {"option_text": "no", "is_correct": false, "explanation": "it is not"}
        ]
    })
}

/// Create a question and return its id
pub async fn create_question(app: &Router, description: &str, categories: &[&str]) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/questions",
        Some(question_body(description, categories)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["_id"].as_str().unwrap().to_string()
}

/// Create a category and return its id
pub async fn create_category(app: &Router, name: &str) -> String {
    let (status, body) = send(app, Method::POST, "/categories", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["_id"].as_str().unwrap().to_string()
}
