#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use tower::ServiceExt;

use folio::config::SiteConfig;
use folio::routes::setup_router;
use folio::state::AppState;
use folio::storage::MemoryStore;

/// Router over a fresh in-memory store, plus the store so tests can inspect it.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = setup_router(AppState::new(Arc::clone(&store), SiteConfig::default()));
    (app, store)
}

pub async fn get(app: &Router, uri: &str) -> Response<axum::body::BoxBody> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response<axum::body::BoxBody> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<axum::body::BoxBody>) -> String {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<axum::body::BoxBody>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

pub async fn sign_in(app: &Router) {
    let response = post_form(app, "/admin", "password=admin").await;
    assert_eq!(location(&response), "/admin/dashboard");
}
