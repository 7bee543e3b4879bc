//! In-process test application
//!
//! Builds the full router around an `InMemoryMemberStore` and drives it with
//! `tower::ServiceExt::oneshot`, so no socket or database is needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use church_members::backend::members::InMemoryMemberStore;
use church_members::backend::server::create_app_with_store;
use church_members::shared::AppConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration with the minimum bcrypt cost to keep tests fast
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("postgres://unused")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("test configuration is valid")
}

/// Router plus a handle on its store for seeding and fault injection
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryMemberStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryMemberStore::new());
        let router = create_app_with_store(&test_config(), store.clone());
        Self { router, store }
    }

    /// Send a request and return the status and the body parsed as JSON
    /// (`Value::Null` for an empty body)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body is readable")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is JSON")
        };
        (status, body)
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str, authorization: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }
}
