use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;

use mergington::store::seed;
use mergington::web;

/// A router over a freshly seeded catalog. Each test builds its own app so
/// rosters never leak between cases.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let catalog = Arc::new(RwLock::new(seed::default_catalog()));
        Self {
            router: web::router(catalog),
        }
    }

    pub async fn send(&self, method: Method, uri: &str) -> anyhow::Result<Response<Body>> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())?;
        Ok(self.router.clone().oneshot(request).await?)
    }

    /// Sends a request and parses the JSON body.
    pub async fn request_json(
        &self,
        method: Method,
        uri: &str,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let response = self.send(method, uri).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, body))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.request_json(Method::GET, uri).await
    }

    pub async fn post(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.request_json(Method::POST, uri).await
    }

    pub async fn delete(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.request_json(Method::DELETE, uri).await
    }
}
