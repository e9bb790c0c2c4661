//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use datajobs_core::config::AppConfig;
use datajobs_service::DataJobService;
use datajobs_store::InMemoryDataJobStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Captured response for assertions
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Value::Null` for empty bodies)
    pub body: Value,
    /// `Location` header, if present
    pub location: Option<String>,
}

impl TestApp {
    /// Create a new test application with a fresh in-memory store.
    pub fn new() -> Self {
        let config = AppConfig::default();
        let store = Arc::new(InMemoryDataJobStore::new());
        let datajob_service = Arc::new(DataJobService::new(store));

        let state = datajobs_api::AppState {
            config: Arc::new(config),
            datajob_service,
        };

        Self {
            router: datajobs_api::build_router(state),
        }
    }

    /// Send a request through the router and capture the response.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                builder
                    .body(Body::from(json.to_string()))
                    .expect("build request")
            }
            None => builder.body(Body::empty()).expect("build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router never fails");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        TestResponse {
            status,
            body,
            location,
        }
    }

    /// Create a job through the API and return its id string.
    pub async fn create_job(&self, name: &str, file_path: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/datajobs",
                Some(serde_json::json!({
                    "name": name,
                    "filePathToProcess": file_path,
                })),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        response.body["id"]
            .as_str()
            .expect("created job has an id")
            .to_string()
    }
}
