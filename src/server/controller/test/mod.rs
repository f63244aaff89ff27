use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{error::AppError, router::router, state::AppState};

mod app_user;

/// Status, content type and body text of one API response.
struct ApiResponse {
    status: StatusCode,
    content_type: Option<String>,
    body: String,
}

impl ApiResponse {
    fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_str(&self.body).unwrap()
    }

    /// Asserts a plain-text error response carrying `message`.
    fn assert_error(&self, status: StatusCode, message: &str) {
        assert_eq!(self.status, status);
        assert_eq!(self.body, message);
        assert!(self
            .content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("text/plain")));
    }
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

async fn send(db: &DatabaseConnection, request: Request<Body>) -> ApiResponse {
    let response = app(db).oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    ApiResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

async fn call(db: &DatabaseConnection, method: Method, uri: &str) -> ApiResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(db, request).await
}

async fn call_json<T: Serialize>(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    payload: &T,
) -> ApiResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap();

    send(db, request).await
}
